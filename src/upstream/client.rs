//! Weather provider client.
//!
//! # Responsibilities
//! - Build the forecast URL (percent-encoded city, fixed query shape)
//! - Issue the upstream GET and read the body
//! - Separate transport/parse failures from provider-reported errors
//!
//! # Design Decisions
//! - One attempt per request: no retries, no backoff, no timeout beyond
//!   the transport default
//! - The body is parsed exactly once; the success path hands the original
//!   bytes back so the caller receives the provider payload verbatim

use serde_json::Value;

use crate::config::schema::UpstreamConfig;
use crate::upstream::error::{ProviderError, UpstreamError};

/// Outcome of a provider call that completed at the HTTP layer.
#[derive(Debug)]
pub enum UpstreamOutcome {
    /// 2xx: raw payload, forwarded to the caller byte-for-byte.
    Success(Vec<u8>),

    /// Non-2xx: provider-reported error object.
    Provider(ProviderError),
}

/// HTTP client for the weather provider.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl WeatherClient {
    /// Create a client for the configured provider endpoint.
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Forecast URL for a city. The key is the only secret in the process;
    /// this string must never reach a log line or a client body.
    fn forecast_url(&self, city: &str, api_key: &str) -> String {
        format!(
            "{}?key={}&q={}&days={}&aqi={}",
            self.config.base_url,
            api_key,
            urlencoding::encode(city),
            self.config.forecast_days,
            if self.config.include_aqi { "yes" } else { "no" },
        )
    }

    /// Fetch the forecast for a city.
    ///
    /// Transport failures and non-JSON bodies are `Err`; a provider error
    /// reported next to a non-2xx status arrives as
    /// `Ok(UpstreamOutcome::Provider)` so the caller can translate it.
    pub async fn fetch_forecast(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<UpstreamOutcome, UpstreamError> {
        let url = self.forecast_url(city, api_key);
        // reqwest errors carry the request URL, and the URL carries the
        // key; strip it before the error can reach a log or a response.
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url()))?;

        let parsed: Value = serde_json::from_slice(&body)?;

        if status.is_success() {
            tracing::debug!(city, status = %status, bytes = body.len(), "forecast fetched");
            Ok(UpstreamOutcome::Success(body.to_vec()))
        } else {
            let error = ProviderError::from_body(&parsed);
            tracing::warn!(city, status = %status, code = %error.code, "provider reported error");
            Ok(UpstreamOutcome::Provider(error))
        }
    }
}
