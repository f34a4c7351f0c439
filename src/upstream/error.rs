//! Upstream error taxonomy and provider error translation.

use axum::http::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::config::schema::ErrorStatusMapping;

/// Fallback code when the provider body carries no usable `error.code`.
const UNKNOWN_CODE: &str = "unknown";

/// Fallback message when the provider body carries no usable `error.message`.
const UNKNOWN_MESSAGE: &str = "Unknown error from WeatherAPI.";

/// Failures talking to the provider. Both variants surface to the caller
/// as 500 with the underlying message in a `detail` field.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    MalformedBody(#[from] serde_json::Error),
}

/// Error object reported by the provider alongside a non-2xx status.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderError {
    /// Provider error code, forwarded as-is. A numeric code stays numeric;
    /// a body without one yields the string `"unknown"`.
    pub code: Value,

    /// Provider error message.
    pub message: String,
}

impl ProviderError {
    /// Pull `error.code` / `error.message` out of a provider body,
    /// defaulting whichever pieces are missing.
    pub fn from_body(body: &Value) -> Self {
        let error = body.get("error");
        let code = error
            .and_then(|e| e.get("code"))
            .cloned()
            .unwrap_or_else(|| Value::from(UNKNOWN_CODE));
        let message = error
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_MESSAGE)
            .to_string();
        Self { code, message }
    }

    /// Translate the provider code through the configured status table.
    /// Codes not present in the table answer 502.
    pub fn http_status(&self, table: &[ErrorStatusMapping]) -> StatusCode {
        self.code
            .as_u64()
            .and_then(|code| table.iter().find(|m| m.code == code))
            .and_then(|m| StatusCode::from_u16(m.status).ok())
            .unwrap_or(StatusCode::BAD_GATEWAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::UpstreamConfig;
    use serde_json::json;

    fn table() -> Vec<ErrorStatusMapping> {
        UpstreamConfig::default().error_map
    }

    #[test]
    fn extracts_code_and_message() {
        let body = json!({"error": {"code": 1006, "message": "No matching location found."}});
        let error = ProviderError::from_body(&body);
        assert_eq!(error.code, json!(1006));
        assert_eq!(error.message, "No matching location found.");
    }

    #[test]
    fn defaults_when_error_object_missing() {
        let error = ProviderError::from_body(&json!({}));
        assert_eq!(error.code, json!("unknown"));
        assert_eq!(error.message, "Unknown error from WeatherAPI.");
    }

    #[test]
    fn defaults_message_when_only_code_present() {
        let error = ProviderError::from_body(&json!({"error": {"code": 2006}}));
        assert_eq!(error.code, json!(2006));
        assert_eq!(error.message, "Unknown error from WeatherAPI.");
    }

    #[test]
    fn known_codes_map_per_table() {
        let cases = [
            (1006, StatusCode::NOT_FOUND),
            (2006, StatusCode::UNAUTHORIZED),
            (2007, StatusCode::FORBIDDEN),
            (2008, StatusCode::FORBIDDEN),
            (9000, StatusCode::BAD_REQUEST),
            (9001, StatusCode::BAD_REQUEST),
        ];
        for (code, expected) in cases {
            let error = ProviderError {
                code: json!(code),
                message: String::new(),
            };
            assert_eq!(error.http_status(&table()), expected, "code {}", code);
        }
    }

    #[test]
    fn unmapped_code_is_bad_gateway() {
        let error = ProviderError {
            code: json!(9999),
            message: String::new(),
        };
        assert_eq!(error.http_status(&table()), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn non_numeric_code_is_bad_gateway() {
        let error = ProviderError {
            code: json!("unknown"),
            message: String::new(),
        };
        assert_eq!(error.http_status(&table()), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn empty_table_maps_everything_to_bad_gateway() {
        let error = ProviderError {
            code: json!(1006),
            message: String::new(),
        };
        assert_eq!(error.http_status(&[]), StatusCode::BAD_GATEWAY);
    }
}
