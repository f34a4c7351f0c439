//! Configuration validation.
//!
//! Semantic checks on top of serde's syntactic parsing. Pure function over
//! the config, returning every violation rather than stopping at the first.

use std::net::SocketAddr;

use axum::http::StatusCode;

use crate::config::schema::ProxyConfig;

/// A single semantic violation found in a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address".into(),
            message: format!(
                "not a valid socket address: {:?}",
                config.listener.bind_address
            ),
        });
    }

    match url::Url::parse(&config.upstream.base_url) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
        Ok(parsed) => errors.push(ValidationError {
            field: "upstream.base_url".into(),
            message: format!("unsupported scheme: {}", parsed.scheme()),
        }),
        Err(e) => errors.push(ValidationError {
            field: "upstream.base_url".into(),
            message: format!("not a valid URL: {}", e),
        }),
    }

    if !(1..=14).contains(&config.upstream.forecast_days) {
        errors.push(ValidationError {
            field: "upstream.forecast_days".into(),
            message: format!(
                "must be between 1 and 14, got {}",
                config.upstream.forecast_days
            ),
        });
    }

    for (i, entry) in config.upstream.error_map.iter().enumerate() {
        if StatusCode::from_u16(entry.status).is_err() {
            errors.push(ValidationError {
                field: format!("upstream.error_map[{}].status", i),
                message: format!("not a valid HTTP status: {}", entry.status),
            });
        }
    }

    if config.cors.allow_origin.trim().is_empty() {
        errors.push(ValidationError {
            field: "cors.allow_origin".into(),
            message: "must not be empty; use `*` to allow any origin".into(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
