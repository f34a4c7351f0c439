//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files, and
//! every field carries a default so an empty config is a working config.

use serde::{Deserialize, Serialize};

/// Root configuration for the weather proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream weather provider settings.
    pub upstream: UpstreamConfig,

    /// CORS settings for browser callers.
    pub cors: CorsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream weather provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Forecast endpoint URL.
    pub base_url: String,

    /// Provider API key. When unset here, the loader falls back to the
    /// `WEATHER_API_KEY` environment variable. Absence is reported per
    /// request (500), never at startup, and the value itself is never
    /// logged or echoed to callers.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Number of forecast days to request.
    pub forecast_days: u8,

    /// Request air-quality data alongside the forecast.
    pub include_aqi: bool,

    /// Provider error code → HTTP status. Codes not listed here answer 502.
    pub error_map: Vec<ErrorStatusMapping>,
}

/// Single entry of the provider-error translation table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorStatusMapping {
    /// Numeric error code as reported by the provider.
    pub code: u64,

    /// HTTP status to answer with.
    pub status: u16,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.weatherapi.com/v1/forecast.json".to_string(),
            api_key: None,
            forecast_days: 7,
            include_aqi: true,
            error_map: default_error_map(),
        }
    }
}

/// Provider error catalog as published by WeatherAPI.
fn default_error_map() -> Vec<ErrorStatusMapping> {
    vec![
        ErrorStatusMapping { code: 1006, status: 404 }, // no matching location
        ErrorStatusMapping { code: 2006, status: 401 }, // invalid API key
        ErrorStatusMapping { code: 2007, status: 403 }, // quota exceeded
        ErrorStatusMapping { code: 2008, status: 403 }, // API key disabled
        ErrorStatusMapping { code: 9000, status: 400 }, // invalid bulk JSON
        ErrorStatusMapping { code: 9001, status: 400 }, // bulk JSON too large
    ]
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origin allowed to call the proxy. `*` for development; set a
    /// concrete origin in production.
    pub allow_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: "*".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
