//! Structured logging.
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to this
//! crate and to tower_http.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
pub fn init(log_level: &str) {
    let fallback = format!("weather_proxy={log_level},tower_http={log_level}");
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&fallback)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
