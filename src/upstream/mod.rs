//! Weather provider subsystem.
//!
//! # Data Flow
//! ```text
//! validated city + API key
//!     → client.rs (URL construction, upstream GET, body read)
//!     → error.rs (provider error extraction, code → status translation)
//!     → http layer (verbatim payload or mapped error response)
//! ```

pub mod client;
pub mod error;

pub use client::{UpstreamOutcome, WeatherClient};
pub use error::{ProviderError, UpstreamError};
