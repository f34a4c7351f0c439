//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → environment overlay (WEATHER_API_KEY)
//!     → ProxyConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The API key never has to appear in a file; the environment can carry it

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::CorsConfig;
pub use schema::ErrorStatusMapping;
pub use schema::ProxyConfig;
pub use schema::UpstreamConfig;
