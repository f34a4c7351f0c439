//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! client request
//!     → middleware/cors.rs (preflight short-circuit, header triple)
//!     → server.rs (routing, method gate, state machine)
//!     → request.rs (query validation)
//!     → upstream client call
//!     → response.rs (translate outcome, forward payload verbatim)
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use server::HttpServer;
