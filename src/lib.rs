//! Weather proxy service.
//!
//! A single-endpoint HTTP service that forwards browser weather queries to
//! the upstream provider, injecting the API key server-side so it never
//! reaches client code.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌────────────────────────────────────────────────┐
//!                     │                 WEATHER PROXY                   │
//!                     │                                                 │
//!   Browser request   │  ┌──────────┐   ┌─────────┐   ┌────────────┐   │
//!   ──────────────────┼─▶│   cors   │──▶│  http   │──▶│  upstream  │───┼──▶ WeatherAPI
//!                     │  │middleware│   │ server  │   │   client   │   │
//!                     │  └──────────┘   └─────────┘   └────────────┘   │
//!   Browser response  │                                                 │
//!   ◀─────────────────┼───── verbatim payload / translated error ───────┤
//!                     │                                                 │
//!                     │  ┌───────────────────────────────────────────┐  │
//!                     │  │           Cross-Cutting Concerns           │  │
//!                     │  │  ┌────────┐ ┌─────────────┐ ┌──────────┐  │  │
//!                     │  │  │ config │ │observability│ │lifecycle │  │  │
//!                     │  │  └────────┘ └─────────────┘ └──────────┘  │  │
//!                     │  └───────────────────────────────────────────┘  │
//!                     └────────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
