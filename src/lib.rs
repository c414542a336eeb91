//! API server for the Ethereum Dashboard.
//!
//! The service currently exposes a single liveness endpoint behind a
//! cross-origin policy that lets the dashboard frontend call it with
//! credentials:
//!
//! ```text
//! GET /health  ->  200 {"status": "healthy"}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP router, handlers, CORS policy and OpenAPI document
//! - [`metrics`]: Prometheus counters and exporter
//! - [`probe`]: Client-side health probe
//! - [`utils`]: Shutdown signal handling

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod probe;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
