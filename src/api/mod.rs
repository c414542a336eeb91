//! HTTP API module: the liveness endpoint and its cross-origin policy.

pub mod cors;
pub mod handlers;
pub mod openapi;
pub mod routes;

pub use cors::CorsPolicy;
pub use handlers::{HealthResponse, HealthStatus};
pub use openapi::ApiDoc;
pub use routes::create_router;
