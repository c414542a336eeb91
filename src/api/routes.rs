//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::cors::CorsPolicy;
use super::handlers::health;
use crate::error::Result;

/// Create the API router.
///
/// The route table is fixed at construction; the cross-origin layer wraps
/// every route registered here.
pub fn create_router(cors: &CorsPolicy) -> Result<Router> {
    Ok(Router::new()
        .route("/health", get(health))
        .layer(cors.layer()?)
        .layer(TraceLayer::new_for_http()))
}
