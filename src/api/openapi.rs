//! OpenAPI description of the HTTP API.

use utoipa::OpenApi;

use super::handlers::{HealthResponse, HealthStatus};

/// OpenAPI document for the service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ethereum Dashboard",
        description = "API for Ethereum Dashboard",
        version = "1.0.0"
    ),
    paths(crate::api::handlers::health),
    components(schemas(HealthResponse, HealthStatus)),
    tags((name = "health", description = "Liveness checks"))
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Render the document as pretty-printed JSON.
    pub fn to_pretty_json() -> Result<String, serde_json::Error> {
        Self::openapi().to_pretty_json()
    }
}
