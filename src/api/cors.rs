//! Cross-origin policy applied to every route.

use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

use crate::error::{AppError, Result};

/// How long browsers may cache a preflight answer.
pub const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(600);

/// Which browser origins may read responses, and whether they may send
/// credentials. Methods and headers are always unrestricted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    /// Exact origins granted access, or a single `*`.
    pub allowed_origins: Vec<String>,
    /// Grant credentialed (cookie / auth header) access.
    pub allow_credentials: bool,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
            allow_credentials: true,
        }
    }
}

impl CorsPolicy {
    fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }

    /// Build the tower layer for this policy.
    ///
    /// Browsers ignore a literal `*` on credentialed requests, so with
    /// credentials enabled the preflight's requested method and headers are
    /// echoed back instead.
    pub fn layer(&self) -> Result<CorsLayer> {
        if self.allows_any_origin() {
            if self.allow_credentials {
                return Err(AppError::InvalidConfig(
                    "wildcard origin cannot be combined with credentials".to_string(),
                ));
            }
            return Ok(CorsLayer::new()
                .max_age(PREFLIGHT_MAX_AGE)
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any));
        }

        let origins = self
            .allowed_origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o)
                    .map_err(|_| AppError::InvalidConfig(format!("invalid origin `{o}`")))
            })
            .collect::<Result<Vec<_>>>()?;

        let layer = CorsLayer::new()
            .max_age(PREFLIGHT_MAX_AGE)
            .allow_origin(AllowOrigin::list(origins));

        Ok(if self.allow_credentials {
            layer
                .allow_credentials(true)
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
        } else {
            layer.allow_methods(Any).allow_headers(Any)
        })
    }
}
