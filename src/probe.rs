//! Client-side liveness probe for a running instance.
//!
//! Meant for container health checks, where the image ships the server
//! binary but no HTTP client.

use std::time::Duration;

use tracing::debug;

use crate::api::HealthResponse;
use crate::error::{AppError, Result};

/// Default time allowed for the whole probe request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Request `<base_url>/health` and confirm the service reports healthy.
pub async fn probe(base_url: &str, timeout: Duration) -> Result<HealthResponse> {
    let url = format!("{}/health", base_url.trim_end_matches('/'));
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    debug!(url = %url, "Probing service");
    let response = client.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Unhealthy {
            reason: format!("{url} returned {status}"),
        });
    }

    Ok(response.json::<HealthResponse>().await?)
}
