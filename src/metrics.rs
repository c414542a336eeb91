//! Prometheus metrics for the API.
//!
//! The exporter runs on its own listener so the API route table carries
//! nothing but the service's own endpoints.

use std::net::SocketAddr;

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{debug, info};

use crate::error::{AppError, Result};

// === Metric Name Constants ===

/// Health checks served counter metric name.
pub const METRIC_HEALTH_CHECKS: &str = "health_checks_total";

/// Register metric descriptions with the installed recorder.
/// Descriptions sent before a recorder is installed are dropped.
pub fn init_metrics() {
    describe_counter!(
        METRIC_HEALTH_CHECKS,
        "Total number of health check requests served"
    );

    debug!("Metrics initialized");
}

/// Install the Prometheus recorder, start its scrape listener and register
/// metric descriptions with it.
///
/// Must be called from within a tokio runtime.
pub fn install_exporter(addr: SocketAddr) -> Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| AppError::Metrics(e.to_string()))?;
    init_metrics();

    info!("Prometheus exporter listening on {}", addr);
    Ok(())
}

/// Increment health checks served counter.
pub fn inc_health_checks() {
    counter!(METRIC_HEALTH_CHECKS).increment(1);
}
