//! Metrics collection and exposition.
//!
//! # Metrics
//! - `catalog_requests_total` (counter): requests by method, endpoint, status
//! - `catalog_request_duration_seconds` (histogram): handler latency
//!
//! Recording is cheap and does nothing until [`init_metrics`] installs the
//! Prometheus exporter.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled request.
pub fn record_request(method: &str, endpoint: &str, status: u16, start: Instant) {
    let method = method.to_string();
    let endpoint = endpoint.to_string();
    let status = status.to_string();

    metrics::counter!(
        "catalog_requests_total",
        "method" => method.clone(),
        "endpoint" => endpoint.clone(),
        "status" => status.clone()
    )
    .increment(1);
    metrics::histogram!(
        "catalog_request_duration_seconds",
        "method" => method,
        "endpoint" => endpoint,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}
