//! Metrics collection and exposition.
//!
//! # Metrics
//! - `catalog_store_requests_total` (counter): store calls by table, op,
//!   outcome (`ok`, `rejected`, `transport_error`)
//! - `catalog_store_request_duration_seconds` (histogram): store call
//!   latency by table and op
//!
//! # Design Decisions
//! - Low-overhead updates; recording without an installed exporter is a
//!   no-op, so the library never forces an endpoint on its host
//! - Exposition is opt-in via the observability config

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Record the outcome of one store call.
pub fn record_store_call(table: &str, op: &'static str, outcome: &'static str, started: Instant) {
    metrics::counter!(
        "catalog_store_requests_total",
        "table" => table.to_string(),
        "op" => op,
        "outcome" => outcome,
    )
    .increment(1);

    metrics::histogram!(
        "catalog_store_request_duration_seconds",
        "table" => table.to_string(),
        "op" => op,
    )
    .record(started.elapsed().as_secs_f64());
}

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}
