//! Prometheus metrics for the dog records service.
//!
//! This module provides:
//! - HTTP request latency per endpoint
//! - Record creation/deletion counters
//! - A counter for deletes targeting a missing id

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// Dogs created counter metric name.
pub const METRIC_DOGS_CREATED: &str = "dogs_created_total";
/// Dogs deleted counter metric name.
pub const METRIC_DOGS_DELETED: &str = "dogs_deleted_total";
/// Missing-id deletes counter metric name.
pub const METRIC_DELETE_NOT_FOUND: &str = "delete_not_found_total";

/// Install the Prometheus recorder and register metric descriptions.
/// Call this once at startup; the returned handle renders the /metrics body.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(METRIC_DOGS_CREATED, "Total number of dog records created");
    describe_counter!(METRIC_DOGS_DELETED, "Total number of dog records deleted");
    describe_counter!(
        METRIC_DELETE_NOT_FOUND,
        "Total number of deletes targeting a missing id"
    );

    debug!("Metrics initialized");
    Ok(handle)
}

/// Record HTTP request latency.
pub fn record_http_latency(start: Instant, endpoint: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint.to_string()).record(latency_ms);
}

/// Increment dogs created counter.
pub fn inc_dogs_created() {
    counter!(METRIC_DOGS_CREATED).increment(1);
}

/// Increment dogs deleted counter.
pub fn inc_dogs_deleted() {
    counter!(METRIC_DOGS_DELETED).increment(1);
}

/// Increment missing-id delete counter.
pub fn inc_delete_not_found() {
    counter!(METRIC_DELETE_NOT_FOUND).increment(1);
}

/// Middleware recording per-endpoint request latency.
pub async fn track_http_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = request.uri().path().to_string();

    let response = next.run(request).await;

    record_http_latency(start, &endpoint);
    response
}
