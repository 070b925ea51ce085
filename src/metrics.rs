//! Prometheus metrics for store operations and HTTP latency.
//!
//! This module provides:
//! - Store operation counters, labelled by operation
//! - A not-found counter and a stored-recipes gauge
//! - HTTP request latency histograms, labelled by endpoint
//! - The Prometheus recorder served at `/metrics`

use std::time::Instant;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::error::AppError;

// === Metric Name Constants ===

/// Store operations counter metric name.
pub const METRIC_STORE_OPS: &str = "recipe_store_ops_total";
/// Not-found lookups counter metric name.
pub const METRIC_NOT_FOUND: &str = "recipes_not_found_total";
/// Stored recipes gauge metric name.
pub const METRIC_RECIPES_STORED: &str = "recipes_stored";
/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";

/// Register metric descriptions with the installed recorder.
pub fn init_metrics() {
    describe_counter!(METRIC_STORE_OPS, "Total number of recipe store operations");
    describe_counter!(
        METRIC_NOT_FOUND,
        "Total number of lookups for recipes that do not exist"
    );
    describe_gauge!(METRIC_RECIPES_STORED, "Number of recipes currently stored");
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests handled");

    debug!("Metrics initialized");
}

/// Install the global Prometheus recorder and describe all metrics.
pub fn install_recorder() -> Result<PrometheusHandle, AppError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| AppError::Metrics(e.to_string()))?;
    init_metrics();
    Ok(handle)
}

/// Increment the store operation counter.
pub fn inc_store_op(op: &'static str) {
    counter!(METRIC_STORE_OPS, "op" => op).increment(1);
}

/// Increment the not-found counter.
pub fn inc_not_found() {
    counter!(METRIC_NOT_FOUND).increment(1);
}

/// Record the current number of stored recipes.
pub fn set_recipes_stored(count: usize) {
    gauge!(METRIC_RECIPES_STORED).set(count as f64);
}

/// Record HTTP request latency.
pub fn record_http_latency(start: Instant, endpoint: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint.to_string()).record(latency_ms);
    counter!(METRIC_HTTP_REQUESTS, "endpoint" => endpoint.to_string()).increment(1);
}

/// RAII guard for timing a request.
/// Records latency for its endpoint when dropped.
pub struct LatencyTimer {
    start: Instant,
    endpoint: &'static str,
}

impl LatencyTimer {
    /// Start timing a request to `endpoint`.
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            start: Instant::now(),
            endpoint,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        record_http_latency(self.start, self.endpoint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn latency_timer_measures_time() {
        let timer = LatencyTimer::new("test_endpoint");
        sleep(Duration::from_millis(10));
        let elapsed = timer.elapsed_ms();
        assert!(elapsed >= 9.0);
    }

    #[test]
    fn recording_without_a_recorder_is_a_no_op() {
        inc_store_op("get");
        inc_not_found();
        set_recipes_stored(3);
    }
}
