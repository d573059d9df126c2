//! Metrics for upstream calls and page renders.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};

/// Upstream fetch latency metric name.
pub const METRIC_UPSTREAM_FETCH_LATENCY: &str = "upstream_fetch_latency_ms";
/// Upstream fetches counter metric name.
pub const METRIC_UPSTREAM_FETCHES: &str = "upstream_fetches_total";
/// Upstream fetch failures counter metric name.
pub const METRIC_UPSTREAM_FETCH_FAILURES: &str = "upstream_fetch_failures_total";
/// Page renders counter metric name.
pub const METRIC_PAGE_RENDERS: &str = "weather_page_renders_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_UPSTREAM_FETCH_LATENCY,
        "Upstream weather API request latency in milliseconds"
    );
    describe_counter!(
        METRIC_UPSTREAM_FETCHES,
        "Total upstream weather API requests"
    );
    describe_counter!(
        METRIC_UPSTREAM_FETCH_FAILURES,
        "Total failed upstream weather API requests"
    );
    describe_counter!(METRIC_PAGE_RENDERS, "Total weather page renders");
}

/// Record latency of one upstream fetch.
pub fn record_fetch_latency(start: Instant) {
    histogram!(METRIC_UPSTREAM_FETCH_LATENCY).record(start.elapsed().as_millis() as f64);
}

/// Count one upstream fetch.
pub fn inc_fetches() {
    counter!(METRIC_UPSTREAM_FETCHES).increment(1);
}

/// Count one failed upstream fetch.
pub fn inc_fetch_failures() {
    counter!(METRIC_UPSTREAM_FETCH_FAILURES).increment(1);
}

/// Count one page render.
pub fn inc_page_renders() {
    counter!(METRIC_PAGE_RENDERS).increment(1);
}
