//! Prometheus metrics for the API server.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> PrometheusHandle {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "shotdeck_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "shotdeck_http_request_duration_seconds";

    // Pipeline metrics
    pub const SCRIPTS_PARSED_TOTAL: &str = "shotdeck_scripts_parsed_total";
    pub const SHOTLISTS_GENERATED_TOTAL: &str = "shotdeck_shotlists_generated_total";
    pub const DECKS_BUILT_TOTAL: &str = "shotdeck_decks_built_total";
    pub const SKETCHES_RENDERED_TOTAL: &str = "shotdeck_sketches_rendered_total";

    // WebSocket metrics
    pub const WS_CONNECTIONS_TOTAL: &str = "shotdeck_ws_connections_total";

    // Rate limiting metrics
    pub const RATE_LIMIT_HITS_TOTAL: &str = "shotdeck_rate_limit_hits_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a parsed script.
pub fn record_script_parsed() {
    counter!(names::SCRIPTS_PARSED_TOTAL).increment(1);
}

/// Record a generated shot list with the mode that produced it.
pub fn record_shotlist_generated(mode: &str) {
    let labels = [("mode", mode.to_string())];
    counter!(names::SHOTLISTS_GENERATED_TOTAL, &labels).increment(1);
}

/// Record a built deck.
pub fn record_deck_built() {
    counter!(names::DECKS_BUILT_TOTAL).increment(1);
}

/// Record a sketch render outcome.
pub fn record_sketch_rendered(success: bool) {
    let labels = [("outcome", if success { "ok" } else { "failed" }.to_string())];
    counter!(names::SKETCHES_RENDERED_TOTAL, &labels).increment(1);
}

/// Record a WebSocket connection.
pub fn record_ws_connection(endpoint: &str) {
    let labels = [("endpoint", endpoint.to_string())];
    counter!(names::WS_CONNECTIONS_TOTAL, &labels).increment(1);
}

/// Record a rate limit rejection.
pub fn record_rate_limit_hit() {
    counter!(names::RATE_LIMIT_HITS_TOTAL).increment(1);
}
