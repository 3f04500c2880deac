//! Metrics and observability utilities
//!
//! Records ranking and aggregation activity through the `metrics` facade.
//! Nothing is exported unless the host application installs a recorder.

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram, Unit};
use std::time::Instant;

/// Metrics prefix for all OrbitLit metrics
pub const METRICS_PREFIX: &str = "orbitlit";

/// Register all metric descriptions
pub fn register_metrics() {
    describe_counter!(
        format!("{}_search_queries_total", METRICS_PREFIX),
        Unit::Count,
        "Total number of ranking passes by operation"
    );

    describe_histogram!(
        format!("{}_ranking_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "Ranking pass latency in seconds"
    );

    describe_gauge!(
        format!("{}_search_results_count", METRICS_PREFIX),
        Unit::Count,
        "Number of results returned by the last ranking pass"
    );

    describe_counter!(
        format!("{}_related_not_found_total", METRICS_PREFIX),
        Unit::Count,
        "Related-publication lookups for unknown ids"
    );

    describe_gauge!(
        format!("{}_catalog_publications", METRICS_PREFIX),
        Unit::Count,
        "Publications seen by the last insight aggregation"
    );

    tracing::info!("Metrics registered");
}

/// Times one ranking pass and records it on completion
pub struct RankingTimer {
    start: Instant,
    operation: &'static str,
}

impl RankingTimer {
    /// Start timing an operation ("search" or "related")
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Record the pass and its result count
    pub fn finish(self, result_count: usize) {
        record_ranking(self.start.elapsed().as_secs_f64(), self.operation, result_count);
    }
}

/// Helper to record ranking metrics
pub fn record_ranking(duration_secs: f64, operation: &str, result_count: usize) {
    counter!(
        format!("{}_search_queries_total", METRICS_PREFIX),
        "operation" => operation.to_string()
    )
    .increment(1);

    histogram!(
        format!("{}_ranking_duration_seconds", METRICS_PREFIX),
        "operation" => operation.to_string()
    )
    .record(duration_secs);

    gauge!(
        format!("{}_search_results_count", METRICS_PREFIX),
        "operation" => operation.to_string()
    )
    .set(result_count as f64);
}

/// Helper to record a related lookup for an unknown id
pub fn record_not_found() {
    counter!(format!("{}_related_not_found_total", METRICS_PREFIX)).increment(1);
}

/// Helper to record an insight aggregation
pub fn record_aggregation(publication_count: usize) {
    gauge!(format!("{}_catalog_publications", METRICS_PREFIX)).set(publication_count as f64);
}
