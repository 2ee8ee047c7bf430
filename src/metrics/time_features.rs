//! Time Features Phase Metrics

use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};

/// Metrics collection for calendar feature extraction
pub struct TimeFeatureMetrics;

impl TimeFeatureMetrics {
    pub fn record_rows_featurized(rows: usize) {
        ::metrics::counter!(phase_metric!(counter, "time_features", "rows_featurized"))
            .increment(rows as u64);
    }
}

impl PhaseMetrics for TimeFeatureMetrics {
    fn register_metrics() {
        let _ = metrics::counter!(phase_metric!(counter, "time_features", "rows_featurized"));
    }

    fn phase_name() -> &'static str {
        "time_features"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![MetricDoc {
            name: phase_metric!(counter, "time_features", "rows_featurized"),
            metric_type: MetricType::Counter,
            help: "Total number of rows given calendar features",
        }]
    }
}
