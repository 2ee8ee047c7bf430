//! Cleaning Phase Metrics

use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};

/// Metrics collection for the Cleaning phase (trim and dedupe)
pub struct CleaningMetrics;

impl CleaningMetrics {
    pub fn record_duplicates_removed(count: usize) {
        ::metrics::counter!(phase_metric!(counter, "cleaning", "duplicates_removed"))
            .increment(count as u64);
    }

    pub fn record_column_trimmed() {
        ::metrics::counter!(phase_metric!(counter, "cleaning", "columns_trimmed")).increment(1);
    }

    /// A configured categorical column was not in the dataset
    pub fn record_missing_column() {
        ::metrics::counter!(phase_metric!(counter, "cleaning", "missing_columns")).increment(1);
    }
}

impl PhaseMetrics for CleaningMetrics {
    fn register_metrics() {
        use metrics::counter;

        let _ = counter!(phase_metric!(counter, "cleaning", "duplicates_removed"));
        let _ = counter!(phase_metric!(counter, "cleaning", "columns_trimmed"));
        let _ = counter!(phase_metric!(counter, "cleaning", "missing_columns"));
    }

    fn phase_name() -> &'static str {
        "cleaning"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: phase_metric!(counter, "cleaning", "duplicates_removed"),
                metric_type: MetricType::Counter,
                help: "Total number of exact duplicate rows removed",
            },
            MetricDoc {
                name: phase_metric!(counter, "cleaning", "columns_trimmed"),
                metric_type: MetricType::Counter,
                help: "Total number of categorical columns whitespace-trimmed",
            },
            MetricDoc {
                name: phase_metric!(counter, "cleaning", "missing_columns"),
                metric_type: MetricType::Counter,
                help: "Total number of requested trim columns absent from the dataset",
            },
        ]
    }
}
