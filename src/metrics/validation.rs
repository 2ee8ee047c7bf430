//! Validation Phase Metrics
//!
//! Counters fed by the quality gate. They mirror the report fields so a run
//! that only logs its report still leaves a trace in the metrics snapshot.

use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};

/// Metrics collection for the Validation phase
pub struct ValidationMetrics;

impl ValidationMetrics {
    pub fn record_run(duplicates: usize, missing_cells: usize) {
        ::metrics::counter!(phase_metric!(counter, "validation", "runs")).increment(1);
        ::metrics::counter!(phase_metric!(counter, "validation", "duplicates_found"))
            .increment(duplicates as u64);
        ::metrics::counter!(phase_metric!(counter, "validation", "missing_cells"))
            .increment(missing_cells as u64);
    }

    pub fn record_invalid_timestamps() {
        ::metrics::counter!(phase_metric!(counter, "validation", "invalid_timestamps"))
            .increment(1);
    }

    pub fn record_empty_posts(count: usize) {
        ::metrics::counter!(phase_metric!(counter, "validation", "empty_posts"))
            .increment(count as u64);
    }
}

impl PhaseMetrics for ValidationMetrics {
    fn register_metrics() {
        use metrics::counter;

        let _ = counter!(phase_metric!(counter, "validation", "runs"));
        let _ = counter!(phase_metric!(counter, "validation", "duplicates_found"));
        let _ = counter!(phase_metric!(counter, "validation", "missing_cells"));
        let _ = counter!(phase_metric!(counter, "validation", "invalid_timestamps"));
        let _ = counter!(phase_metric!(counter, "validation", "empty_posts"));
    }

    fn phase_name() -> &'static str {
        "validation"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: phase_metric!(counter, "validation", "runs"),
                metric_type: MetricType::Counter,
                help: "Total number of validation passes",
            },
            MetricDoc {
                name: phase_metric!(counter, "validation", "duplicates_found"),
                metric_type: MetricType::Counter,
                help: "Duplicate rows observed by validation (not removed)",
            },
            MetricDoc {
                name: phase_metric!(counter, "validation", "missing_cells"),
                metric_type: MetricType::Counter,
                help: "Missing cells observed across all columns",
            },
            MetricDoc {
                name: phase_metric!(counter, "validation", "invalid_timestamps"),
                metric_type: MetricType::Counter,
                help: "Validation passes whose timestamp column failed to parse",
            },
            MetricDoc {
                name: phase_metric!(counter, "validation", "empty_posts"),
                metric_type: MetricType::Counter,
                help: "Posts with zero-length text",
            },
        ]
    }
}
