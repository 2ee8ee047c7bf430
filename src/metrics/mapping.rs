//! Mapping Phase Metrics
//!
//! Sentiment label mapping: rows labelled and rows that fell back to the
//! default group.

use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};

/// Metrics collection for the Mapping phase
pub struct MappingMetrics;

impl MappingMetrics {
    pub fn record_labels_mapped(rows: usize, unmapped: usize) {
        ::metrics::counter!(phase_metric!(counter, "mapping", "rows_mapped"))
            .increment(rows as u64);
        ::metrics::counter!(phase_metric!(counter, "mapping", "unmapped_labels"))
            .increment(unmapped as u64);
    }
}

impl PhaseMetrics for MappingMetrics {
    fn register_metrics() {
        use metrics::counter;

        let _ = counter!(phase_metric!(counter, "mapping", "rows_mapped"));
        let _ = counter!(phase_metric!(counter, "mapping", "unmapped_labels"));
    }

    fn phase_name() -> &'static str {
        "mapping"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: phase_metric!(counter, "mapping", "rows_mapped"),
                metric_type: MetricType::Counter,
                help: "Total number of rows given a sentiment group",
            },
            MetricDoc {
                name: phase_metric!(counter, "mapping", "unmapped_labels"),
                metric_type: MetricType::Counter,
                help: "Rows whose label fell through to the default group",
            },
        ]
    }
}
