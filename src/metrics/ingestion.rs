//! Ingestion Phase Metrics
//!
//! Metrics for CSV loading: files read, rows produced, housekeeping columns
//! dropped and load failures.

use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};

/// Metrics collection for the Ingestion phase
pub struct IngestionMetrics;

impl IngestionMetrics {
    /// Record a successful load
    pub fn record_load_success(rows: usize, duration_secs: f64) {
        ::metrics::counter!(phase_metric!(counter, "ingestion", "files_loaded")).increment(1);
        ::metrics::counter!(phase_metric!(counter, "ingestion", "rows_loaded"))
            .increment(rows as u64);
        ::metrics::histogram!(phase_metric!(histogram, "ingestion", "load_duration_seconds"))
            .record(duration_secs);
    }

    /// Record a failed load, labelled by what went wrong
    pub fn record_load_error(error_type: &str) {
        ::metrics::counter!(
            phase_metric!(counter, "ingestion", "load_errors"),
            "error_type" => error_type.to_string()
        )
        .increment(1);
    }

    pub fn record_unnamed_columns_dropped(count: usize) {
        ::metrics::counter!(phase_metric!(counter, "ingestion", "unnamed_columns_dropped"))
            .increment(count as u64);
    }
}

impl PhaseMetrics for IngestionMetrics {
    fn register_metrics() {
        use metrics::{counter, histogram};

        let _ = counter!(phase_metric!(counter, "ingestion", "files_loaded"));
        let _ = counter!(phase_metric!(counter, "ingestion", "rows_loaded"));
        let _ = counter!(phase_metric!(counter, "ingestion", "load_errors"));
        let _ = counter!(phase_metric!(counter, "ingestion", "unnamed_columns_dropped"));
        let _ = histogram!(phase_metric!(histogram, "ingestion", "load_duration_seconds"));
    }

    fn phase_name() -> &'static str {
        "ingestion"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: phase_metric!(counter, "ingestion", "files_loaded"),
                metric_type: MetricType::Counter,
                help: "Total number of CSV files loaded",
            },
            MetricDoc {
                name: phase_metric!(counter, "ingestion", "rows_loaded"),
                metric_type: MetricType::Counter,
                help: "Total number of rows read from CSV files",
            },
            MetricDoc {
                name: phase_metric!(counter, "ingestion", "load_errors"),
                metric_type: MetricType::Counter,
                help: "Total number of failed loads by error_type",
            },
            MetricDoc {
                name: phase_metric!(counter, "ingestion", "unnamed_columns_dropped"),
                metric_type: MetricType::Counter,
                help: "Total number of housekeeping index columns dropped on load",
            },
            MetricDoc {
                name: phase_metric!(histogram, "ingestion", "load_duration_seconds"),
                metric_type: MetricType::Histogram,
                help: "Duration of CSV loads in seconds",
            },
        ]
    }
}
