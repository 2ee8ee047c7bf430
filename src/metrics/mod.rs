//! Centralized metrics for the preparation pipeline
//!
//! Each pipeline phase defines its own metrics in a dedicated submodule, so
//! every name has one owner. Recording goes through the `metrics` facade and
//! is a no-op until a recorder is installed with [`init_metrics`].

pub mod cleaning;
pub mod ingestion;
pub mod mapping;
pub mod registry;
pub mod time_features;
pub mod validation;

pub use cleaning::CleaningMetrics;
pub use ingestion::IngestionMetrics;
pub use mapping::MappingMetrics;
pub use time_features::TimeFeatureMetrics;
pub use validation::ValidationMetrics;

use std::sync::{Once, OnceLock};
use tracing::{info, warn};

static INIT: Once = Once::new();
static HANDLE: OnceLock<metrics_exporter_prometheus::PrometheusHandle> = OnceLock::new();

/// Install an in-process Prometheus recorder and register every phase.
///
/// Idempotent. No HTTP listener is started; callers read the snapshot
/// through [`render`].
pub fn init_metrics() {
    INIT.call_once(|| {
        let builder = metrics_exporter_prometheus::PrometheusBuilder::new();

        match builder.install_recorder() {
            Ok(handle) => {
                if HANDLE.set(handle).is_err() {
                    warn!("metrics handle was already set");
                }
                registry::register_all_metrics();
                info!("Prometheus recorder installed");
            }
            Err(e) => {
                warn!("Failed to install Prometheus recorder: {}", e);
            }
        }
    });
}

/// Render the current metrics snapshot in Prometheus text format
pub fn render() -> Option<String> {
    HANDLE.get().map(|h| h.render())
}

/// Trait for phase-specific metrics collections
///
/// Each pipeline phase implements this trait to provide:
/// - Metric registration at startup
/// - Consistent naming conventions
/// - Documentation of what each metric measures
pub trait PhaseMetrics {
    /// Register all metrics for this phase
    fn register_metrics();

    /// Get the phase name for prefixing metrics
    fn phase_name() -> &'static str;

    /// Get documentation for all metrics in this phase
    fn metrics_documentation() -> Vec<MetricDoc>;
}

/// Documentation for a single metric
#[derive(Debug, Clone)]
pub struct MetricDoc {
    pub name: &'static str,
    pub metric_type: MetricType,
    pub help: &'static str,
}

#[derive(Debug, Clone)]
pub enum MetricType {
    Counter,
    Histogram,
}

/// Macro to create phase-specific metric names with consistent naming
///
/// prep_{phase}_{metric_name}_{type}
macro_rules! phase_metric {
    (counter, $phase:literal, $name:literal) => {
        concat!("prep_", $phase, "_", $name, "_total")
    };
    (histogram, $phase:literal, $name:literal) => {
        concat!("prep_", $phase, "_", $name)
    };
}

pub(crate) use phase_metric;
