//! Metrics registry for coordinating phase-specific metrics
//!
//! Registers every phase and detects name conflicts early.

use crate::metrics::{MetricDoc, PhaseMetrics};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Register all metrics from all phases
pub fn register_all_metrics() {
    let all_metrics = collect_all_metrics();

    info!(
        "Registered {} total metrics across all phases",
        all_metrics.len()
    );

    for doc in all_metrics.values() {
        debug!(
            "  - {} ({:?}) [{}]: {}",
            doc.name,
            doc.metric_type,
            extract_phase_from_metric_name(doc.name),
            doc.help
        );
    }
}

fn collect_all_metrics() -> HashMap<String, MetricDoc> {
    let mut all_metrics = HashMap::new();

    register_phase_metrics::<super::ingestion::IngestionMetrics>(&mut all_metrics);
    register_phase_metrics::<super::cleaning::CleaningMetrics>(&mut all_metrics);
    register_phase_metrics::<super::validation::ValidationMetrics>(&mut all_metrics);
    register_phase_metrics::<super::mapping::MappingMetrics>(&mut all_metrics);
    register_phase_metrics::<super::time_features::TimeFeatureMetrics>(&mut all_metrics);

    all_metrics
}

/// Register metrics for a specific phase and detect conflicts
fn register_phase_metrics<T: PhaseMetrics>(all_metrics: &mut HashMap<String, MetricDoc>) {
    T::register_metrics();
    let phase_docs = T::metrics_documentation();
    let phase_name = T::phase_name();

    debug!(
        "Registering {} metrics for phase '{}'",
        phase_docs.len(),
        phase_name
    );

    for doc in phase_docs {
        if all_metrics.contains_key(doc.name) {
            warn!(
                "Metric name conflict detected: '{}' is defined twice (latest in phase '{}')",
                doc.name, phase_name
            );
        } else {
            all_metrics.insert(doc.name.to_string(), doc);
        }
    }
}

const PHASES: [&str; 5] = ["ingestion", "cleaning", "validation", "mapping", "time_features"];

/// Extract phase name from metric name (e.g., "prep_cleaning_duplicates_removed_total" -> "cleaning")
fn extract_phase_from_metric_name(metric_name: &str) -> &str {
    if let Some(stripped) = metric_name.strip_prefix("prep_") {
        for phase in PHASES {
            if stripped
                .strip_prefix(phase)
                .is_some_and(|rest| rest.starts_with('_'))
            {
                return phase;
            }
        }
    }
    "unknown"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_phase_from_metric_name() {
        assert_eq!(
            extract_phase_from_metric_name("prep_cleaning_duplicates_removed_total"),
            "cleaning"
        );
        assert_eq!(
            extract_phase_from_metric_name("prep_ingestion_load_duration_seconds"),
            "ingestion"
        );
        assert_eq!(
            extract_phase_from_metric_name("invalid_metric_name"),
            "unknown"
        );
    }

    #[test]
    fn test_no_duplicate_metric_names_across_phases() {
        let all = collect_all_metrics();
        // 5 ingestion + 3 cleaning + 5 validation + 2 mapping + 1 time_features
        assert_eq!(all.len(), 16);
        assert!(all.keys().all(|name| name.starts_with("prep_")));
    }

    #[test]
    fn test_time_features_have_their_own_phase() {
        let all = collect_all_metrics();
        let name = "prep_time_features_rows_featurized_total";
        assert!(all.contains_key(name));
        assert!(!all.contains_key("prep_mapping_rows_featurized_total"));
        assert_eq!(extract_phase_from_metric_name(name), "time_features");
    }
}
