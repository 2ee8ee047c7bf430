use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::{TEXT_COLUMN, TIMESTAMP_COLUMN};
use crate::domain::{Dataset, Value};
use crate::metrics::ValidationMetrics;
use crate::pipeline::processing::cleaning::count_duplicates;
use crate::pipeline::processing::time_features::parse_timestamp;

/// Data quality diagnostics for one dataset.
///
/// `timestamp_valid` and `empty_posts` are only present when the dataset
/// has the corresponding column; absent entries are left out when the
/// report is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Missing-value count for every column
    pub missing_values: BTreeMap<String, usize>,
    /// Rows that repeat an earlier row
    pub duplicates: usize,
    /// Whether every present timestamp parses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_valid: Option<bool>,
    /// Posts whose text is present but zero-length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_posts: Option<usize>,
}

impl ValidationReport {
    /// Names of the diagnostics this report carries
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = vec!["missing_values", "duplicates"];
        if self.timestamp_valid.is_some() {
            keys.push("timestamp_valid");
        }
        if self.empty_posts.is_some() {
            keys.push("empty_posts");
        }
        keys
    }

    pub fn total_missing(&self) -> usize {
        self.missing_values.values().sum()
    }
}

/// Trait for implementing dataset quality assessment
pub trait QualityGate {
    /// Assess a dataset without modifying it
    fn assess(&self, dataset: &Dataset) -> ValidationReport;
}

/// Configuration for the default quality gate
#[derive(Debug, Clone)]
pub struct QualityGateConfig {
    /// Column checked for parseable timestamps
    pub timestamp_column: String,
    /// Column checked for empty posts
    pub text_column: String,
}

impl Default for QualityGateConfig {
    fn default() -> Self {
        Self {
            timestamp_column: TIMESTAMP_COLUMN.to_string(),
            text_column: TEXT_COLUMN.to_string(),
        }
    }
}

/// Default quality gate: missing values, duplicates, timestamps and empty text
#[derive(Debug, Clone, Default)]
pub struct DefaultQualityGate {
    pub config: QualityGateConfig,
}

impl DefaultQualityGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: QualityGateConfig) -> Self {
        Self { config }
    }

    fn missing_values(&self, dataset: &Dataset) -> BTreeMap<String, usize> {
        dataset
            .columns()
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let missing = dataset.rows().iter().filter(|r| r[idx].is_null()).count();
                (name.clone(), missing)
            })
            .collect()
    }

    /// `None` when the column is absent. A parse failure is reported as
    /// `Some(false)`, never as an error.
    fn timestamp_valid(&self, dataset: &Dataset) -> Option<bool> {
        let column = dataset.column(&self.config.timestamp_column)?;

        let first_bad = column
            .filter(|v| !v.is_null())
            .find(|v| parse_timestamp(&v.to_string()).is_none());

        match first_bad {
            Some(value) => {
                warn!(
                    "Error converting {}: unparseable value '{}'",
                    self.config.timestamp_column, value
                );
                Some(false)
            }
            None => {
                info!(
                    "{} column successfully parsed as datetime.",
                    self.config.timestamp_column
                );
                Some(true)
            }
        }
    }

    fn empty_posts(&self, dataset: &Dataset) -> Option<usize> {
        let column = dataset.column(&self.config.text_column)?;
        Some(
            column
                .filter(|v| matches!(v, Value::Text(s) if s.is_empty()))
                .count(),
        )
    }
}

impl QualityGate for DefaultQualityGate {
    fn assess(&self, dataset: &Dataset) -> ValidationReport {
        let missing_values = self.missing_values(dataset);
        for (column, missing) in &missing_values {
            info!("Missing values in '{}': {}", column, missing);
        }

        let duplicates = count_duplicates(dataset);
        info!("Found {} duplicate rows.", duplicates);

        let timestamp_valid = self.timestamp_valid(dataset);
        if timestamp_valid == Some(false) {
            ValidationMetrics::record_invalid_timestamps();
        }

        let empty_posts = self.empty_posts(dataset);
        if let Some(count) = empty_posts {
            ValidationMetrics::record_empty_posts(count);
            info!("Found {} posts with no text.", count);
        }

        let report = ValidationReport {
            missing_values,
            duplicates,
            timestamp_valid,
            empty_posts,
        };
        ValidationMetrics::record_run(report.duplicates, report.total_missing());
        report
    }
}

/// Run the default quality gate over a dataset
pub fn validate_data(dataset: &Dataset) -> ValidationReport {
    DefaultQualityGate::new().assess(dataset)
}
