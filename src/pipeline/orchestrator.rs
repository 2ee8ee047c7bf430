use tracing::{info, info_span};
use uuid::Uuid;

use crate::constants::{
    default_categorical_columns, SENTIMENT_COLUMN, TEXT_COLUMN, TIMESTAMP_COLUMN,
};
use crate::domain::Dataset;
use crate::error::Result;
use crate::pipeline::processing::cleaning::{clean_categorical_columns, remove_duplicates};
use crate::pipeline::processing::quality_gate::{
    DefaultQualityGate, QualityGate, QualityGateConfig,
};
use crate::pipeline::processing::sentiment::{map_sentiments, MappingMode};
use crate::pipeline::processing::time_features::add_time_features;

/// Step toggles and column names for [`clean_data`]
#[derive(Debug, Clone, PartialEq)]
pub struct CleanOptions {
    pub clean_categorical: bool,
    pub remove_duplicates: bool,
    pub validate: bool,
    pub map_sentiment: bool,
    pub add_time: bool,
    pub categorical_columns: Vec<String>,
    pub sentiment_column: String,
    pub timestamp_column: String,
    pub text_column: String,
    pub mapping_mode: MappingMode,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            clean_categorical: true,
            remove_duplicates: true,
            validate: true,
            map_sentiment: true,
            add_time: false,
            categorical_columns: default_categorical_columns(),
            sentiment_column: SENTIMENT_COLUMN.to_string(),
            timestamp_column: TIMESTAMP_COLUMN.to_string(),
            text_column: TEXT_COLUMN.to_string(),
            mapping_mode: MappingMode::default(),
        }
    }
}

/// Run the cleaning pipeline over a copy of `dataset`.
///
/// Stages run in a fixed order, each behind its toggle: categorical trim,
/// duplicate removal, validation, sentiment mapping, time features. The
/// validation report is logged only. Mapping and time features are skipped
/// when their source column is absent.
pub fn clean_data(dataset: &Dataset, options: &CleanOptions) -> Result<Dataset> {
    let run_id = Uuid::new_v4();
    let span = info_span!("clean_data", run_id = %run_id);
    let _enter = span.enter();

    info!("🚀 Starting data cleaning pipeline...");
    let mut current = dataset.clone();

    if options.clean_categorical {
        current = clean_categorical_columns(&current, &options.categorical_columns);
    }

    if options.remove_duplicates {
        current = remove_duplicates(&current);
    }

    if options.validate {
        let gate = DefaultQualityGate::with_config(QualityGateConfig {
            timestamp_column: options.timestamp_column.clone(),
            text_column: options.text_column.clone(),
        });
        let report = gate.assess(&current);
        info!(
            "Validation: {} missing cells, {} duplicates, timestamp_valid={:?}, empty_posts={:?}",
            report.total_missing(),
            report.duplicates,
            report.timestamp_valid,
            report.empty_posts
        );
    }

    if options.map_sentiment {
        if current.has_column(&options.sentiment_column) {
            current = map_sentiments(&current, &options.sentiment_column, options.mapping_mode)?;
        } else {
            info!(
                "Skipping sentiment mapping: no '{}' column",
                options.sentiment_column
            );
        }
    }

    if options.add_time {
        if current.has_column(&options.timestamp_column) {
            current = add_time_features(&current, &options.timestamp_column)?;
        } else {
            info!(
                "Skipping time features: no '{}' column",
                options.timestamp_column
            );
        }
    }

    let (rows, cols) = current.shape();
    info!("✅ Cleaning complete. Final shape: ({}, {})", rows, cols);

    Ok(current)
}
