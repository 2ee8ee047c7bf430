use std::collections::HashSet;

use tracing::{info, warn};

use crate::domain::{Dataset, Value};
use crate::metrics::CleaningMetrics;

/// Flag every row that repeats an earlier row across all columns.
///
/// The first occurrence is never flagged. Missing values compare equal to
/// each other.
pub fn duplicate_flags(dataset: &Dataset) -> Vec<bool> {
    let mut seen: HashSet<&[Value]> = HashSet::with_capacity(dataset.n_rows());
    dataset
        .rows()
        .iter()
        .map(|row| !seen.insert(row.as_slice()))
        .collect()
}

/// Number of rows that repeat an earlier row
pub fn count_duplicates(dataset: &Dataset) -> usize {
    duplicate_flags(dataset).into_iter().filter(|d| *d).count()
}

/// Remove exact duplicate rows, keeping the first occurrence of each in its
/// original position.
pub fn remove_duplicates(dataset: &Dataset) -> Dataset {
    let flags = duplicate_flags(dataset);
    let removed = flags.iter().filter(|d| **d).count();

    let mut out = dataset.clone();
    out.retain_rows(|idx, _| !flags[idx]);

    CleaningMetrics::record_duplicates_removed(removed);
    info!("Found and removed {} duplicate rows.", removed);
    info!("New shape: ({}, {})", out.n_rows(), out.n_columns());

    out
}

/// Strip leading and trailing whitespace from the named columns.
///
/// A column that is not in the dataset is skipped with a warning. Missing
/// values stay missing.
pub fn clean_categorical_columns(dataset: &Dataset, columns: &[String]) -> Dataset {
    let mut out = dataset.clone();

    for col in columns {
        let trimmed = out.map_column(col, |value| match value {
            Value::Text(s) => Value::Text(s.trim().to_string()),
            other => other.clone(),
        });

        match trimmed {
            Ok(()) => {
                CleaningMetrics::record_column_trimmed();
                info!(
                    "Cleaned '{}' column - unique values: {}",
                    col,
                    out.unique_count(col).unwrap_or(0)
                );
            }
            Err(_) => {
                CleaningMetrics::record_missing_column();
                warn!("Column '{}' not found in dataset", col);
            }
        }
    }

    out
}
