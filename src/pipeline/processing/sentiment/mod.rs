pub mod tables;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use crate::constants::{DEFAULT_GROUP, SENTIMENT_CLEAN_COLUMN, SENTIMENT_GROUP_COLUMN};
use crate::domain::{Dataset, Value};
use crate::error::{PrepError, Result};
use crate::metrics::MappingMetrics;

/// Which lookup table a label is resolved against
///
/// The command line and the config file share one parser, so both accept
/// `detailed`/`polarity` in any case, or `6`/`3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingMode {
    /// Six emotion families: Joy, Sadness, Anger, Fear, Guilt, Neutral/Other
    #[default]
    Detailed,
    /// Three polarities: Positive, Negative, Neutral/Other
    Polarity,
}

impl MappingMode {
    pub fn table(self) -> &'static HashMap<&'static str, &'static str> {
        match self {
            MappingMode::Detailed => &tables::DETAILED_GROUPS,
            MappingMode::Polarity => &tables::POLARITY_GROUPS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MappingMode::Detailed => "detailed",
            MappingMode::Polarity => "polarity",
        }
    }
}

impl fmt::Display for MappingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MappingMode {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" | "6" => Ok(MappingMode::Detailed),
            "polarity" | "3" => Ok(MappingMode::Polarity),
            other => Err(PrepError::Config(format!(
                "unknown mapping mode '{}' (expected 'detailed' or 'polarity')",
                other
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for MappingMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Resolve one label to its group. The label is lowercased and matched
/// exactly; anything not in the table lands in the default group.
pub fn lookup_group(label: &str, mode: MappingMode) -> &'static str {
    find_group(&label.to_lowercase(), mode).unwrap_or(DEFAULT_GROUP)
}

fn find_group(lowered: &str, mode: MappingMode) -> Option<&'static str> {
    mode.table().get(lowered).copied()
}

/// Add `Sentiment_Clean` (the lowercased label) and `Sentiment_Group` (the
/// mapped group) to a copy of the dataset.
///
/// Missing labels stay missing in `Sentiment_Clean` and map to the default group.
pub fn map_sentiments(dataset: &Dataset, sentiment_col: &str, mode: MappingMode) -> Result<Dataset> {
    let labels = dataset
        .column(sentiment_col)
        .ok_or_else(|| PrepError::ColumnNotFound(sentiment_col.to_string()))?;

    let mut cleaned = Vec::with_capacity(dataset.n_rows());
    let mut groups = Vec::with_capacity(dataset.n_rows());
    let mut unmapped = 0usize;

    for label in labels {
        let group = match label {
            Value::Null => {
                cleaned.push(Value::Null);
                None
            }
            other => {
                let lowered = other.to_string().to_lowercase();
                let group = find_group(&lowered, mode);
                cleaned.push(Value::Text(lowered));
                group
            }
        };
        if group.is_none() {
            unmapped += 1;
        }
        groups.push(Value::text(group.unwrap_or(DEFAULT_GROUP)));
    }

    let mut out = dataset.clone();
    out.set_column(SENTIMENT_CLEAN_COLUMN, cleaned)?;
    out.set_column(SENTIMENT_GROUP_COLUMN, groups)?;

    MappingMetrics::record_labels_mapped(out.n_rows(), unmapped);
    info!(
        "Sentiment mapping ({}) complete: {} rows, {} fell back to '{}'",
        mode,
        out.n_rows(),
        unmapped,
        DEFAULT_GROUP
    );
    if let Some(counts) = out.value_counts(SENTIMENT_GROUP_COLUMN) {
        for (group, count) in counts {
            info!("  {}: {}", group, count);
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::tables::{DETAILED_ENTRIES, POLARITY_ENTRIES};

    fn labels(values: &[&str]) -> Dataset {
        Dataset::from_rows(
            vec!["Sentiment".to_string()],
            values.iter().map(|v| vec![Value::from(*v)]).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_every_table_key_maps_to_its_value() {
        for (mode, entries) in [
            (MappingMode::Detailed, DETAILED_ENTRIES),
            (MappingMode::Polarity, POLARITY_ENTRIES),
        ] {
            let keys: Vec<&str> = entries.iter().map(|(k, _)| *k).collect();
            let out = map_sentiments(&labels(&keys), "Sentiment", mode).unwrap();
            for (row, (_, group)) in entries.iter().enumerate() {
                assert_eq!(out.value(row, "Sentiment_Group"), Some(&Value::from(*group)));
            }
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        for label in ["POSITIVE", "Positive", "positive"] {
            assert_eq!(lookup_group(label, MappingMode::Detailed), "Joy");
            assert_eq!(lookup_group(label, MappingMode::Polarity), "Positive");
        }
    }

    #[test]
    fn test_unknown_labels_use_default_in_both_modes() {
        for mode in [MappingMode::Detailed, MappingMode::Polarity] {
            assert_eq!(lookup_group("Quixotic", mode), "Neutral/Other");
        }
        // present in one table only
        assert_eq!(lookup_group("Bittersweet", MappingMode::Detailed), "Sadness");
        assert_eq!(lookup_group("Bittersweet", MappingMode::Polarity), "Neutral/Other");
    }

    #[test]
    fn test_no_trimming_or_partial_matching() {
        assert_eq!(lookup_group(" joy ", MappingMode::Detailed), "Neutral/Other");
        assert_eq!(lookup_group("joyous", MappingMode::Detailed), "Neutral/Other");
    }

    #[test]
    fn test_adds_clean_and_group_columns() {
        let ds = labels(&["Happy", "Grief", "Mystery"]);
        let out = map_sentiments(&ds, "Sentiment", MappingMode::Detailed).unwrap();

        assert_eq!(out.n_columns(), 3);
        assert_eq!(out.value(0, "Sentiment_Clean"), Some(&Value::from("happy")));
        assert_eq!(out.value(0, "Sentiment_Group"), Some(&Value::from("Joy")));
        assert_eq!(out.value(1, "Sentiment_Group"), Some(&Value::from("Sadness")));
        assert_eq!(out.value(2, "Sentiment_Group"), Some(&Value::from("Neutral/Other")));
        // original label untouched
        assert_eq!(out.value(0, "Sentiment"), Some(&Value::from("Happy")));
    }

    #[test]
    fn test_missing_label_maps_to_default() {
        let ds = Dataset::from_rows(vec!["Sentiment".to_string()], vec![vec![Value::Null]])
            .unwrap();
        let out = map_sentiments(&ds, "Sentiment", MappingMode::Polarity).unwrap();
        assert_eq!(out.value(0, "Sentiment_Clean"), Some(&Value::Null));
        assert_eq!(out.value(0, "Sentiment_Group"), Some(&Value::from("Neutral/Other")));
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let ds = labels(&["joy"]);
        let err = map_sentiments(&ds, "Emotion", MappingMode::Detailed).unwrap_err();
        assert!(matches!(err, PrepError::ColumnNotFound(_)));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Polarity".parse::<MappingMode>().unwrap(), MappingMode::Polarity);
        assert_eq!("6".parse::<MappingMode>().unwrap(), MappingMode::Detailed);
        assert!("sideways".parse::<MappingMode>().is_err());
    }

    #[derive(Deserialize)]
    struct ModeHolder {
        mode: MappingMode,
    }

    #[test]
    fn test_config_accepts_same_spellings_as_cli() {
        for (raw, expected) in [
            ("polarity", MappingMode::Polarity),
            ("Polarity", MappingMode::Polarity),
            ("3", MappingMode::Polarity),
            ("DETAILED", MappingMode::Detailed),
            ("6", MappingMode::Detailed),
        ] {
            let holder: ModeHolder = toml::from_str(&format!("mode = \"{}\"", raw)).unwrap();
            assert_eq!(holder.mode, expected);
            assert_eq!(raw.parse::<MappingMode>().unwrap(), expected);
        }
        assert!(toml::from_str::<ModeHolder>("mode = \"fuzzy\"").is_err());
    }

    #[test]
    fn test_column_mapping_agrees_with_lookup_group() {
        let raw = ["Joy", "BITTERSWEET", "Quixotic", "angry", " joy"];
        for mode in [MappingMode::Detailed, MappingMode::Polarity] {
            let out = map_sentiments(&labels(&raw), "Sentiment", mode).unwrap();
            for (row, label) in raw.iter().enumerate() {
                assert_eq!(
                    out.value(row, "Sentiment_Group"),
                    Some(&Value::from(lookup_group(label, mode)))
                );
            }
        }
    }
}
