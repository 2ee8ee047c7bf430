use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{
    default_categorical_columns, SENTIMENT_COLUMN, TEXT_COLUMN, TIMESTAMP_COLUMN,
};
use crate::error::{PrepError, Result};
use crate::pipeline::processing::sentiment::MappingMode;
use crate::pipeline::CleanOptions;

/// Pipeline settings read from a TOML file. Every section and key is optional.
///
/// ```toml
/// [loader]
/// drop_unnamed = true
///
/// [steps]
/// add_time = true
///
/// [columns]
/// categorical = ["Platform", "Sentiment", "Country", "Hashtags"]
///
/// [mapping]
/// mode = "polarity"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub loader: LoaderConfig,
    pub steps: StepsConfig,
    pub columns: ColumnsConfig,
    pub mapping: MappingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    pub drop_unnamed: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { drop_unnamed: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StepsConfig {
    pub clean_categorical: bool,
    pub remove_duplicates: bool,
    pub validate: bool,
    pub map_sentiment: bool,
    pub add_time: bool,
}

impl Default for StepsConfig {
    fn default() -> Self {
        Self {
            clean_categorical: true,
            remove_duplicates: true,
            validate: true,
            map_sentiment: true,
            add_time: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnsConfig {
    pub categorical: Vec<String>,
    pub sentiment: String,
    pub timestamp: String,
    pub text: String,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            categorical: default_categorical_columns(),
            sentiment: SENTIMENT_COLUMN.to_string(),
            timestamp: TIMESTAMP_COLUMN.to_string(),
            text: TEXT_COLUMN.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MappingConfig {
    pub mode: MappingMode,
}

impl PipelineConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PipelineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PrepError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<()> {
        let named = [
            ("columns.sentiment", &self.columns.sentiment),
            ("columns.timestamp", &self.columns.timestamp),
            ("columns.text", &self.columns.text),
        ];
        for (key, value) in named {
            if value.trim().is_empty() {
                return Err(PrepError::Config(format!("{} must not be empty", key)));
            }
        }
        Ok(())
    }

    /// Orchestrator options for this configuration
    pub fn clean_options(&self) -> CleanOptions {
        CleanOptions {
            clean_categorical: self.steps.clean_categorical,
            remove_duplicates: self.steps.remove_duplicates,
            validate: self.steps.validate,
            map_sentiment: self.steps.map_sentiment,
            add_time: self.steps.add_time,
            categorical_columns: self.columns.categorical.clone(),
            sentiment_column: self.columns.sentiment.clone(),
            timestamp_column: self.columns.timestamp.clone(),
            text_column: self.columns.text.clone(),
            mapping_mode: self.mapping.mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_matches_defaults() {
        let config = PipelineConfig::from_toml_str("").unwrap();
        assert_eq!(config, PipelineConfig::default());
        assert!(config.loader.drop_unnamed);
        assert_eq!(config.clean_options(), CleanOptions::default());
    }

    #[test]
    fn test_partial_overrides() {
        let config = PipelineConfig::from_toml_str(
            r#"
            [steps]
            add_time = true
            remove_duplicates = false

            [columns]
            categorical = ["Platform", "Hashtags"]

            [mapping]
            mode = "polarity"
            "#,
        )
        .unwrap();

        let options = config.clean_options();
        assert!(options.add_time);
        assert!(!options.remove_duplicates);
        assert!(options.validate);
        assert_eq!(options.categorical_columns, vec!["Platform", "Hashtags"]);
        assert_eq!(options.sentiment_column, "Sentiment");
        assert_eq!(options.mapping_mode, MappingMode::Polarity);
    }

    #[test]
    fn test_unknown_keys_and_modes_are_rejected() {
        assert!(matches!(
            PipelineConfig::from_toml_str("[steps]\nadd_tiem = true\n"),
            Err(PrepError::Toml(_))
        ));
        assert!(PipelineConfig::from_toml_str("[mapping]\nmode = \"fuzzy\"\n").is_err());
    }

    #[test]
    fn test_blank_column_name_is_rejected() {
        let err = PipelineConfig::from_toml_str("[columns]\nsentiment = \" \"\n").unwrap_err();
        assert!(matches!(err, PrepError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = PipelineConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, PrepError::Config(_)));
    }
}
