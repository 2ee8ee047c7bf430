/// Column name constants shared by the loader, the cleaning stages and the CLI.
/// These match the header of the social-media sentiment export.

pub const PLATFORM_COLUMN: &str = "Platform";
pub const SENTIMENT_COLUMN: &str = "Sentiment";
pub const COUNTRY_COLUMN: &str = "Country";
pub const TEXT_COLUMN: &str = "Text";
pub const TIMESTAMP_COLUMN: &str = "Timestamp";

// Columns appended by the label mapper
pub const SENTIMENT_CLEAN_COLUMN: &str = "Sentiment_Clean";
pub const SENTIMENT_GROUP_COLUMN: &str = "Sentiment_Group";

// Columns appended by the time-feature extractor, in insertion order
pub const YEAR_COLUMN: &str = "year";
pub const MONTH_COLUMN: &str = "month";
pub const DAY_COLUMN: &str = "day";
pub const HOUR_COLUMN: &str = "hour";
pub const DAY_OF_WEEK_COLUMN: &str = "day_of_week";
pub const IS_WEEKEND_COLUMN: &str = "is_weekend";

/// Substring marking an index column left behind by an earlier export
pub const HOUSEKEEPING_MARKER: &str = "Unnamed";

/// Catch-all group for labels missing from the selected lookup table
pub const DEFAULT_GROUP: &str = "Neutral/Other";

/// Canonical text form written back into the timestamp column
pub const CANONICAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Number of rows shown by the dataset summary
pub const INFO_PREVIEW_ROWS: usize = 5;

/// Get the categorical columns trimmed when the caller names none
pub fn default_categorical_columns() -> Vec<String> {
    vec![
        PLATFORM_COLUMN.to_string(),
        SENTIMENT_COLUMN.to_string(),
        COUNTRY_COLUMN.to_string(),
    ]
}

/// Field values read as missing, on top of the empty field
pub const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];
