use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{
    CANONICAL_TIMESTAMP_FORMAT, DAY_COLUMN, DAY_OF_WEEK_COLUMN, HOUR_COLUMN, IS_WEEKEND_COLUMN,
    MONTH_COLUMN, YEAR_COLUMN,
};
use crate::domain::{Dataset, Value};
use crate::error::{PrepError, Result};
use crate::metrics::TimeFeatureMetrics;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a timestamp the way it was written, without timezone conversion.
///
/// Values with an explicit offset keep their wall-clock time; the offset
/// itself is discarded. Date-only values resolve to midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Calendar features derived from one timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFeatures {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    /// 0 = Monday .. 6 = Sunday
    pub day_of_week: u32,
    pub is_weekend: bool,
}

impl TimeFeatures {
    pub fn from_datetime(dt: &NaiveDateTime) -> Self {
        let day_of_week = dt.weekday().num_days_from_monday();
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            day_of_week,
            is_weekend: day_of_week == 5 || day_of_week == 6,
        }
    }

    fn to_values(self) -> [Value; 6] {
        [
            Value::Int(self.year as i64),
            Value::Int(self.month as i64),
            Value::Int(self.day as i64),
            Value::Int(self.hour as i64),
            Value::Int(self.day_of_week as i64),
            Value::Int(self.is_weekend as i64),
        ]
    }
}

/// Derive year, month, day, hour, day_of_week and is_weekend columns from
/// `timestamp_col`, rewriting that column in canonical form.
///
/// Any present value that does not parse fails the whole call with
/// [`PrepError::InvalidTimestamp`]. Missing values yield missing features.
pub fn add_time_features(dataset: &Dataset, timestamp_col: &str) -> Result<Dataset> {
    let column: Vec<&Value> = dataset
        .column(timestamp_col)
        .ok_or_else(|| PrepError::ColumnNotFound(timestamp_col.to_string()))?
        .collect();

    let mut canonical = Vec::with_capacity(column.len());
    let mut features: [Vec<Value>; 6] = Default::default();

    for (row, value) in column.into_iter().enumerate() {
        let parsed = match value {
            Value::Null => None,
            other => {
                let raw = other.to_string();
                let dt = parse_timestamp(&raw).ok_or_else(|| PrepError::InvalidTimestamp {
                    column: timestamp_col.to_string(),
                    row,
                    value: raw.clone(),
                })?;
                Some(dt)
            }
        };

        match parsed {
            Some(dt) => {
                canonical.push(Value::Text(
                    dt.format(CANONICAL_TIMESTAMP_FORMAT).to_string(),
                ));
                for (out, v) in features
                    .iter_mut()
                    .zip(TimeFeatures::from_datetime(&dt).to_values())
                {
                    out.push(v);
                }
            }
            None => {
                canonical.push(Value::Null);
                for out in features.iter_mut() {
                    out.push(Value::Null);
                }
            }
        }
    }

    let mut out = dataset.clone();
    out.set_column(timestamp_col, canonical)?;
    let names = [
        YEAR_COLUMN,
        MONTH_COLUMN,
        DAY_COLUMN,
        HOUR_COLUMN,
        DAY_OF_WEEK_COLUMN,
        IS_WEEKEND_COLUMN,
    ];
    for (name, values) in names.into_iter().zip(features) {
        out.set_column(name, values)?;
    }

    TimeFeatureMetrics::record_rows_featurized(out.n_rows());
    info!("Time features added: {}", names.join(", "));

    Ok(out)
}
