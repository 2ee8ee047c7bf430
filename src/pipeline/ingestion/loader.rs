use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::constants::{HOUSEKEEPING_MARKER, MISSING_MARKERS};
use crate::domain::{Dataset, DatasetInfo, Value};
use crate::error::{PrepError, Result};
use crate::metrics::IngestionMetrics;

/// Load a sentiment dataset from a CSV file with a header row.
///
/// Every field is kept as text; empty fields and the usual missing markers
/// (`NA`, `NaN`, `null`, ...) become [`Value::Null`]. With `drop_unnamed`,
/// index columns left by an earlier export (header containing `Unnamed`,
/// or an empty header) are removed.
///
/// Fails with [`PrepError::FileNotFound`] when the path does not resolve and
/// [`PrepError::EmptyData`] when the file holds no header at all.
pub fn load_data<P: AsRef<Path>>(path: P, drop_unnamed: bool) -> Result<Dataset> {
    let path = path.as_ref();
    if !path.is_file() {
        let err = PrepError::FileNotFound {
            path: path.to_path_buf(),
        };
        IngestionMetrics::record_load_error(load_error_kind(&err));
        return Err(err);
    }

    let file = File::open(path).map_err(|e| {
        let err = PrepError::from(e);
        IngestionMetrics::record_load_error(load_error_kind(&err));
        err
    })?;

    read_dataset(file, path, drop_unnamed)
}

/// Same as [`load_data`] for CSV content that is not on disk
pub fn load_data_from_reader<R: Read>(reader: R, drop_unnamed: bool) -> Result<Dataset> {
    read_dataset(reader, Path::new("<reader>"), drop_unnamed)
}

fn read_dataset<R: Read>(reader: R, source: &Path, drop_unnamed: bool) -> Result<Dataset> {
    let started = Instant::now();

    let result = parse_csv(reader, source);
    let mut dataset = match result {
        Ok(ds) => ds,
        Err(e) => {
            IngestionMetrics::record_load_error(load_error_kind(&e));
            return Err(e);
        }
    };

    let (rows, cols) = dataset.shape();
    info!("Dataset loaded successfully with shape: ({}, {})", rows, cols);

    if drop_unnamed {
        let unnamed: Vec<String> = dataset
            .columns()
            .iter()
            .filter(|c| c.contains(HOUSEKEEPING_MARKER))
            .cloned()
            .collect();
        if !unnamed.is_empty() {
            dataset.drop_columns(&unnamed);
            IngestionMetrics::record_unnamed_columns_dropped(unnamed.len());
            info!("Dropped {} unnamed columns: {:?}", unnamed.len(), unnamed);
        }
    }

    IngestionMetrics::record_load_success(dataset.n_rows(), started.elapsed().as_secs_f64());
    Ok(dataset)
}

fn parse_csv<R: Read>(reader: R, source: &Path) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(PrepError::EmptyData {
            path: source.to_path_buf(),
        });
    }

    let mut dataset = Dataset::new(column_names(headers.iter()));
    for record in rdr.records() {
        let record = record?;
        let row = record.iter().map(parse_field).collect();
        dataset.push_row(row)?;
    }

    debug!("Parsed {} records from {}", dataset.n_rows(), source.display());
    Ok(dataset)
}

fn parse_field(field: &str) -> Value {
    if field.is_empty() || MISSING_MARKERS.contains(&field) {
        Value::Null
    } else {
        Value::text(field)
    }
}

/// Resolve header names: blank headers become `Unnamed: {position}` and
/// repeated names get a `.N` suffix, so every column is addressable.
fn column_names<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    headers
        .enumerate()
        .map(|(idx, raw)| {
            let base = if raw.trim().is_empty() {
                format!("{}: {}", HOUSEKEEPING_MARKER, idx)
            } else {
                raw.to_string()
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{}.{}", base, count)
            };
            *count += 1;
            name
        })
        .collect()
}

/// `error_type` label for the load failure counter
fn load_error_kind(err: &PrepError) -> &'static str {
    match err {
        PrepError::FileNotFound { .. } => "file_not_found",
        PrepError::EmptyData { .. } => "empty",
        PrepError::RowWidth { .. } => "row_width",
        PrepError::Io(_) => "io",
        _ => "csv",
    }
}

/// Write a dataset to CSV with a header row. Missing values are written as empty fields.
///
/// CSV carries no types: loading the file again yields `Text` where the
/// dataset held `Int`, and a text cell equal to a missing marker (`NA`,
/// `null`, ...) comes back as `Null`.
pub fn write_csv<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    wtr.write_record(dataset.columns())?;
    for row in dataset.rows() {
        wtr.write_record(row.iter().map(|v| v.to_string()))?;
    }
    wtr.flush()?;

    info!(
        "Wrote {} rows to {}",
        dataset.n_rows(),
        path.as_ref().display()
    );
    Ok(())
}

/// Summarize a dataset and log the summary
pub fn get_data_info(dataset: &Dataset) -> DatasetInfo {
    let info = dataset.info();
    info!("\n{}", info);
    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_load_missing_file_is_file_not_found() {
        let dir = tempdir().unwrap();
        let result = load_data(dir.path().join("nope.csv"), true);
        assert!(matches!(result, Err(PrepError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_zero_byte_file_is_empty_data() {
        let file = NamedTempFile::new().unwrap();
        let result = load_data(file.path(), true);
        assert!(matches!(result, Err(PrepError::EmptyData { .. })));
    }

    #[test]
    fn test_load_errors_are_labelled_by_kind() {
        let dir = tempdir().unwrap();
        let missing = load_data(dir.path().join("nope.csv"), true).unwrap_err();
        assert_eq!(load_error_kind(&missing), "file_not_found");

        let empty = load_data_from_reader("".as_bytes(), true).unwrap_err();
        assert_eq!(load_error_kind(&empty), "empty");

        let wide = PrepError::RowWidth { row: 0, expected: 1, found: 2 };
        assert_eq!(load_error_kind(&wide), "row_width");
    }

    #[test]
    fn test_header_only_file_is_an_empty_dataset() {
        let ds = load_data_from_reader("Platform,Sentiment\n".as_bytes(), true).unwrap();
        assert_eq!(ds.shape(), (0, 2));
    }

    #[test]
    fn test_drops_unnamed_index_columns() {
        let csv = ",Unnamed: 0.1,Platform,Sentiment\n0,0,Twitter,Joy\n1,1,Facebook,Sad\n";
        let ds = load_data_from_reader(csv.as_bytes(), true).unwrap();
        assert_eq!(ds.columns(), &["Platform".to_string(), "Sentiment".to_string()]);
        assert_eq!(ds.shape(), (2, 2));

        let kept = load_data_from_reader(csv.as_bytes(), false).unwrap();
        assert_eq!(kept.columns()[0], "Unnamed: 0");
        assert_eq!(kept.shape(), (2, 4));
    }

    #[test]
    fn test_empty_and_marker_fields_are_null() {
        let csv = "Text,Country\n,USA\nNaN,NA\nhello,\n";
        let ds = load_data_from_reader(csv.as_bytes(), true).unwrap();
        assert_eq!(ds.value(0, "Text"), Some(&Value::Null));
        assert_eq!(ds.value(1, "Country"), Some(&Value::Null));
        assert_eq!(ds.value(2, "Text"), Some(&Value::from("hello")));
        assert_eq!(ds.value(2, "Country"), Some(&Value::Null));
    }

    #[test]
    fn test_repeated_headers_are_suffixed() {
        let names = column_names(["a", "a", "", "a"].into_iter());
        assert_eq!(names, vec!["a", "a.1", "Unnamed: 2", "a.2"]);
    }

    #[test]
    fn test_write_then_load_preserves_cells() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Platform,Text\n Twitter ,\"hi, there\"\nInstagram,").unwrap();
        let ds = load_data(file.path(), true).unwrap();

        let out = NamedTempFile::new().unwrap();
        write_csv(&ds, out.path()).unwrap();
        let reloaded = load_data(out.path(), true).unwrap();
        assert_eq!(reloaded, ds);
        assert_eq!(reloaded.value(0, "Platform"), Some(&Value::from(" Twitter ")));
    }
}
