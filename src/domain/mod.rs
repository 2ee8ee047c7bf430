use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::INFO_PREVIEW_ROWS;
use crate::error::{PrepError, Result};

/// A single cell. Every loaded field starts as `Text` (or `Null` when the
/// field was empty); derived feature columns hold `Int`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Int(i64),
    Text(String),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int(i) => write!(f, "{}", i),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

/// An ordered table of rows with named columns.
///
/// Rows have no identity beyond their position. Pipeline stages take a
/// `&Dataset` and hand back a fresh one, so a caller's copy is never
/// touched by a later stage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// Wire form of [`Dataset`]; rows are checked against the header on the way in
#[derive(Deserialize)]
struct RawDataset {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = PrepError;

    fn try_from(raw: RawDataset) -> Result<Self> {
        Dataset::from_rows(raw.columns, raw.rows)
    }
}

impl Dataset {
    /// Create an empty dataset with the given header
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a dataset from a header and rows, rejecting rows wider than the header.
    /// Short rows are padded with `Null`.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let mut dataset = Self::new(columns);
        for row in rows {
            dataset.push_row(row)?;
        }
        Ok(dataset)
    }

    pub fn push_row(&mut self, mut row: Vec<Value>) -> Result<()> {
        let expected = self.columns.len();
        if row.len() > expected {
            return Err(PrepError::RowWidth {
                row: self.rows.len(),
                expected,
                found: row.len(),
            });
        }
        row.resize(expected, Value::Null);
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_columns())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterate the values of one column, top to bottom
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Value> + '_> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    pub fn value(&self, row: usize, name: &str) -> Option<&Value> {
        let idx = self.column_index(name)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    /// Replace the values of `name`, or append it as a new rightmost column.
    pub fn set_column(&mut self, name: &str, values: Vec<Value>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(PrepError::RowWidth {
                row: values.len().min(self.rows.len()),
                expected: self.rows.len(),
                found: values.len(),
            });
        }

        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }

    /// Rewrite every value of an existing column in place
    pub fn map_column<F>(&mut self, name: &str, mut f: F) -> Result<()>
    where
        F: FnMut(&Value) -> Value,
    {
        let idx = self
            .column_index(name)
            .ok_or_else(|| PrepError::ColumnNotFound(name.to_string()))?;
        for row in &mut self.rows {
            row[idx] = f(&row[idx]);
        }
        Ok(())
    }

    /// Remove the named columns; names not present are ignored
    pub fn drop_columns(&mut self, names: &[String]) {
        let keep: Vec<bool> = self.columns.iter().map(|c| !names.contains(c)).collect();
        if keep.iter().all(|k| *k) {
            return;
        }

        let mut flags = keep.iter();
        self.columns.retain(|_| *flags.next().unwrap_or(&true));
        for row in &mut self.rows {
            let mut flags = keep.iter();
            row.retain(|_| *flags.next().unwrap_or(&true));
        }
    }

    /// Keep only the rows for which `keep(index, row)` holds, preserving order
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(usize, &[Value]) -> bool,
    {
        let mut idx = 0;
        self.rows.retain(|row| {
            let kept = keep(idx, row.as_slice());
            idx += 1;
            kept
        });
    }

    /// Number of distinct non-null values in a column
    pub fn unique_count(&self, name: &str) -> Option<usize> {
        let values: HashSet<&Value> = self.column(name)?.filter(|v| !v.is_null()).collect();
        Some(values.len())
    }

    /// Non-null value frequencies, most frequent first (ties in first-seen order)
    pub fn value_counts(&self, name: &str) -> Option<Vec<(Value, usize)>> {
        let mut order: Vec<&Value> = Vec::new();
        let mut counts: HashMap<&Value, usize> = HashMap::new();
        for value in self.column(name)?.filter(|v| !v.is_null()) {
            let count = counts.entry(value).or_insert(0);
            if *count == 0 {
                order.push(value);
            }
            *count += 1;
        }

        let mut result: Vec<(Value, usize)> = order
            .into_iter()
            .map(|v| (v.clone(), counts[v]))
            .collect();
        result.sort_by(|a, b| b.1.cmp(&a.1));
        Some(result)
    }

    /// Summarize shape, column types and the first few rows
    pub fn info(&self) -> DatasetInfo {
        let dtypes = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                (
                    name.clone(),
                    ColumnType::infer(self.rows.iter().map(|row| &row[idx])),
                )
            })
            .collect();

        DatasetInfo {
            shape: self.shape(),
            columns: self.columns.clone(),
            dtypes,
            head: self.rows.iter().take(INFO_PREVIEW_ROWS).cloned().collect(),
        }
    }
}

/// Column type as observed from the stored values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Every non-null value is an integer
    Integer,
    /// At least one non-null value is text
    Text,
    /// No non-null values at all
    Empty,
}

impl ColumnType {
    fn infer<'a>(values: impl Iterator<Item = &'a Value>) -> Self {
        let mut seen_int = false;
        for value in values {
            match value {
                Value::Text(_) => return ColumnType::Text,
                Value::Int(_) => seen_int = true,
                Value::Null => {}
            }
        }
        if seen_int {
            ColumnType::Integer
        } else {
            ColumnType::Empty
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Integer => "integer",
            ColumnType::Text => "text",
            ColumnType::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// Basic information about a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub shape: (usize, usize),
    pub columns: Vec<String>,
    pub dtypes: Vec<(String, ColumnType)>,
    pub head: Vec<Vec<Value>>,
}

impl fmt::Display for DatasetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Dataset Information ===")?;
        writeln!(f, "Shape: ({}, {})", self.shape.0, self.shape.1)?;
        writeln!(f, "Columns: {:?}", self.columns)?;
        writeln!(f, "Data types:")?;
        for (name, dtype) in &self.dtypes {
            writeln!(f, "  {:<20} {}", name, dtype)?;
        }
        writeln!(f, "First few rows:")?;
        writeln!(f, "  {}", self.columns.join(" | "))?;
        for row in &self.head {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "  {}", cells.join(" | "))?;
        }
        Ok(())
    }
}
