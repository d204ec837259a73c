//! Rectangular dataset loading with configurable missing value tokens

use crate::io::error::{PatternError, Result, file_system, invalid_source};
use ndarray::Array2;
use std::collections::HashSet;
use std::path::Path;

/// Column-named table of optional string cells
///
/// Rows are observations and columns are variables. A `None` cell is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Dataset {
    /// Build a dataset from column names and row cells
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Column names are repeated
    /// - Any row's width differs from the number of columns
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(invalid_source(&format!("duplicate column name '{name}'")));
            }
        }

        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(invalid_source(&format!(
                    "row {} has {} cells but the header has {} columns",
                    index + 1,
                    row.len(),
                    columns.len()
                )));
            }
        }

        Ok(Self { columns, rows })
    }

    /// Load a CSV file with a header row
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened
    /// - The CSV is malformed or has ragged rows
    /// - Column names are repeated
    pub fn from_csv_path<P: AsRef<Path>>(path: P, na_tokens: &[String]) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(file_system(path, "open"))?;
        Self::from_reader(file, na_tokens).map_err(|error| match error {
            PatternError::CsvRead { source, .. } => PatternError::CsvRead {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Load CSV data from any reader
    ///
    /// Cells are trimmed before being compared against `na_tokens`.
    ///
    /// # Errors
    ///
    /// Returns an error if the CSV is malformed or the table is not rectangular
    pub fn from_reader<R: std::io::Read>(reader: R, na_tokens: &[String]) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(ToString::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(
                record
                    .iter()
                    .map(|cell| {
                        (!na_tokens.iter().any(|token| token == cell)).then(|| cell.to_string())
                    })
                    .collect(),
            );
        }

        Self::new(columns, rows)
    }

    /// Column names in dataset order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of variables
    pub const fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of observations
    pub const fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a named column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cell value, `None` when missing or out of bounds
    pub fn value(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .and_then(Option::as_deref)
    }

    /// Test whether a cell is missing
    ///
    /// Out-of-bounds cells count as missing.
    pub fn is_missing(&self, row: usize, col: usize) -> bool {
        self.value(row, col).is_none()
    }

    /// Missingness indicator over the selected columns
    ///
    /// The result has one row per observation and one column per entry of
    /// `columns`, `true` where the value is missing.
    pub fn missing_mask(&self, columns: &[usize]) -> Array2<bool> {
        Array2::from_shape_fn((self.row_count(), columns.len()), |(row, j)| {
            columns
                .get(j)
                .is_none_or(|&col| self.is_missing(row, col))
        })
    }
}
