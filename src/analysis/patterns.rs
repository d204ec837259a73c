//! Missing data pattern detection over a rectangular dataset

use crate::analysis::mask::ObservedMask;
use crate::io::dataset::Dataset;
use crate::io::error::{Result, invalid_source};
use ndarray::Array2;
use serde::Serialize;
use std::collections::HashMap;

/// Distinct missingness patterns with their frequencies and margins
///
/// Variables are ordered by increasing number of missing values. Patterns are
/// ordered by their missingness flags read as a binary number with the first
/// variable most significant, so the complete pattern, when present, comes
/// first.
#[derive(Debug, Clone, Serialize)]
pub struct PatternMatrix {
    variables: Vec<String>,
    #[serde(skip)]
    columns: Vec<usize>,
    #[serde(serialize_with = "serialize_masks")]
    patterns: Vec<ObservedMask>,
    frequencies: Vec<usize>,
    na_row: Vec<usize>,
    na_col: Vec<usize>,
    total_missing: usize,
    rows: usize,
}

impl PatternMatrix {
    /// Detect missing data patterns over the given dataset columns
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The dataset has no rows
    /// - No columns are selected
    /// - A column index is out of bounds
    pub fn detect(data: &Dataset, columns: &[usize]) -> Result<Self> {
        if data.row_count() == 0 {
            return Err(invalid_source(&"dataset has no rows"));
        }
        if columns.is_empty() {
            return Err(invalid_source(&"no variables selected"));
        }

        let mut names = Vec::with_capacity(columns.len());
        for &col in columns {
            let name = data
                .columns()
                .get(col)
                .ok_or_else(|| invalid_source(&format!("column index {col} is out of bounds")))?;
            names.push(name.clone());
        }

        let missing = data.missing_mask(columns);

        let column_missing: Vec<usize> = missing
            .columns()
            .into_iter()
            .map(|column| column.iter().filter(|&&is_missing| is_missing).count())
            .collect();

        // Stable sort keeps dataset order among equally incomplete columns
        let mut order: Vec<usize> = (0..columns.len()).collect();
        order.sort_by_key(|&j| column_missing.get(j).copied().unwrap_or(0));

        let mut counts: HashMap<ObservedMask, usize> = HashMap::new();
        for row in missing.rows() {
            let mask = ObservedMask::from_missing(order.iter().map(|&j| row.get(j).copied().unwrap_or(true)));
            *counts.entry(mask).or_insert(0) += 1;
        }

        let mut grouped: Vec<(ObservedMask, usize)> = counts.into_iter().collect();
        grouped.sort_by_cached_key(|(mask, _)| mask.code());

        let na_row = grouped.iter().map(|(mask, _)| mask.missing_count()).collect();
        let frequencies = grouped.iter().map(|&(_, count)| count).collect();
        let patterns = grouped.into_iter().map(|(mask, _)| mask).collect();
        let na_col: Vec<usize> = order
            .iter()
            .map(|&j| column_missing.get(j).copied().unwrap_or(0))
            .collect();
        let total_missing = na_col.iter().sum();

        Ok(Self {
            variables: order
                .iter()
                .filter_map(|&j| names.get(j).cloned())
                .collect(),
            columns: order
                .iter()
                .filter_map(|&j| columns.get(j).copied())
                .collect(),
            patterns,
            frequencies,
            na_row,
            na_col,
            total_missing,
            rows: data.row_count(),
        })
    }

    /// Variable names in display order
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Dataset column indices in display order
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Number of distinct patterns
    pub const fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Number of data rows the patterns were detected from
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Pattern masks in display order
    pub fn patterns(&self) -> &[ObservedMask] {
        &self.patterns
    }

    /// Test whether variable `variable` is observed in pattern `pattern`
    pub fn observed(&self, pattern: usize, variable: usize) -> bool {
        self.patterns
            .get(pattern)
            .is_some_and(|mask| mask.is_observed(variable))
    }

    /// Number of rows sharing each pattern
    pub fn frequencies(&self) -> &[usize] {
        &self.frequencies
    }

    /// Number of missing variables in each pattern
    pub fn na_row(&self) -> &[usize] {
        &self.na_row
    }

    /// Number of missing cells in each variable
    pub fn na_col(&self) -> &[usize] {
        &self.na_col
    }

    /// Total number of missing cells
    pub const fn total_missing(&self) -> usize {
        self.total_missing
    }

    /// Pattern matrix with 1 for observed and 0 for missing cells
    pub fn matrix(&self) -> Array2<u8> {
        Array2::from_shape_fn(
            (self.pattern_count(), self.variables.len()),
            |(pattern, variable)| u8::from(self.observed(pattern, variable)),
        )
    }
}

fn serialize_masks<S>(masks: &[ObservedMask], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeSeq;

    let mut seq = serializer.serialize_seq(Some(masks.len()))?;
    for mask in masks {
        let cells: Vec<u8> = (0..mask.width())
            .map(|index| u8::from(mask.is_observed(index)))
            .collect();
        seq.serialize_element(&cells)?;
    }
    seq.end()
}
