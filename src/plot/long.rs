//! Long-form reshaping of selected patterns into one record per tile

use crate::analysis::selection::PatternSelection;
use serde::Serialize;
use std::fmt;

/// Whether a tile shows an observed or a missing variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Where {
    /// Variable is missing in the pattern
    Missing,
    /// Variable is observed in the pattern
    Observed,
}

impl fmt::Display for Where {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::Observed => write!(f, "observed"),
        }
    }
}

/// A single tile of the pattern plot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileRecord {
    /// Row position, 1 at the top
    pub y: usize,
    /// Column position, 1 at the left
    pub x: usize,
    /// Variable name of the column
    pub variable: String,
    /// Number of rows sharing the pattern
    pub frequency: usize,
    /// Number of missing variables in the pattern
    pub na_row: usize,
    /// Tile state
    #[serde(rename = "where")]
    pub where_: Where,
    /// Tile opacity in `[0, 1]`
    pub opacity: f64,
}

/// Reshape selected patterns into long form
///
/// `opacity` is indexed by pattern in the source matrix. Patterns without an
/// entry are drawn fully opaque.
pub fn to_long(selection: &PatternSelection<'_>, opacity: &[f64]) -> Vec<TileRecord> {
    let matrix = selection.matrix();
    let variables = matrix.variables();
    let mut records = Vec::with_capacity(selection.shown() * variables.len());

    for (row, &pattern) in selection.kept().iter().enumerate() {
        let frequency = matrix.frequencies().get(pattern).copied().unwrap_or(0);
        let na_row = matrix.na_row().get(pattern).copied().unwrap_or(0);
        let alpha = opacity.get(pattern).copied().unwrap_or(1.0).clamp(0.0, 1.0);

        for (col, variable) in variables.iter().enumerate() {
            let where_ = if matrix.observed(pattern, col) {
                Where::Observed
            } else {
                Where::Missing
            };
            records.push(TileRecord {
                y: row + 1,
                x: col + 1,
                variable: variable.clone(),
                frequency,
                na_row,
                where_,
                opacity: alpha,
            });
        }
    }

    records
}
