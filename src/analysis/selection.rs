//! Restriction of a pattern matrix to its most frequent patterns

use crate::analysis::patterns::PatternMatrix;

/// Subset of patterns chosen for display
///
/// Holds indices into the source matrix in their original pattern order.
/// Column margins keep whole-dataset values even when patterns are dropped.
#[derive(Debug, Clone)]
pub struct PatternSelection<'a> {
    matrix: &'a PatternMatrix,
    kept: Vec<usize>,
}

impl<'a> PatternSelection<'a> {
    /// Select every pattern
    pub fn all(matrix: &'a PatternMatrix) -> Self {
        Self {
            matrix,
            kept: (0..matrix.pattern_count()).collect(),
        }
    }

    /// Source pattern matrix
    pub const fn matrix(&self) -> &'a PatternMatrix {
        self.matrix
    }

    /// Indices of kept patterns in display order
    pub fn kept(&self) -> &[usize] {
        &self.kept
    }

    /// Number of displayed patterns
    pub const fn shown(&self) -> usize {
        self.kept.len()
    }

    /// Number of patterns in the source matrix
    pub const fn total(&self) -> usize {
        self.matrix.pattern_count()
    }

    /// Test whether some patterns were dropped
    pub const fn truncated(&self) -> bool {
        self.shown() < self.total()
    }

    /// Frequencies of the kept patterns
    pub fn frequencies(&self) -> Vec<usize> {
        self.gather(self.matrix.frequencies())
    }

    /// Missing variable counts of the kept patterns
    pub fn na_row(&self) -> Vec<usize> {
        self.gather(self.matrix.na_row())
    }

    fn gather(&self, values: &[usize]) -> Vec<usize> {
        self.kept
            .iter()
            .filter_map(|&index| values.get(index).copied())
            .collect()
    }
}

/// Keep the `npat` most frequent patterns
///
/// Frequency ties go to the pattern that comes first. When `npat` covers every
/// pattern nothing is dropped.
pub fn select_top_patterns(matrix: &PatternMatrix, npat: usize) -> PatternSelection<'_> {
    if npat >= matrix.pattern_count() {
        return PatternSelection::all(matrix);
    }

    let frequencies = matrix.frequencies();
    let mut ranked: Vec<usize> = (0..matrix.pattern_count()).collect();
    ranked.sort_by(|&a, &b| {
        let freq_a = frequencies.get(a).copied().unwrap_or(0);
        let freq_b = frequencies.get(b).copied().unwrap_or(0);
        freq_b.cmp(&freq_a).then(a.cmp(&b))
    });
    ranked.truncate(npat);
    ranked.sort_unstable();

    PatternSelection {
        matrix,
        kept: ranked,
    }
}
