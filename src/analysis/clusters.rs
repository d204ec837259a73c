//! Per-cluster pattern prevalence used as tile opacity

use crate::analysis::mask::ObservedMask;
use crate::analysis::patterns::PatternMatrix;
use crate::io::dataset::Dataset;
use crate::io::error::{Result, invalid_source};
use std::collections::{BTreeMap, HashSet};

/// Opacity for each pattern, the share of clusters in which it occurs
///
/// Rows are grouped by the raw value of `cluster_col`. Rows with a missing
/// cluster value belong to no cluster. The result is indexed like the
/// patterns of `matrix` and every value lies in `[0, 1]`.
///
/// # Errors
///
/// Returns an error if:
/// - `cluster_col` is out of bounds
/// - Every cluster value is missing
pub fn cluster_opacity(data: &Dataset, cluster_col: usize, matrix: &PatternMatrix) -> Result<Vec<f64>> {
    if cluster_col >= data.column_count() {
        return Err(invalid_source(&format!(
            "cluster column index {cluster_col} is out of bounds"
        )));
    }

    let missing = data.missing_mask(matrix.columns());

    // BTreeMap keeps cluster iteration stable for logging
    let mut clusters: BTreeMap<&str, HashSet<ObservedMask>> = BTreeMap::new();
    for (row, flags) in missing.rows().into_iter().enumerate() {
        let Some(cluster) = data.value(row, cluster_col) else {
            continue;
        };
        clusters
            .entry(cluster)
            .or_default()
            .insert(ObservedMask::from_missing(flags.iter().copied()));
    }

    if clusters.is_empty() {
        return Err(invalid_source(&"cluster variable has no observed values"));
    }

    tracing::debug!(clusters = clusters.len(), "computed cluster patterns");

    let cluster_count = clusters.len() as f64;
    Ok(matrix
        .patterns()
        .iter()
        .map(|pattern| {
            let present = clusters
                .values()
                .filter(|patterns| patterns.contains(pattern))
                .count();
            present as f64 / cluster_count
        })
        .collect())
}
