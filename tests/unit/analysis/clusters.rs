//! Tests for per-cluster pattern prevalence weights

#[cfg(test)]
mod tests {
    use crate::{clustered_dataset, dataset};
    use mdpattern::PatternError;
    use mdpattern::analysis::clusters::cluster_opacity;
    use mdpattern::analysis::patterns::PatternMatrix;

    // Tests opacity is the share of clusters containing each pattern
    // Verified by dividing by the number of rows instead of clusters
    #[test]
    fn test_cluster_share() {
        let data = clustered_dataset();
        let matrix = PatternMatrix::detect(&data, &[0, 1, 2]).unwrap();
        assert_eq!(matrix.variables(), ["g", "a", "b"]);

        let opacity = cluster_opacity(&data, 2, &matrix).unwrap();
        assert_eq!(opacity, vec![1.0, 0.5, 0.5]);
    }

    // Tests rows with a missing cluster value belong to no cluster
    // Verified by grouping missing cluster values together
    #[test]
    fn test_missing_cluster_values_ignored() {
        let data = dataset(
            &["a", "b", "g"],
            &[&["1", "2", "x"], &["1", "2", "y"], &["NA", "2", "NA"]],
        );
        let matrix = PatternMatrix::detect(&data, &[0, 1, 2]).unwrap();
        let opacity = cluster_opacity(&data, 2, &matrix).unwrap();

        assert_eq!(matrix.pattern_count(), 2);
        assert_eq!(opacity, vec![1.0, 0.0]);
    }

    // Tests every opacity lies within the unit interval
    // Verified by counting rows per cluster instead of presence
    #[test]
    fn test_opacity_bounds() {
        let data = clustered_dataset();
        let matrix = PatternMatrix::detect(&data, &[0, 1, 2]).unwrap();
        let opacity = cluster_opacity(&data, 2, &matrix).unwrap();
        assert!(opacity.iter().all(|value| (0.0..=1.0).contains(value)));
    }

    // Tests errors for an unusable cluster column
    // Verified by removing the empty cluster check
    #[test]
    fn test_cluster_errors() {
        let data = dataset(&["a", "g"], &[&["1", "NA"], &["NA", "NA"]]);
        let matrix = PatternMatrix::detect(&data, &[0, 1]).unwrap();

        assert!(matches!(
            cluster_opacity(&data, 1, &matrix),
            Err(PatternError::InvalidSourceData { .. })
        ));
        assert!(cluster_opacity(&data, 5, &matrix).is_err());
    }
}
