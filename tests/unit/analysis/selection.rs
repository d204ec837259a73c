//! Tests for top-N pattern selection and tie handling

#[cfg(test)]
mod tests {
    use crate::{dataset, sample_dataset};
    use mdpattern::analysis::patterns::PatternMatrix;
    use mdpattern::analysis::selection::{PatternSelection, select_top_patterns};

    fn sample_matrix() -> PatternMatrix {
        PatternMatrix::detect(&sample_dataset(), &[0, 1, 2]).unwrap()
    }

    // Tests selecting all patterns keeps order and is not truncated
    // Verified by reversing kept indices
    #[test]
    fn test_select_all() {
        let matrix = sample_matrix();
        let selection = PatternSelection::all(&matrix);

        assert_eq!(selection.kept(), [0, 1, 2, 3]);
        assert_eq!(selection.shown(), 4);
        assert_eq!(selection.total(), 4);
        assert!(!selection.truncated());
    }

    // Tests the most frequent patterns are kept in pattern order
    // Verified by gathering margins of the dropped patterns
    #[test]
    fn test_top_two_patterns() {
        let matrix = sample_matrix();
        let selection = select_top_patterns(&matrix, 2);

        assert_eq!(selection.kept(), [0, 1]);
        assert_eq!(selection.frequencies(), vec![2, 2]);
        assert_eq!(selection.na_row(), vec![0, 1]);
        assert!(selection.truncated());
    }

    // Tests a frequent later pattern displaces earlier rare ones
    // Verified by keeping the first npat patterns
    #[test]
    fn test_frequent_pattern_not_first() {
        let data = dataset(
            &["x", "y"],
            &[&["1", "1"], &["1", "NA"], &["1", "NA"], &["NA", "NA"]],
        );
        let matrix = PatternMatrix::detect(&data, &[0, 1]).unwrap();
        assert_eq!(matrix.frequencies(), [1, 2, 1]);

        let selection = select_top_patterns(&matrix, 1);
        assert_eq!(selection.kept(), [1]);

        let selection = select_top_patterns(&matrix, 2);
        assert_eq!(selection.kept(), [0, 1]);
        assert_eq!(selection.na_row(), vec![0, 1]);
    }

    // Tests frequency ties go to the earlier pattern
    // Verified by breaking ties towards later patterns
    #[test]
    fn test_ties_prefer_earlier_patterns() {
        let matrix = sample_matrix();
        let selection = select_top_patterns(&matrix, 3);
        assert_eq!(selection.kept(), [0, 1, 2]);
    }

    // Tests limits at or above the pattern count keep everything
    // Verified by truncating when npat equals the pattern count
    #[test]
    fn test_limit_covers_all_patterns() {
        let matrix = sample_matrix();
        for npat in [4, 10] {
            let selection = select_top_patterns(&matrix, npat);
            assert_eq!(selection.shown(), 4);
            assert!(!selection.truncated());
        }
    }

    // Tests column margins stay at whole-dataset values
    // Verified by recomputing margins from kept patterns
    #[test]
    fn test_column_margins_unchanged() {
        let matrix = sample_matrix();
        let selection = select_top_patterns(&matrix, 1);
        assert_eq!(selection.kept(), [0]);
        assert_eq!(selection.matrix().na_col(), [1, 2, 3]);
        assert_eq!(selection.matrix().total_missing(), 6);
    }
}
