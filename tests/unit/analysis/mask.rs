//! Tests for `ObservedMask` construction, counting, and ordering codes

#[cfg(test)]
mod tests {
    use mdpattern::analysis::mask::ObservedMask;
    use std::collections::HashSet;

    // Verifies a new mask has every variable missing
    // Verified by initializing the mask with all bits set
    #[test]
    fn test_new_mask_is_all_missing() {
        let mask = ObservedMask::new(4);
        assert_eq!(mask.width(), 4);
        assert_eq!(mask.observed_count(), 0);
        assert_eq!(mask.missing_count(), 4);
        assert!(!mask.is_complete());
    }

    // Tests setting and reading observed bits
    // Verified by removing the bit-setting logic from set_observed
    #[test]
    fn test_set_observed_and_bounds() {
        let mut mask = ObservedMask::new(3);
        mask.set_observed(1);
        mask.set_observed(7);

        assert!(mask.is_observed(1));
        assert!(!mask.is_observed(0));
        assert!(!mask.is_observed(7));
        assert_eq!(mask.to_vec(), vec![1]);
    }

    // Tests construction from missingness flags inverts them
    // Verified by storing missing flags directly
    #[test]
    fn test_from_missing() {
        let mask = ObservedMask::from_missing([false, true, false]);
        assert_eq!(mask.to_vec(), vec![0, 2]);
        assert_eq!(mask.missing_count(), 1);
        assert_eq!(mask.to_string(), "101");
    }

    // Tests codes order masks like sorted missingness strings
    // Verified by reversing code bit order
    #[test]
    fn test_code_ordering() {
        let complete = ObservedMask::all(3);
        let first_missing = ObservedMask::from_missing([true, false, false]); // 100
        let second_missing = ObservedMask::from_missing([false, true, false]); // 010
        let last_missing = ObservedMask::from_missing([false, false, true]); // 001
        let first_two = ObservedMask::from_missing([true, true, false]); // 110

        let mut masks = vec![
            first_missing.clone(),
            first_two.clone(),
            complete.clone(),
            second_missing.clone(),
            last_missing.clone(),
        ];
        masks.sort_by_cached_key(ObservedMask::code);

        assert_eq!(
            masks,
            vec![complete, last_missing, second_missing, first_missing, first_two.clone()]
        );
        assert_eq!(first_two.code(), vec![true, true, false]);
    }

    // Tests equal masks collapse in hashed collections
    // Verified by including width-only data in the hash
    #[test]
    fn test_hash_equality() {
        let mut set = HashSet::new();
        set.insert(ObservedMask::from_missing([false, true]));
        set.insert(ObservedMask::from_missing([false, true]));
        set.insert(ObservedMask::from_missing([true, false]));
        assert_eq!(set.len(), 2);
    }
}
