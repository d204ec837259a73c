use bitvec::prelude::*;
use std::fmt;

/// Fixed-width bitset recording which variables of a row are observed
///
/// Bit `j` is set when variable `j` is observed. Masks hash and compare by
/// content, so rows sharing a pattern collapse onto one key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObservedMask {
    bits: BitVec,
}

impl ObservedMask {
    /// Create a mask with every variable missing
    pub fn new(width: usize) -> Self {
        Self {
            bits: bitvec![0; width],
        }
    }

    /// Create a mask with every variable observed
    pub fn all(width: usize) -> Self {
        Self {
            bits: bitvec![1; width],
        }
    }

    /// Build a mask from a row of missingness flags
    pub fn from_missing<I>(missing: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        Self {
            bits: missing.into_iter().map(|is_missing| !is_missing).collect(),
        }
    }

    /// Number of variables covered by the mask
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Mark a variable as observed
    ///
    /// Indices beyond the mask width are ignored
    pub fn set_observed(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, true);
        }
    }

    /// Test whether a variable is observed
    pub fn is_observed(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Count observed variables
    pub fn observed_count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Count missing variables
    pub fn missing_count(&self) -> usize {
        self.bits.count_zeros()
    }

    /// Test if every variable is observed
    pub fn is_complete(&self) -> bool {
        self.bits.all()
    }

    /// Missingness flags in variable order, `true` where a variable is missing
    ///
    /// Codes compare lexicographically with the first variable most
    /// significant, the same order as sorting `0`/`1` missingness strings.
    pub fn code(&self) -> Vec<bool> {
        self.bits.iter().by_vals().map(|observed| !observed).collect()
    }

    /// Extract observed variable indices
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for ObservedMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for observed in self.bits.iter().by_vals() {
            write!(f, "{}", u8::from(observed))?;
        }
        Ok(())
    }
}
