//! Pattern detection and statistical reshaping of missingness data

/// Per-cluster pattern prevalence
pub mod clusters;
/// Bitset representation of observed variables
pub mod mask;
/// Missing data pattern detection
pub mod patterns;
/// Top-N pattern filtering
pub mod selection;
