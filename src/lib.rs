//! Missing data pattern detection and tile plots for tabular data
//!
//! Rows of a dataset are grouped by which variables are observed and which are
//! missing. The resulting patterns are counted, optionally filtered to the most
//! frequent ones, and drawn as a tile plot annotated with pattern frequencies
//! and per-row and per-column missing counts.

#![forbid(unsafe_code)]

/// Pattern detection, selection, and cluster weighting
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Plot assembly and rendering
pub mod plot;

pub use io::dataset::Dataset;
pub use io::error::{PatternError, Result};
pub use plot::{PatternPlot, PatternPlotOptions, VariableSelection, plot_pattern};
