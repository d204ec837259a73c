//! Plot assembly and rendering for missing data patterns

/// Validation and assembly of the pattern plot
pub mod builder;
/// Long-form reshaping of selected patterns
pub mod long;
/// Plot arguments and validation
pub mod options;
/// SVG rendering through plotters
pub mod svg;

pub use builder::{AxisLabels, PatternPlot, plot_pattern};
pub use options::{PatternPlotOptions, VariableSelection};
