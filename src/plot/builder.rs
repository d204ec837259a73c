//! Assembly of the missing data pattern tile plot

use crate::analysis::clusters::cluster_opacity;
use crate::analysis::patterns::PatternMatrix;
use crate::analysis::selection::{PatternSelection, select_top_patterns};
use crate::io::configuration::{
    BOTTOM_AXIS_TITLE, LEFT_AXIS_TITLE, RIGHT_AXIS_TITLE, TOP_AXIS_TITLE,
};
use crate::io::dataset::Dataset;
use crate::io::error::Result;
use crate::plot::long::{TileRecord, to_long};
use crate::plot::options::PatternPlotOptions;

/// Tick labels along one side of the plot together with the axis title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLabels {
    /// Axis title
    pub title: &'static str,
    /// One label per row or column, in display order
    pub labels: Vec<String>,
}

impl AxisLabels {
    fn new<T: ToString>(title: &'static str, values: &[T]) -> Self {
        Self {
            title,
            labels: values.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Backend-independent description of a pattern tile plot
#[derive(Debug, Clone)]
pub struct PatternPlot {
    /// One record per displayed tile
    pub tiles: Vec<TileRecord>,
    /// Pattern frequencies, one per row
    pub left: AxisLabels,
    /// Missing entries per pattern, one per row
    pub right: AxisLabels,
    /// Variable names, one per column
    pub top: AxisLabels,
    /// Missing entries per variable, one per column
    pub bottom: AxisLabels,
    /// Note about hidden patterns
    pub caption: Option<String>,
    /// Keep tiles square
    pub square: bool,
    /// Rotate variable names
    pub rotate: bool,
    /// Number of displayed patterns
    pub n_rows: usize,
    /// Number of displayed variables
    pub n_cols: usize,
    /// Total number of missing cells across the selected variables
    pub total_missing: usize,
    /// Detected patterns before filtering
    pub matrix: PatternMatrix,
}

/// Build a missing data pattern plot for a dataset
///
/// # Errors
///
/// Returns an error if option validation, pattern detection, or cluster
/// weighting fails
pub fn plot_pattern(data: &Dataset, options: &PatternPlotOptions) -> Result<PatternPlot> {
    let resolved = options.validate(data)?;
    let matrix = PatternMatrix::detect(data, &resolved.columns)?;

    tracing::debug!(
        patterns = matrix.pattern_count(),
        variables = matrix.variables().len(),
        total_missing = matrix.total_missing(),
        "detected missing data patterns"
    );

    let selection = match resolved.npat {
        Some(npat) => select_top_patterns(&matrix, npat),
        None => PatternSelection::all(&matrix),
    };

    let opacity = match resolved.cluster {
        Some(cluster_col) => cluster_opacity(data, cluster_col, &matrix)?,
        None => vec![1.0; matrix.pattern_count()],
    };

    let tiles = to_long(&selection, &opacity);
    let caption = (options.caption && selection.truncated()).then(|| {
        format!(
            "*Number of patterns shown: {} out of {}",
            selection.shown(),
            selection.total()
        )
    });

    let left = AxisLabels::new(LEFT_AXIS_TITLE, &selection.frequencies());
    let right = AxisLabels::new(RIGHT_AXIS_TITLE, &selection.na_row());
    let top = AxisLabels::new(TOP_AXIS_TITLE, matrix.variables());
    let bottom = AxisLabels::new(BOTTOM_AXIS_TITLE, matrix.na_col());
    let n_rows = selection.shown();
    let n_cols = matrix.variables().len();
    let total_missing = matrix.total_missing();

    Ok(PatternPlot {
        tiles,
        left,
        right,
        top,
        bottom,
        caption,
        square: options.square,
        rotate: options.rotate,
        n_rows,
        n_cols,
        total_missing,
        matrix,
    })
}
