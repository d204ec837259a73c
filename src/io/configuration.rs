//! Plot constants and runtime configuration defaults

// Column names used for plot coordinates in the long-form table
/// Names that may not be used by selected data columns
pub const RESERVED_NAMES: [&str; 2] = [".x", ".y"];

/// Minimum number of variables needed to form a pattern
pub const MIN_VARIABLES: usize = 2;

/// Minimum number of patterns that can be displayed
pub const MIN_PATTERNS: usize = 1;

// Fill colours follow the conventional blue/red missing data palette
/// Fill colour for observed cells
pub const OBSERVED_COLOR: [u8; 3] = [0x00, 0x6C, 0xC2];
/// Fill colour for missing cells
pub const MISSING_COLOR: [u8; 3] = [0xB6, 0x1A, 0x51];
/// Base opacity applied to every tile before cluster weighting
pub const TILE_ALPHA: f64 = 0.7;

/// Edge length of a tile in pixels
pub const TILE_PX: u32 = 24;
/// Width multiplier applied to tiles when square tiles are disabled
pub const RECTANGULAR_ASPECT: u32 = 2;
/// Font family used for all plot text
pub const FONT_FAMILY: &str = "sans-serif";
/// Font size for tick labels
pub const LABEL_FONT_SIZE: u32 = 12;
/// Font size for axis titles and caption
pub const TITLE_FONT_SIZE: u32 = 13;
/// Outer margin around the plot in pixels
pub const PLOT_MARGIN: u32 = 16;

/// Axis title for pattern frequencies
pub const LEFT_AXIS_TITLE: &str = "Pattern frequency";
/// Axis title for missing entries per pattern
pub const RIGHT_AXIS_TITLE: &str = "Number of missing entries per pattern";
/// Axis title for variable names
pub const TOP_AXIS_TITLE: &str = "Column name";
/// Axis title for missing entries per column
pub const BOTTOM_AXIS_TITLE: &str = "Number of missing entries per column";

/// Cell values treated as missing unless overridden
pub const DEFAULT_NA_TOKENS: [&str; 2] = ["", "NA"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_pattern";
/// Extension of accepted input files
pub const INPUT_EXTENSION: &str = "csv";
