//! Error types and helpers for pattern detection and plot construction

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pattern plot operations
#[derive(Debug)]
pub enum PatternError {
    /// Fewer than two variables were selected
    InvalidVariableCount {
        /// Number of variables that were selected
        count: usize,
    },

    /// A selected data column uses a name reserved for plot coordinates
    ReservedName {
        /// The offending column name
        name: String,
    },

    /// The cluster variable is not among the selected variables
    UnknownCluster {
        /// Cluster name as provided by the caller
        name: String,
    },

    /// Requested number of patterns could not be interpreted
    InvalidPatternCount {
        /// Raw value that failed to parse
        value: String,
    },

    /// A requested variable does not exist in the dataset
    UnknownVariable {
        /// Variable name as provided by the caller
        name: String,
    },

    /// Source data doesn't meet pattern detection requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to read tabular input
    CsvRead {
        /// Path to the input file
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// Theme configuration could not be parsed
    ConfigParse {
        /// Path to the configuration file
        path: PathBuf,
        /// Description of the parse failure
        reason: String,
    },

    /// Plot backend failed while drawing
    Render {
        /// Description of the drawing failure
        reason: String,
    },

    /// Failed to save a raster image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// JSON serialization of a pattern summary failed
    Serialization {
        /// Underlying serializer error
        source: serde_json::Error,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVariableCount { .. } => {
                write!(
                    f,
                    "The number of variables should be two or more to compute missing data patterns."
                )
            }
            Self::ReservedName { .. } => {
                write!(
                    f,
                    "The variable names '.x' and '.y' are used internally to produce the missing data pattern plot. \
                     Please exclude or rename your variable(s)."
                )
            }
            Self::UnknownCluster { .. } => {
                write!(
                    f,
                    "Cluster variable not recognized, please provide the variable name as a character string."
                )
            }
            Self::InvalidPatternCount { value } => {
                write!(
                    f,
                    "Invalid number of patterns '{value}': the minimum number of patterns to display is one"
                )
            }
            Self::UnknownVariable { name } => {
                write!(f, "Variable '{name}' not found in the dataset")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CsvRead { path, source } => {
                write!(f, "Failed to read CSV '{}': {source}", path.display())
            }
            Self::ConfigParse { path, reason } => {
                write!(
                    f,
                    "Failed to parse configuration '{}': {reason}",
                    path.display()
                )
            }
            Self::Render { reason } => {
                write!(f, "Failed to render plot: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { source } => {
                write!(f, "Failed to serialize pattern summary: {source}")
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CsvRead { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pattern plot results
pub type Result<T> = std::result::Result<T, PatternError>;

impl From<image::ImageError> for PatternError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<csv::Error> for PatternError {
    fn from(err: csv::Error) -> Self {
        Self::CsvRead {
            path: PathBuf::from("<reader>"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for PatternError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source(reason: &impl ToString) -> PatternError {
    PatternError::InvalidSourceData {
        reason: reason.to_string(),
    }
}

/// Create a render error from any displayable backend failure
pub fn render_error(err: &impl ToString) -> PatternError {
    PatternError::Render {
        reason: err.to_string(),
    }
}

/// Attach a path and operation name to an I/O failure
pub fn file_system(path: impl Into<PathBuf>, operation: &'static str) -> impl FnOnce(std::io::Error) -> PatternError {
    let path = path.into();
    move |source| PatternError::FileSystem {
        path,
        operation,
        source,
    }
}

/// Parse a pattern count given as text
///
/// # Errors
///
/// Returns `InvalidPatternCount` if the value is not a non-negative integer
pub fn parse_pattern_count(value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_parse_error| PatternError::InvalidPatternCount {
            value: value.to_string(),
        })
}
