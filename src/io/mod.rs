//! Input/output operations, configuration, and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Compile-time defaults and plot constants
pub mod configuration;
/// CSV loading into a rectangular dataset
pub mod dataset;
/// Error types and helpers
pub mod error;
/// PNG export of the tile grid
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Terminal progress display
pub mod progress;
/// Text and JSON pattern summaries
pub mod summary;
/// TOML theme configuration
pub mod theme;
