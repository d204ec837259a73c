//! Command-line interface for batch plotting of missing data patterns in CSV files

use crate::io::configuration::{DEFAULT_NA_TOKENS, INPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::dataset::Dataset;
use crate::io::error::{Result, invalid_parameter, parse_pattern_count};
use crate::io::image::export_plot_as_png;
use crate::io::progress::{ProgressManager, Stage};
use crate::io::summary::write_json;
use crate::io::theme::Theme;
use crate::plot::builder::plot_pattern;
use crate::plot::options::{PatternPlotOptions, VariableSelection};
use crate::plot::svg::write_svg;
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Image formats the tool can write
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labelled vector plot
    Svg,
    /// Tile raster without text
    Png,
    /// Both SVG and PNG
    Both,
}

impl OutputFormat {
    /// Test whether SVG output is requested
    pub const fn wants_svg(self) -> bool {
        matches!(self, Self::Svg | Self::Both)
    }

    /// Test whether PNG output is requested
    pub const fn wants_png(self) -> bool {
        matches!(self, Self::Png | Self::Both)
    }
}

fn pattern_count(value: &str) -> std::result::Result<usize, String> {
    parse_pattern_count(value).map_err(|error| error.to_string())
}

#[derive(Parser, Debug)]
#[command(name = "mdpattern")]
#[command(
    author,
    version,
    about = "Plot missing data patterns of CSV datasets"
)]
/// Command-line arguments for the pattern plot tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input CSV file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Comma separated variables to include (default: all)
    #[arg(long, value_name = "NAMES")]
    pub vrb: Option<String>,

    /// Variable whose values define clusters for tile opacity
    #[arg(short, long, value_name = "NAME")]
    pub cluster: Option<String>,

    /// Show only the N most frequent patterns
    #[arg(long, value_name = "N", value_parser = pattern_count)]
    pub npat: Option<usize>,

    /// Draw rectangular instead of square tiles
    #[arg(long)]
    pub rectangular: bool,

    /// Rotate variable names by 90 degrees
    #[arg(short, long)]
    pub rotate: bool,

    /// Omit the caption about hidden patterns
    #[arg(long)]
    pub no_caption: bool,

    /// Output image format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Cell value treated as missing (repeatable, default: empty and NA)
    #[arg(long = "na", value_name = "TOKEN")]
    pub na_tokens: Vec<String>,

    /// Also write the pattern matrix as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Print the pattern matrix table to stdout
    #[arg(short, long)]
    pub summary: bool,

    /// Theme configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Cell values treated as missing
    pub fn na_tokens(&self) -> Vec<String> {
        if self.na_tokens.is_empty() {
            DEFAULT_NA_TOKENS.iter().map(ToString::to_string).collect()
        } else {
            self.na_tokens.clone()
        }
    }

    /// Plot options described by the arguments
    pub fn plot_options(&self) -> PatternPlotOptions {
        PatternPlotOptions {
            vrb: self
                .vrb
                .as_deref()
                .map_or(VariableSelection::All, VariableSelection::parse_list),
            square: !self.rectangular,
            rotate: self.rotate,
            cluster: self.cluster.clone(),
            npat: self.npat,
            caption: !self.no_caption,
        }
    }
}

/// Orchestrates batch processing of CSV files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    theme: Theme,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the theme configuration cannot be loaded
    pub fn new(cli: Cli) -> Result<Self> {
        let theme = match &cli.config {
            Some(path) => Theme::from_toml_path(path)?,
            None => Theme::default(),
        };
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            theme,
            progress_manager,
        })
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            tracing::info!("nothing to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if has_input_extension(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"Target file must be a CSV file",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if has_input_extension(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"Target must be a CSV file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let existing = self
            .expected_outputs(input_path)
            .into_iter()
            .find(|path| path.exists());
        match existing {
            Some(output) => {
                tracing::warn!(
                    input = %input_path.display(),
                    output = %output.display(),
                    "skipping file, output exists"
                );
                false
            }
            None => true,
        }
    }

    fn expected_outputs(&self, input_path: &Path) -> Vec<PathBuf> {
        let mut outputs = Vec::new();
        if self.cli.format.wants_svg() {
            outputs.push(output_path(input_path, "svg"));
        }
        if self.cli.format.wants_png() {
            outputs.push(output_path(input_path, "png"));
        }
        if self.cli.json {
            outputs.push(output_path(input_path, "json"));
        }
        outputs
    }

    fn set_stage(&mut self, index: usize, stage: Stage) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.update_stage(index, stage);
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let data = Dataset::from_csv_path(input_path, &self.cli.na_tokens())?;
        tracing::debug!(
            rows = data.row_count(),
            columns = data.column_count(),
            "loaded {}",
            input_path.display()
        );

        self.set_stage(index, Stage::Detecting);
        let plot = plot_pattern(&data, &self.cli.plot_options())?;

        self.set_stage(index, Stage::Rendering);
        if self.cli.format.wants_svg() {
            write_svg(&plot, &self.theme, output_path(input_path, "svg"))?;
        }
        if self.cli.format.wants_png() {
            export_plot_as_png(&plot, &self.theme, output_path(input_path, "png"))?;
        }
        if self.cli.json {
            write_json(&plot.matrix, output_path(input_path, "json"))?;
        }
        if self.cli.summary {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", input_path.display())?;
            write!(stdout, "{}", plot.matrix)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        tracing::info!(
            patterns = plot.matrix.pattern_count(),
            shown = plot.n_rows,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "plotted {}",
            input_path.display()
        );

        Ok(())
    }
}

fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION))
}

/// Output file path for an input and extension, `<stem>_pattern.<ext>` next to the input
pub fn output_path(input_path: &Path, extension: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}
