//! CLI entry point for missing data pattern plots

use clap::Parser;
use mdpattern::io::cli::{Cli, FileProcessor};
use mdpattern::io::logging::init_logging;

fn main() -> mdpattern::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let mut processor = FileProcessor::new(cli)?;
    processor.process()
}
