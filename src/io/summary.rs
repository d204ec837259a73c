//! Text table and JSON summaries of detected patterns

use crate::analysis::patterns::PatternMatrix;
use crate::io::error::{Result, file_system};
use std::fmt;
use std::path::Path;

impl fmt::Display for PatternMatrix {
    /// Formats the matrix the way missingness tables are usually printed
    ///
    /// The header lists the variables. Each pattern row starts with its
    /// frequency and ends with its number of missing variables. The last row
    /// holds the per-variable missing counts and the total.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let freq_width = self
            .frequencies()
            .iter()
            .map(|freq| freq.to_string().len())
            .max()
            .unwrap_or(0);
        let widths: Vec<usize> = self
            .variables()
            .iter()
            .zip(self.na_col())
            .map(|(name, na)| name.chars().count().max(na.to_string().len()))
            .collect();

        write!(f, "{:freq_width$}", "")?;
        for (name, &width) in self.variables().iter().zip(&widths) {
            write!(f, " {name:>width$}")?;
        }
        writeln!(f)?;

        for (pattern, (freq, na_row)) in self.frequencies().iter().zip(self.na_row()).enumerate() {
            write!(f, "{freq:>freq_width$}")?;
            for (variable, &width) in widths.iter().enumerate() {
                write!(f, " {:>width$}", u8::from(self.observed(pattern, variable)))?;
            }
            writeln!(f, " {na_row}")?;
        }

        write!(f, "{:freq_width$}", "")?;
        for (na, &width) in self.na_col().iter().zip(&widths) {
            write!(f, " {na:>width$}")?;
        }
        writeln!(f, " {}", self.total_missing())
    }
}

/// Serialize a pattern matrix as pretty JSON
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn to_json(matrix: &PatternMatrix) -> Result<String> {
    Ok(serde_json::to_string_pretty(matrix)?)
}

/// Write a pattern matrix to a JSON file
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written
pub fn write_json<P: AsRef<Path>>(matrix: &PatternMatrix, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let document = to_json(matrix)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(file_system(parent, "create directory"))?;
    }
    std::fs::write(output_path, document).map_err(file_system(output_path, "write"))?;

    Ok(())
}
