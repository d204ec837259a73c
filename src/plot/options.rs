//! Plot arguments and their validation against a dataset

use crate::io::configuration::{MIN_PATTERNS, MIN_VARIABLES, RESERVED_NAMES};
use crate::io::dataset::Dataset;
use crate::io::error::{PatternError, Result, invalid_source};

/// Which dataset columns take part in pattern detection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VariableSelection {
    /// Every column of the dataset
    #[default]
    All,
    /// Named columns, in the given order
    Named(Vec<String>),
}

impl VariableSelection {
    /// Parse a comma separated list, where `all` or an empty list selects everything
    pub fn parse_list(list: &str) -> Self {
        let names: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToString::to_string)
            .collect();

        if names.is_empty() || names.iter().all(|name| name == "all") {
            Self::All
        } else {
            Self::Named(names)
        }
    }
}

/// Arguments for building a missing data pattern plot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternPlotOptions {
    /// Variables to include
    pub vrb: VariableSelection,
    /// Draw square tiles
    pub square: bool,
    /// Rotate variable names on the top axis
    pub rotate: bool,
    /// Variable whose values split rows into clusters for opacity weighting
    pub cluster: Option<String>,
    /// Maximum number of patterns to display
    pub npat: Option<usize>,
    /// Add a caption when patterns are hidden
    pub caption: bool,
}

impl Default for PatternPlotOptions {
    fn default() -> Self {
        Self {
            vrb: VariableSelection::All,
            square: true,
            rotate: false,
            cluster: None,
            npat: None,
            caption: true,
        }
    }
}

/// Options checked against a dataset, with names resolved to column indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Selected dataset columns in selection order
    pub columns: Vec<usize>,
    /// Dataset column of the cluster variable
    pub cluster: Option<usize>,
    /// Pattern limit, at least one when present
    pub npat: Option<usize>,
}

impl PatternPlotOptions {
    /// Validate the options against a dataset
    ///
    /// A pattern limit of zero is raised to one with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The dataset has no rows
    /// - A selected variable does not exist
    /// - A selected variable uses a reserved name
    /// - The cluster variable is not among the selected variables
    /// - Fewer than two variables are selected
    pub fn validate(&self, data: &Dataset) -> Result<ResolvedOptions> {
        if data.row_count() == 0 {
            return Err(invalid_source(&"dataset has no rows"));
        }

        let columns = self.resolve_columns(data)?;

        if let Some(&reserved) = columns.iter().find(|&&col| {
            data.columns()
                .get(col)
                .is_some_and(|name| RESERVED_NAMES.contains(&name.as_str()))
        }) {
            return Err(PatternError::ReservedName {
                name: data.columns().get(reserved).cloned().unwrap_or_default(),
            });
        }

        let cluster = match &self.cluster {
            Some(name) => {
                let col = data
                    .column_index(name)
                    .filter(|col| columns.contains(col))
                    .ok_or_else(|| PatternError::UnknownCluster { name: name.clone() })?;
                Some(col)
            }
            None => None,
        };

        if columns.len() < MIN_VARIABLES {
            return Err(PatternError::InvalidVariableCount {
                count: columns.len(),
            });
        }

        let npat = self.npat.map(|npat| {
            if npat < MIN_PATTERNS {
                tracing::warn!(npat, "The minimum number of patterns to display is one.");
                MIN_PATTERNS
            } else {
                npat
            }
        });

        Ok(ResolvedOptions {
            columns,
            cluster,
            npat,
        })
    }

    fn resolve_columns(&self, data: &Dataset) -> Result<Vec<usize>> {
        match &self.vrb {
            VariableSelection::All => Ok((0..data.column_count()).collect()),
            VariableSelection::Named(names) => {
                let mut columns: Vec<usize> = Vec::with_capacity(names.len());
                for name in names {
                    let col = data
                        .column_index(name)
                        .ok_or_else(|| PatternError::UnknownVariable { name: name.clone() })?;
                    if !columns.contains(&col) {
                        columns.push(col);
                    }
                }
                Ok(columns)
            }
        }
    }
}
