//! Plot theme loaded from an optional TOML file
//!
//! Every field is optional and falls back to the compiled defaults:
//!
//! ```toml
//! [theme]
//! observed = "#006CC2"
//! missing = "#B61A51"
//! alpha = 0.7
//! tile_px = 24
//! font_family = "sans-serif"
//! label_font_size = 12
//! ```

use crate::io::configuration::{
    FONT_FAMILY, LABEL_FONT_SIZE, MISSING_COLOR, OBSERVED_COLOR, PLOT_MARGIN, TILE_ALPHA, TILE_PX,
    TITLE_FONT_SIZE,
};
use crate::io::error::{PatternError, Result, file_system};
use serde::Deserialize;
use std::path::Path;

/// Resolved colours and sizes used by the renderers
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Fill colour for observed cells
    pub observed: [u8; 3],
    /// Fill colour for missing cells
    pub missing: [u8; 3],
    /// Base tile opacity
    pub alpha: f64,
    /// Tile edge length in pixels
    pub tile_px: u32,
    /// Font family for all text
    pub font_family: String,
    /// Tick label font size
    pub label_font_size: u32,
    /// Axis title and caption font size
    pub title_font_size: u32,
    /// Outer margin in pixels
    pub margin: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            observed: OBSERVED_COLOR,
            missing: MISSING_COLOR,
            alpha: TILE_ALPHA,
            tile_px: TILE_PX,
            font_family: FONT_FAMILY.to_string(),
            label_font_size: LABEL_FONT_SIZE,
            title_font_size: TITLE_FONT_SIZE,
            margin: PLOT_MARGIN,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    #[serde(default)]
    theme: ThemeSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeSection {
    observed: Option<String>,
    missing: Option<String>,
    alpha: Option<f64>,
    tile_px: Option<u32>,
    font_family: Option<String>,
    label_font_size: Option<u32>,
    title_font_size: Option<u32>,
    margin: Option<u32>,
}

impl Theme {
    /// Load a theme from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds invalid values
    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(file_system(path, "read"))?;
        Self::from_toml_str(&content).map_err(|error| match error {
            PatternError::ConfigParse { reason, .. } => PatternError::ConfigParse {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    /// Parse a theme from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The text is not valid TOML or has unknown keys
    /// - A colour is not of the form `#RRGGBB`
    /// - `alpha` lies outside `[0, 1]`
    /// - `tile_px` or a font size is zero
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(content).map_err(|error| config_error(error.message()))?;
        let section = file.theme;
        let defaults = Self::default();

        let observed = section
            .observed
            .as_deref()
            .map(parse_hex_color)
            .transpose()?
            .unwrap_or(defaults.observed);
        let missing = section
            .missing
            .as_deref()
            .map(parse_hex_color)
            .transpose()?
            .unwrap_or(defaults.missing);

        let alpha = section.alpha.unwrap_or(defaults.alpha);
        if !(0.0..=1.0).contains(&alpha) {
            return Err(config_error(format!("alpha {alpha} must lie between 0 and 1")));
        }

        let tile_px = non_zero("tile_px", section.tile_px.unwrap_or(defaults.tile_px))?;
        let label_font_size = non_zero(
            "label_font_size",
            section.label_font_size.unwrap_or(defaults.label_font_size),
        )?;
        let title_font_size = non_zero(
            "title_font_size",
            section.title_font_size.unwrap_or(defaults.title_font_size),
        )?;

        Ok(Self {
            observed,
            missing,
            alpha,
            tile_px,
            font_family: section.font_family.unwrap_or(defaults.font_family),
            label_font_size,
            title_font_size,
            margin: section.margin.unwrap_or(defaults.margin),
        })
    }
}

/// Parse a `#RRGGBB` colour
///
/// # Errors
///
/// Returns a configuration error if the text is not a six digit hex colour
pub fn parse_hex_color(text: &str) -> Result<[u8; 3]> {
    let digits = text.trim().strip_prefix('#').unwrap_or(text.trim());
    if digits.len() != 6 || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(config_error(format!("colour '{text}' must be of the form #RRGGBB")));
    }

    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| config_error(format!("colour '{text}' must be of the form #RRGGBB")))
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

fn non_zero(field: &str, value: u32) -> Result<u32> {
    if value == 0 {
        Err(config_error(format!("{field} must be greater than zero")))
    } else {
        Ok(value)
    }
}

fn config_error(reason: impl ToString) -> PatternError {
    PatternError::ConfigParse {
        path: "<inline>".into(),
        reason: reason.to_string(),
    }
}
