//! PNG export of the tile grid with alpha blending over a white background

use crate::io::configuration::RECTANGULAR_ASPECT;
use crate::io::error::{PatternError, Result, file_system, invalid_parameter, invalid_source};
use crate::io::theme::Theme;
use crate::plot::builder::PatternPlot;
use crate::plot::long::Where;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

const BACKGROUND: [u8; 4] = [255, 255, 255, 255];

// Pixel length of `count` tiles
fn grid_extent(count: usize, tile: u32) -> Option<u32> {
    u32::try_from(count).ok()?.checked_mul(tile)
}

// Tile width and raster size, `None` when the RGBA buffer would not fit in memory
fn raster_dimensions(plot: &PatternPlot, tile_h: u32) -> Option<(u32, u32, u32)> {
    let tile_w = if plot.square {
        tile_h
    } else {
        tile_h.checked_mul(RECTANGULAR_ASPECT)?
    };
    let width = grid_extent(plot.n_cols, tile_w)?;
    let height = grid_extent(plot.n_rows, tile_h)?;
    let bytes = u64::from(width)
        .checked_mul(u64::from(height))?
        .checked_mul(4)?;
    usize::try_from(bytes).ok()?;
    Some((tile_w, width, height))
}

// Blends a colour channel over white
fn blend(channel: u8, alpha: f64) -> u8 {
    let alpha = alpha.clamp(0.0, 1.0);
    (f64::from(channel) * alpha + 255.0 * (1.0 - alpha)).round() as u8
}

/// Rasterise the tiles of a plot without any text
///
/// Each tile covers `tile_px` pixels vertically (twice that horizontally for
/// rectangular plots). A one pixel white border separates neighbouring tiles.
///
/// # Errors
///
/// Returns an error if:
/// - The plot has no tiles
/// - The tile grid is too large for a raster image
pub fn render_tiles(plot: &PatternPlot, theme: &Theme) -> Result<RgbaImage> {
    if plot.tiles.is_empty() {
        return Err(invalid_source(&"plot has no tiles to render"));
    }

    let tile_h = theme.tile_px;
    let Some((tile_w, width, height)) = raster_dimensions(plot, tile_h) else {
        return Err(invalid_parameter(
            "tile_px",
            &tile_h,
            &format!(
                "a {} x {} tile grid does not fit in a raster image",
                plot.n_cols, plot.n_rows
            ),
        ));
    };

    let mut img: RgbaImage = ImageBuffer::from_pixel(width, height, Rgba(BACKGROUND));

    for tile in &plot.tiles {
        let [r, g, b] = match tile.where_ {
            Where::Observed => theme.observed,
            Where::Missing => theme.missing,
        };
        let alpha = theme.alpha * tile.opacity;
        let color = Rgba([blend(r, alpha), blend(g, alpha), blend(b, alpha), 255]);

        let left = (tile.x as u32).saturating_sub(1) * tile_w;
        let top = (tile.y as u32).saturating_sub(1) * tile_h;

        // Last row and column of every tile stay white as the grid line
        for dy in 0..tile_h.saturating_sub(1) {
            for dx in 0..tile_w.saturating_sub(1) {
                let (px, py) = (left + dx, top + dy);
                if px < width && py < height {
                    img.put_pixel(px, py, color);
                }
            }
        }
    }

    Ok(img)
}

/// Export the tile grid of a plot as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The plot has no tiles
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_plot_as_png<P: AsRef<Path>>(plot: &PatternPlot, theme: &Theme, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let img = render_tiles(plot, theme)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(file_system(parent, "create directory"))?;
    }

    img.save(output_path)
        .map_err(|e| PatternError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
