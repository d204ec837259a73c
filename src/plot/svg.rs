//! SVG rendering of pattern plots through `plotters`
//!
//! The grid is drawn directly in pixel coordinates: tiles in the middle,
//! frequencies on the left, per-pattern missing counts on the right, variable
//! names on top and per-variable missing counts below, followed by a legend and
//! the optional caption.

use crate::io::configuration::RECTANGULAR_ASPECT;
use crate::io::error::{Result, file_system, render_error};
use crate::io::theme::Theme;
use crate::plot::builder::PatternPlot;
use crate::plot::long::Where;
use plotters::coord::Shift;
use plotters::prelude::{
    BLACK, Color, DrawingArea, IntoDrawingArea, IntoFont, RGBColor, Rectangle, SVGBackend, Text,
    TextStyle, WHITE,
};
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

// Approximate glyph advance relative to the font size
const GLYPH_WIDTH_RATIO: f64 = 0.6;
const GAP: i32 = 6;

/// Pixel layout of a rendered plot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotGeometry {
    /// Total image width
    pub width: u32,
    /// Total image height
    pub height: u32,
    /// Left edge of the tile grid
    pub grid_left: i32,
    /// Top edge of the tile grid
    pub grid_top: i32,
    /// Tile width
    pub tile_w: i32,
    /// Tile height
    pub tile_h: i32,
    label_h: i32,
    title_h: i32,
    left_label_w: i32,
    right_label_w: i32,
    top_label_h: i32,
}

impl PlotGeometry {
    /// Compute the layout of a plot for a theme
    pub fn new(plot: &PatternPlot, theme: &Theme) -> Self {
        let tile_h = theme.tile_px as i32;
        let tile_w = if plot.square {
            tile_h
        } else {
            tile_h * RECTANGULAR_ASPECT as i32
        };

        let label_h = theme.label_font_size as i32;
        let title_h = theme.title_font_size as i32;
        let text_w = |labels: &[String]| {
            let longest = labels.iter().map(|label| label.chars().count()).max().unwrap_or(0);
            (longest as f64 * f64::from(theme.label_font_size) * GLYPH_WIDTH_RATIO).ceil() as i32
        };

        let left_label_w = text_w(&plot.left.labels);
        let total = [plot.total_missing.to_string()];
        let right_label_w = text_w(&plot.right.labels).max(text_w(&total));
        let top_label_h = if plot.rotate {
            text_w(&plot.top.labels)
        } else {
            label_h
        };

        let margin = theme.margin as i32;
        let grid_left = margin + title_h + GAP + left_label_w + GAP;
        let grid_top = margin + title_h + GAP + top_label_h + GAP;
        let grid_w = plot.n_cols as i32 * tile_w;
        let grid_h = plot.n_rows as i32 * tile_h;

        let caption_h = if plot.caption.is_some() { GAP + title_h } else { 0 };
        let width = grid_left + grid_w + GAP + right_label_w + GAP + title_h + margin;
        let height = grid_top
            + grid_h
            + GAP
            + label_h
            + GAP
            + title_h
            + GAP
            + label_h
            + caption_h
            + margin;

        Self {
            width: width.max(1) as u32,
            height: height.max(1) as u32,
            grid_left,
            grid_top,
            tile_w,
            tile_h,
            label_h,
            title_h,
            left_label_w,
            right_label_w,
            top_label_h,
        }
    }

    /// Pixel bounds of the tile at 1-based grid position `(x, y)`
    pub const fn tile_bounds(&self, x: usize, y: usize) -> [(i32, i32); 2] {
        let left = self.grid_left + (x as i32 - 1) * self.tile_w;
        let top = self.grid_top + (y as i32 - 1) * self.tile_h;
        [(left, top), (left + self.tile_w, top + self.tile_h)]
    }

    const fn grid_right(&self, n_cols: usize) -> i32 {
        self.grid_left + n_cols as i32 * self.tile_w
    }

    const fn grid_bottom(&self, n_rows: usize) -> i32 {
        self.grid_top + n_rows as i32 * self.tile_h
    }
}

/// Render a pattern plot as an SVG document
///
/// # Errors
///
/// Returns an error if the drawing backend rejects an element
pub fn render_svg(plot: &PatternPlot, theme: &Theme) -> Result<String> {
    let geometry = PlotGeometry::new(plot, theme);
    let mut buffer = String::new();
    {
        let root =
            SVGBackend::with_string(&mut buffer, (geometry.width, geometry.height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| render_error(&e))?;

        draw_tiles(&root, plot, theme, &geometry)?;
        draw_labels(&root, plot, theme, &geometry)?;
        draw_legend(&root, plot, theme, &geometry)?;

        root.present().map_err(|e| render_error(&e))?;
    }
    Ok(buffer)
}

/// Render a pattern plot and write it to an SVG file
///
/// # Errors
///
/// Returns an error if rendering fails, the parent directory cannot be
/// created, or the file cannot be written
pub fn write_svg<P: AsRef<Path>>(plot: &PatternPlot, theme: &Theme, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let document = render_svg(plot, theme)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(file_system(parent, "create directory"))?;
    }
    std::fs::write(output_path, document).map_err(file_system(output_path, "write"))?;

    Ok(())
}

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

fn fill_color(theme: &Theme, where_: Where) -> RGBColor {
    let [r, g, b] = match where_ {
        Where::Observed => theme.observed,
        Where::Missing => theme.missing,
    };
    RGBColor(r, g, b)
}

fn draw_tiles(root: &Area<'_>, plot: &PatternPlot, theme: &Theme, geometry: &PlotGeometry) -> Result<()> {
    for tile in &plot.tiles {
        let [(left, top), (right, bottom)] = geometry.tile_bounds(tile.x, tile.y);
        let color = fill_color(theme, tile.where_).mix(theme.alpha * tile.opacity);
        root.draw(&Rectangle::new([(left, top), (right, bottom)], color.filled()))
            .map_err(|e| render_error(&e))?;
        root.draw(&Rectangle::new([(left, top), (right, bottom)], WHITE.stroke_width(1)))
            .map_err(|e| render_error(&e))?;
    }
    Ok(())
}

fn text_style<'a>(theme: &'a Theme, size: u32, pos: Pos) -> TextStyle<'a> {
    (theme.font_family.as_str(), f64::from(size))
        .into_font()
        .color(&BLACK)
        .pos(pos)
}

fn rotated_style<'a>(theme: &'a Theme, size: u32, pos: Pos) -> TextStyle<'a> {
    (theme.font_family.as_str(), f64::from(size))
        .into_font()
        .transform(FontTransform::Rotate270)
        .color(&BLACK)
        .pos(pos)
}

fn draw_text(root: &Area<'_>, text: &str, at: (i32, i32), style: &TextStyle<'_>) -> Result<()> {
    root.draw(&Text::new(text, at, style.clone()))
        .map_err(|e| render_error(&e))
}

fn draw_labels(root: &Area<'_>, plot: &PatternPlot, theme: &Theme, geometry: &PlotGeometry) -> Result<()> {
    let grid_right = geometry.grid_right(plot.n_cols);
    let grid_bottom = geometry.grid_bottom(plot.n_rows);
    let grid_mid_x = (geometry.grid_left + grid_right) / 2;
    let grid_mid_y = (geometry.grid_top + grid_bottom) / 2;
    let row_mid = |y: usize| geometry.grid_top + (y as i32 - 1) * geometry.tile_h + geometry.tile_h / 2;
    let col_mid = |x: usize| geometry.grid_left + (x as i32 - 1) * geometry.tile_w + geometry.tile_w / 2;

    let right_aligned = text_style(theme, theme.label_font_size, Pos::new(HPos::Right, VPos::Center));
    let left_aligned = text_style(theme, theme.label_font_size, Pos::new(HPos::Left, VPos::Center));
    let centered = text_style(theme, theme.label_font_size, Pos::new(HPos::Center, VPos::Center));

    for (index, label) in plot.left.labels.iter().enumerate() {
        draw_text(root, label, (geometry.grid_left - GAP, row_mid(index + 1)), &right_aligned)?;
    }
    for (index, label) in plot.right.labels.iter().enumerate() {
        draw_text(root, label, (grid_right + GAP, row_mid(index + 1)), &left_aligned)?;
    }

    let top_baseline = geometry.grid_top - GAP;
    if plot.rotate {
        let rotated = rotated_style(theme, theme.label_font_size, Pos::new(HPos::Left, VPos::Center));
        for (index, label) in plot.top.labels.iter().enumerate() {
            draw_text(root, label, (col_mid(index + 1), top_baseline), &rotated)?;
        }
    } else {
        let above = text_style(theme, theme.label_font_size, Pos::new(HPos::Center, VPos::Bottom));
        for (index, label) in plot.top.labels.iter().enumerate() {
            draw_text(root, label, (col_mid(index + 1), top_baseline), &above)?;
        }
    }

    let bottom_mid = grid_bottom + GAP + geometry.label_h / 2;
    for (index, label) in plot.bottom.labels.iter().enumerate() {
        draw_text(root, label, (col_mid(index + 1), bottom_mid), &centered)?;
    }
    draw_text(
        root,
        &plot.total_missing.to_string(),
        (grid_right + GAP, bottom_mid),
        &left_aligned,
    )?;

    let title = text_style(theme, theme.title_font_size, Pos::new(HPos::Center, VPos::Center));
    let vertical_title = rotated_style(theme, theme.title_font_size, Pos::new(HPos::Center, VPos::Center));

    let top_title_y = geometry.grid_top - GAP - geometry.top_label_h - GAP - geometry.title_h / 2;
    draw_text(root, plot.top.title, (grid_mid_x, top_title_y), &title)?;

    let bottom_title_y = bottom_mid + geometry.label_h / 2 + GAP + geometry.title_h / 2;
    draw_text(root, plot.bottom.title, (grid_mid_x, bottom_title_y), &title)?;

    let left_title_x = geometry.grid_left - GAP - geometry.left_label_w - GAP - geometry.title_h / 2;
    draw_text(root, plot.left.title, (left_title_x, grid_mid_y), &vertical_title)?;

    let right_title_x = grid_right + GAP + geometry.right_label_w + GAP + geometry.title_h / 2;
    draw_text(root, plot.right.title, (right_title_x, grid_mid_y), &vertical_title)?;

    Ok(())
}

fn draw_legend(root: &Area<'_>, plot: &PatternPlot, theme: &Theme, geometry: &PlotGeometry) -> Result<()> {
    let grid_bottom = geometry.grid_bottom(plot.n_rows);
    let legend_top = grid_bottom + GAP + geometry.label_h + GAP + geometry.title_h + GAP;
    let swatch = geometry.label_h;
    let label_style = text_style(theme, theme.label_font_size, Pos::new(HPos::Left, VPos::Center));

    let mut x = geometry.grid_left;
    for where_ in [Where::Observed, Where::Missing] {
        let color = fill_color(theme, where_).mix(theme.alpha);
        root.draw(&Rectangle::new(
            [(x, legend_top), (x + swatch, legend_top + swatch)],
            color.filled(),
        ))
        .map_err(|e| render_error(&e))?;

        let label = where_.to_string();
        draw_text(root, &label, (x + swatch + GAP / 2, legend_top + swatch / 2), &label_style)?;
        x += swatch + GAP + (label.chars().count() as f64 * f64::from(theme.label_font_size) * GLYPH_WIDTH_RATIO).ceil() as i32 + 2 * GAP;
    }

    if let Some(caption) = &plot.caption {
        let caption_style = text_style(theme, theme.title_font_size, Pos::new(HPos::Right, VPos::Top));
        let right_edge = geometry.width as i32 - theme.margin as i32;
        draw_text(root, caption, (right_edge, legend_top + swatch + GAP), &caption_style)?;
    }

    Ok(())
}
