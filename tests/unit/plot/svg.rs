//! Tests for SVG rendering and plot geometry

#[cfg(test)]
mod tests {
    use crate::sample_dataset;
    use mdpattern::io::theme::Theme;
    use mdpattern::plot::svg::{PlotGeometry, render_svg, write_svg};
    use mdpattern::{PatternPlot, PatternPlotOptions, plot_pattern};
    use tempfile::TempDir;

    fn plot_with(options: &PatternPlotOptions) -> PatternPlot {
        plot_pattern(&sample_dataset(), options).unwrap()
    }

    // Tests the document carries tiles, labels and titles
    // Verified by skipping label drawing
    #[test]
    fn test_render_contains_labels() {
        let plot = plot_with(&PatternPlotOptions::default());
        let document = render_svg(&plot, &Theme::default()).unwrap();

        assert!(document.contains("<svg"));
        assert!(document.contains("<rect"));
        assert!(document.contains("<text"));
        assert!(document.contains("Pattern frequency"));
        assert!(document.contains("Number of missing entries per column"));
        assert!(document.contains("Column name"));
        assert!(document.contains("observed"));
        assert!(document.contains("missing"));
        assert!(!document.contains("*Number of patterns shown"));
    }

    // Tests rotation changes the variable name rendering
    // Verified by ignoring the rotate flag
    #[test]
    fn test_rotated_labels_differ() {
        let theme = Theme::default();
        let plain = render_svg(&plot_with(&PatternPlotOptions::default()), &theme).unwrap();
        let rotated = render_svg(
            &plot_with(&PatternPlotOptions {
                rotate: true,
                ..PatternPlotOptions::default()
            }),
            &theme,
        )
        .unwrap();

        assert_ne!(plain, rotated);
    }

    // Tests the caption is drawn for truncated plots
    // Verified by dropping the caption from the legend
    #[test]
    fn test_caption_drawn() {
        let plot = plot_with(&PatternPlotOptions {
            npat: Some(2),
            ..PatternPlotOptions::default()
        });
        let document = render_svg(&plot, &Theme::default()).unwrap();
        assert!(document.contains("*Number of patterns shown: 2 out of 4"));
    }

    // Tests rectangular tiles are twice as wide as square ones
    // Verified by using the same width for both shapes
    #[test]
    fn test_geometry_tile_shape() {
        let theme = Theme::default();
        let square = PlotGeometry::new(&plot_with(&PatternPlotOptions::default()), &theme);
        let wide = PlotGeometry::new(
            &plot_with(&PatternPlotOptions {
                square: false,
                ..PatternPlotOptions::default()
            }),
            &theme,
        );

        assert_eq!(square.tile_w, square.tile_h);
        assert_eq!(wide.tile_w, 2 * wide.tile_h);
        assert!(wide.width > square.width);
        assert_eq!(wide.height, square.height);
    }

    // Tests tile bounds start at the grid origin and step by tile size
    // Verified by treating positions as zero-based
    #[test]
    fn test_tile_bounds() {
        let theme = Theme::default();
        let geometry = PlotGeometry::new(&plot_with(&PatternPlotOptions::default()), &theme);

        let [(left, top), (right, bottom)] = geometry.tile_bounds(1, 1);
        assert_eq!((left, top), (geometry.grid_left, geometry.grid_top));
        assert_eq!((right - left, bottom - top), (geometry.tile_w, geometry.tile_h));

        let [(left, top), _] = geometry.tile_bounds(3, 2);
        assert_eq!(left, geometry.grid_left + 2 * geometry.tile_w);
        assert_eq!(top, geometry.grid_top + geometry.tile_h);
        assert!(geometry.grid_left + 3 * geometry.tile_w < geometry.width as i32);
    }

    // Tests writing creates missing parent directories
    // Verified by removing directory creation
    #[test]
    fn test_write_svg() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("plot.svg");
        let plot = plot_with(&PatternPlotOptions::default());

        write_svg(&plot, &Theme::default(), &path).unwrap();

        let document = std::fs::read_to_string(&path).unwrap();
        assert!(document.starts_with("<svg"));
    }
}
