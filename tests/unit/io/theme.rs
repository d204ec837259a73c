//! Tests for TOML theme parsing and colour validation

#[cfg(test)]
mod tests {
    use mdpattern::PatternError;
    use mdpattern::io::configuration::{OBSERVED_COLOR, TILE_ALPHA, TILE_PX};
    use mdpattern::io::theme::{Theme, parse_hex_color};
    use tempfile::TempDir;

    // Tests an empty document yields the defaults
    // Verified by changing a default in the parser
    #[test]
    fn test_empty_config_uses_defaults() {
        let theme = Theme::from_toml_str("").unwrap();
        assert_eq!(theme, Theme::default());
        assert_eq!(theme.observed, OBSERVED_COLOR);
        assert!((theme.alpha - TILE_ALPHA).abs() < f64::EPSILON);
        assert_eq!(theme.tile_px, TILE_PX);
    }

    // Tests overriding individual fields
    // Verified by ignoring the missing colour field
    #[test]
    fn test_overrides() {
        let theme = Theme::from_toml_str(
            "[theme]\nmissing = \"#FF0000\"\nalpha = 0.5\ntile_px = 10\nfont_family = \"serif\"\n",
        )
        .unwrap();

        assert_eq!(theme.missing, [255, 0, 0]);
        assert_eq!(theme.observed, OBSERVED_COLOR);
        assert!((theme.alpha - 0.5).abs() < f64::EPSILON);
        assert_eq!(theme.tile_px, 10);
        assert_eq!(theme.font_family, "serif");
    }

    // Tests invalid values are rejected
    // Verified by removing the alpha range check
    #[test]
    fn test_invalid_values() {
        for content in [
            "[theme]\nalpha = 1.5\n",
            "[theme]\ntile_px = 0\n",
            "[theme]\nobserved = \"blue\"\n",
            "[theme]\nunknown = 1\n",
            "not toml at all [",
        ] {
            let result = Theme::from_toml_str(content);
            assert!(
                matches!(result, Err(PatternError::ConfigParse { .. })),
                "expected config error for {content:?}"
            );
        }
    }

    // Tests hex colour parsing with and without a leading hash
    // Verified by parsing channels in reverse order
    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#006CC2").unwrap(), [0x00, 0x6C, 0xC2]);
        assert_eq!(parse_hex_color("b61a51").unwrap(), [0xB6, 0x1A, 0x51]);
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#GGGGGG").is_err());
    }

    // Tests loading from disk and missing files
    // Verified by reading from the wrong path
    #[test]
    fn test_from_toml_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.toml");
        std::fs::write(&path, "[theme]\nmargin = 4\n").unwrap();

        let theme = Theme::from_toml_path(&path).unwrap();
        assert_eq!(theme.margin, 4);

        let missing = Theme::from_toml_path(dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(PatternError::FileSystem { .. })));
    }
}
