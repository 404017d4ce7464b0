//! Tests for PNG rendering and export of pattern scans

#[cfg(test)]
mod tests {
    use image::Rgb;
    use tilejigsaw::PuzzleError;
    use tilejigsaw::analysis::patterns::{Pattern, PatternScan, locate};
    use tilejigsaw::io::configuration::{MARKED_COLOR, PATTERN_COLOR, UNMARKED_COLOR};
    use tilejigsaw::io::image::{export_scan_as_png, render_scan};
    use tilejigsaw::spatial::Image;

    fn small_scan() -> (PatternScan, Pattern) {
        let image: Image = "##.\n...\n..#".parse().unwrap();
        let pattern = Pattern::from_art("##").unwrap();
        let scan = locate(&image, &pattern).unwrap();
        (scan, pattern)
    }

    // Tests pixel colours follow coverage, then marking
    // Verified by checking marked before coverage
    #[test]
    fn test_render_colors() {
        let (scan, pattern) = small_scan();
        let rendered = render_scan(&scan, &pattern, 1).unwrap();

        assert_eq!(rendered.dimensions(), (3, 3));
        assert_eq!(*rendered.get_pixel(0, 0), Rgb(PATTERN_COLOR));
        assert_eq!(*rendered.get_pixel(1, 0), Rgb(PATTERN_COLOR));
        assert_eq!(*rendered.get_pixel(2, 0), Rgb(UNMARKED_COLOR));
        assert_eq!(*rendered.get_pixel(2, 2), Rgb(MARKED_COLOR));
    }

    // Tests scaling repeats each image pixel as a block
    // Verified by dividing by scale on only one axis
    #[test]
    fn test_render_scaled() {
        let (scan, pattern) = small_scan();
        let rendered = render_scan(&scan, &pattern, 4).unwrap();

        assert_eq!(rendered.dimensions(), (12, 12));
        assert_eq!(*rendered.get_pixel(7, 3), Rgb(PATTERN_COLOR));
        assert_eq!(*rendered.get_pixel(11, 11), Rgb(MARKED_COLOR));
        assert_eq!(*rendered.get_pixel(11, 0), Rgb(UNMARKED_COLOR));
    }

    // Tests out-of-range scales are rejected
    // Verified by allowing a zero scale
    #[test]
    fn test_invalid_scale() {
        let (scan, pattern) = small_scan();
        assert!(matches!(
            render_scan(&scan, &pattern, 0),
            Err(PuzzleError::InvalidParameter { parameter: "scale", .. })
        ));
        assert!(render_scan(&scan, &pattern, 1000).is_err());
    }

    // Tests export writes a PNG, creating missing directories
    // Verified by skipping parent directory creation
    #[test]
    fn test_export_creates_file() {
        let (scan, pattern) = small_scan();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("scan.png");

        export_scan_as_png(&scan, &pattern, 2, &path).unwrap();

        let saved = image::open(&path).unwrap().to_rgb8();
        assert_eq!(saved.dimensions(), (6, 6));
        assert_eq!(*saved.get_pixel(0, 0), Rgb(PATTERN_COLOR));
    }
}
