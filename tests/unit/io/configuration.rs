//! Tests for puzzle constants and defaults

#[cfg(test)]
mod tests {
    use tilejigsaw::analysis::patterns::Pattern;
    use tilejigsaw::io::configuration::{
        CORNER_COUNT, CORNER_NEIGHBORS, DEFAULT_EXPORT_SCALE, MARKED_COLOR, MARKED_PIXEL,
        MAX_EXPORT_SCALE, PATTERN_COLOR, PATTERN_PIXEL, SEA_MONSTER, UNMARKED_COLOR,
        UNMARKED_PIXEL,
    };

    // Tests pixel symbols are distinct
    // Verified by reusing the marked symbol for overlays
    #[test]
    fn test_pixel_symbols_distinct() {
        assert_ne!(MARKED_PIXEL, UNMARKED_PIXEL);
        assert_ne!(PATTERN_PIXEL, MARKED_PIXEL);
        assert_ne!(PATTERN_PIXEL, UNMARKED_PIXEL);
    }

    // Tests the sea monster art has three rows of twenty columns and fifteen pixels
    // Verified by trimming trailing spaces from the art
    #[test]
    fn test_sea_monster_art() {
        let lines: Vec<&str> = SEA_MONSTER.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.chars().count() == 20));
        assert_eq!(SEA_MONSTER.matches(MARKED_PIXEL).count(), 15);
        assert_eq!(Pattern::from_art(SEA_MONSTER).unwrap(), Pattern::sea_monster());
    }

    // Tests corner constants describe a square grid
    // Verified by setting three corners
    #[test]
    fn test_corner_constants() {
        assert_eq!(CORNER_NEIGHBORS, 2);
        assert_eq!(CORNER_COUNT, 4);
    }

    // Tests export defaults are within range and colours differ
    // Verified by setting the default scale above the maximum
    #[test]
    fn test_export_defaults() {
        assert!(DEFAULT_EXPORT_SCALE >= 1);
        assert!(DEFAULT_EXPORT_SCALE <= MAX_EXPORT_SCALE);
        assert_ne!(MARKED_COLOR, UNMARKED_COLOR);
        assert_ne!(PATTERN_COLOR, MARKED_COLOR);
    }
}
