//! Tests for the full solving pipeline

#[cfg(test)]
mod tests {
    use tilejigsaw::PuzzleError;
    use tilejigsaw::algorithm::solver::{Solver, corner_product};
    use tilejigsaw::analysis::patterns::Pattern;
    use tilejigsaw::io::input::parse_tiles;
    use tilejigsaw::spatial::{Orientable, Orientation};

    const SAMPLE: &str = include_str!("../../../data/sample.txt");
    const SMALL: &str = include_str!("../../../data/small.txt");

    // Tests both answers on the sample puzzle
    // Verified by summing corner identifiers instead of multiplying
    #[test]
    fn test_sample_solution() {
        let tiles = parse_tiles(SAMPLE).unwrap();
        let pattern = Pattern::sea_monster();
        let solution = Solver::new(&tiles, &pattern).solve().unwrap();

        assert_eq!(solution.corners, vec![1951, 1171, 2971, 3079]);
        assert_eq!(solution.corner_product, 20_899_048_083_289);
        assert_eq!(solution.scan.occurrences(), 2);
        assert_eq!(solution.roughness, 273);
        assert_eq!(solution.scan.image.side(), 24);
        assert_eq!(solution.pattern, pattern);
    }

    // Tests a 2x2 puzzle with a custom pattern
    // Verified by subtracting pattern pixels only once
    #[test]
    fn test_small_solution_with_custom_pattern() {
        let tiles = parse_tiles(SMALL).unwrap();
        let pattern = Pattern::from_art("##\n.#").unwrap();
        let solution = Solver::new(&tiles, &pattern).solve().unwrap();

        assert_eq!(solution.corner_product, 11 * 13 * 17 * 19);
        assert_eq!(solution.scan.image.side(), 6);
        assert_eq!(solution.scan.image.marked_count(), 15);
        assert_eq!(solution.scan.orientation, Orientation::new(1, false));
        assert_eq!(solution.scan.anchors, vec![(1, 2), (3, 3)]);
        assert_eq!(solution.roughness, 9);
    }

    // Tests every anchor attempt is reported during solving
    // Verified by not forwarding the observer to the assembler
    #[test]
    fn test_solve_reports_attempts() {
        let tiles = parse_tiles(SAMPLE).unwrap();
        let pattern = Pattern::sea_monster();
        let mut count = 0;
        Solver::new(&tiles, &pattern)
            .solve_with(|_| count += 1)
            .unwrap();
        assert!(count >= 1);
    }

    // Tests tiles that all share edges do not yield four corners
    // Verified by accepting any corner count
    #[test]
    fn test_corner_count_error() {
        let input = "Tile 1:\n###\n###\n###\n\nTile 2:\n###\n###\n###\n\n\
                     Tile 3:\n###\n###\n###\n\nTile 4:\n###\n###\n###\n";
        let tiles = parse_tiles(input).unwrap();
        let pattern = Pattern::sea_monster();
        let result = Solver::new(&tiles, &pattern).solve();
        assert!(matches!(result, Err(PuzzleError::CornerCount { found: 0 })));
    }

    // Tests a single tile has no corners to multiply
    // Verified by treating a lone tile as all four corners
    #[test]
    fn test_single_tile_rejected() {
        let tiles = parse_tiles("Tile 9:\n#.#\n.#.\n#.#\n").unwrap();
        let pattern = Pattern::sea_monster();
        let result = Solver::new(&tiles, &pattern).solve();
        assert!(matches!(result, Err(PuzzleError::CornerCount { found: 0 })));
    }

    // Tests a puzzle whose image lacks the pattern reports it
    // Verified by returning an empty scan instead of an error
    #[test]
    fn test_pattern_not_found() {
        let tiles = parse_tiles(SMALL).unwrap();
        let pattern = Pattern::sea_monster();
        let result = Solver::new(&tiles, &pattern).solve();
        assert!(matches!(
            result,
            Err(PuzzleError::PatternNotFound {
                image_side: 6,
                pattern_pixels: 15
            })
        ));
    }

    // Tests corner products and overflow detection
    // Verified by using wrapping multiplication
    #[test]
    fn test_corner_product() {
        assert_eq!(corner_product(&[1951, 1171, 2971, 3079]).unwrap(), 20_899_048_083_289);
        assert_eq!(corner_product(&[]).unwrap(), 1);
        assert!(matches!(
            corner_product(&[u64::MAX, 2]),
            Err(PuzzleError::Computation { .. })
        ));
    }
}
