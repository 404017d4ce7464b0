//! Tests for pattern parsing, occurrence search and roughness

#[cfg(test)]
mod tests {
    use tilejigsaw::PuzzleError;
    use tilejigsaw::analysis::patterns::{Pattern, locate};
    use tilejigsaw::spatial::{Image, Orientable, Orientation};

    const SAMPLE_IMAGE: &str = include_str!("../../../data/sample_image.txt");

    fn sample_image() -> Image {
        SAMPLE_IMAGE.parse().unwrap()
    }

    // Tests the sea monster's shape
    // Verified by counting spaces as pattern pixels
    #[test]
    fn test_sea_monster_shape() {
        let monster = Pattern::sea_monster();
        assert_eq!(monster.len(), 15);
        assert_eq!(monster.height(), 3);
        assert_eq!(monster.width(), 20);
        assert!(monster.offsets().contains(&(0, 18)));
        assert_eq!(Pattern::default(), monster);
    }

    // Tests custom art parsing and rejection of empty art
    // Verified by accepting patterns with no marked pixels
    #[test]
    fn test_from_art() {
        let pattern = Pattern::from_art(".#\n##\n").unwrap();
        assert_eq!(pattern.offsets().to_vec(), vec![(0, 1), (1, 0), (1, 1)]);
        assert_eq!((pattern.height(), pattern.width()), (2, 2));

        assert!(matches!(
            Pattern::from_art("...\n   "),
            Err(PuzzleError::InvalidParameter { parameter: "pattern", .. })
        ));
    }

    // Tests both monsters are found at their known anchors
    // Verified by skipping the last anchor column
    #[test]
    fn test_find_known_occurrences() {
        let image = sample_image();
        let monster = Pattern::sea_monster();
        assert_eq!(monster.find_in(&image), vec![(2, 2), (16, 1)]);
        assert!(monster.matches_at(&image, 2, 2));
        assert!(!monster.matches_at(&image, 0, 0));
    }

    // Tests patterns larger than the image never match
    // Verified by removing the bounding box check
    #[test]
    fn test_pattern_larger_than_image() {
        let image: Image = "##\n##".parse().unwrap();
        assert!(Pattern::sea_monster().find_in(&image).is_empty());
    }

    // Tests locate keeps the first orientation with occurrences
    // Verified by continuing to the orientation with most occurrences
    #[test]
    fn test_locate_identity() {
        let scan = locate(&sample_image(), &Pattern::sea_monster()).unwrap();
        assert_eq!(scan.orientation, Orientation::IDENTITY);
        assert_eq!(scan.occurrences(), 2);
        assert_eq!(scan.roughness(&Pattern::sea_monster()).unwrap(), 273);
    }

    // Tests locate finds the monsters in a rotated and mirrored image
    // Verified by only searching unmirrored orientations
    #[test]
    fn test_locate_reoriented() {
        let monster = Pattern::sea_monster();
        let turned = sample_image().oriented(Orientation::new(3, true));
        let scan = locate(&turned, &monster).unwrap();
        assert_eq!(scan.occurrences(), 2);
        assert_eq!(scan.roughness(&monster).unwrap(), 273);
        assert_eq!(monster.find_in(&scan.image), scan.anchors);
    }

    // Tests an image without the pattern reports its size
    // Verified by returning an empty scan
    #[test]
    fn test_locate_not_found() {
        let image: Image = "#.#\n.#.\n#.#".parse().unwrap();
        let pattern = Pattern::from_art("##").unwrap();
        assert!(matches!(
            locate(&image, &pattern),
            Err(PuzzleError::PatternNotFound {
                image_side: 3,
                pattern_pixels: 2
            })
        ));
    }

    // Tests coverage marks pattern pixels only
    // Verified by marking the whole bounding box
    #[test]
    fn test_coverage() {
        let monster = Pattern::sea_monster();
        let scan = locate(&sample_image(), &monster).unwrap();
        let coverage = scan.coverage(&monster);
        assert_eq!(coverage.marked_count(), 30);
        assert!(coverage.is_marked(2, 20));
        assert!(!coverage.is_marked(2, 2));
    }

    // Tests overlapping occurrences are each counted in full
    // Verified by subtracting covered pixels instead
    #[test]
    fn test_overlapping_roughness() {
        let image: Image = "###\n...\n...".parse().unwrap();
        let pattern = Pattern::from_art("##").unwrap();
        let scan = locate(&image, &pattern).unwrap();
        assert_eq!(scan.anchors, vec![(0, 0), (0, 1)]);
        assert_eq!(scan.coverage(&pattern).marked_count(), 3);
        assert!(matches!(
            scan.roughness(&pattern),
            Err(PuzzleError::Computation { .. })
        ));
    }
}
