//! Tests for text rendering of layouts and pattern overlays

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use tilejigsaw::algorithm::assembly::TileGrid;
    use tilejigsaw::analysis::patterns::{Pattern, locate};
    use tilejigsaw::io::visualization::{render_layout, render_overlay};
    use tilejigsaw::spatial::{Image, Orientable, Tile};

    const SAMPLE_IMAGE: &str = include_str!("../../../data/sample_image.txt");

    fn tile(id: u64) -> Tile {
        Tile::new(id, "#.\n..".parse::<Image>().unwrap().pixels().clone())
    }

    // Tests identifiers are right-aligned to the widest one
    // Verified by left-aligning identifiers
    #[test]
    fn test_render_layout_alignment() {
        let cells = vec![tile(7), tile(1951), tile(42), tile(3)];
        let grid = TileGrid::from_cells(Array2::from_shape_vec((2, 2), cells).unwrap()).unwrap();
        assert_eq!(render_layout(&grid), "   7 1951\n  42    3");
    }

    // Tests the overlay marks exactly the monster pixels
    // Verified by drawing coverage over unmarked pixels as marked
    #[test]
    fn test_render_overlay_sample() {
        let monster = Pattern::sea_monster();
        let image: Image = SAMPLE_IMAGE.parse().unwrap();
        let scan = locate(&image, &monster).unwrap();
        let overlay = render_overlay(&scan, &monster);

        assert_eq!(overlay.lines().count(), 24);
        assert_eq!(overlay.matches('O').count(), 30);
        assert_eq!(overlay.matches('#').count(), 273);
        assert_eq!(overlay.lines().nth(2).and_then(|line| line.chars().nth(20)), Some('O'));
    }

    // Tests uncovered pixels keep their input symbols
    // Verified by rendering every pixel as unmarked
    #[test]
    fn test_render_overlay_plain_pixels() {
        let image: Image = "##.\n..#\n...".parse().unwrap();
        let pattern = Pattern::from_art("##").unwrap();
        let scan = locate(&image, &pattern).unwrap();
        assert_eq!(render_overlay(&scan, &pattern), "OO.\n..#\n...");
    }
}
