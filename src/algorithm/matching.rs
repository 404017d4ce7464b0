//! Exact edge matching between tiles and corner detection
//!
//! Two tiles are neighbours when some orientation of the second presents, on
//! the touching side, exactly the edge the first shows. Corners are the tiles
//! with exactly two neighbours.

use crate::io::configuration::CORNER_NEIGHBORS;
use crate::spatial::{Edge, Orientable, Side, Tile, TileSet};

/// All eight orientations of every tile, indexed like the arena
///
/// Orientations are generated once so matching never rebuilds pixel grids.
#[derive(Clone, Debug)]
pub struct OrientedTiles {
    variants: Vec<Vec<Tile>>,
}

impl OrientedTiles {
    /// Generate the orientations of every tile in the set
    pub fn new(tiles: &TileSet) -> Self {
        let variants = tiles
            .iter()
            .map(|tile| tile.orientations().map(|(_, oriented)| oriented).collect())
            .collect();
        Self { variants }
    }

    /// Orientations of the tile at an arena position, in `Orientation::ALL` order
    pub fn variants(&self, index: usize) -> &[Tile] {
        self.variants
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of tiles covered
    pub const fn len(&self) -> usize {
        self.variants.len()
    }

    /// Test if no tiles are covered
    pub const fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Test whether `b` fits against the `side` of `a` without reorienting either
pub fn edges_match(a: &Tile, side: Side, b: &Tile) -> bool {
    a.edge(side) == b.edge(side.opposite())
}

/// Find the first variant whose side facing back equals `edge`
///
/// `side` is the side of the already placed tile that `edge` was read from.
pub fn find_matching_orientation<'a>(
    edge: &Edge,
    side: Side,
    variants: &'a [Tile],
) -> Option<&'a Tile> {
    let facing = side.opposite();
    variants.iter().find(|variant| variant.edge(facing) == *edge)
}

/// Test whether any edge of `tile`, as given, is matched by some variant
pub fn shares_edge(tile: &Tile, variants: &[Tile]) -> bool {
    Side::ALL
        .into_iter()
        .any(|side| find_matching_orientation(&tile.edge(side), side, variants).is_some())
}

/// Count, per arena position, how many other tiles share an edge with it
pub fn neighbor_counts(tiles: &TileSet, oriented: &OrientedTiles) -> Vec<usize> {
    tiles
        .iter()
        .enumerate()
        .map(|(index, tile)| {
            (0..tiles.len())
                .filter(|&other| other != index)
                .filter(|&other| shares_edge(tile, oriented.variants(other)))
                .count()
        })
        .collect()
}

/// Arena positions of tiles with exactly two neighbours
pub fn find_corners(tiles: &TileSet, oriented: &OrientedTiles) -> Vec<usize> {
    let counts = neighbor_counts(tiles, oriented);
    log::debug!("neighbour counts: {counts:?}");
    counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count == CORNER_NEIGHBORS)
        .map(|(index, _)| index)
        .collect()
}
