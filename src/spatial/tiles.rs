//! Identified tiles and the arena that holds a parsed puzzle
//!
//! Tiles are immutable once parsed. The [`TileSet`] keeps them in a stable
//! vector so the search can refer to tiles by arena position and track
//! availability separately instead of removing entries.

use crate::io::error::{PuzzleError, Result};
use crate::spatial::grid::{Orientable, PixelGrid};
use std::collections::HashSet;
use std::fmt;

/// Tile identifier as written in the `Tile <id>:` header
pub type TileId = u64;

/// A square pixel grid with a unique identifier
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    pixels: PixelGrid,
}

impl Tile {
    /// Create a tile from its identifier and pixels
    pub const fn new(id: TileId, pixels: PixelGrid) -> Self {
        Self { id, pixels }
    }

    /// Identifier from the tile header
    pub const fn id(&self) -> TileId {
        self.id
    }
}

impl Orientable for Tile {
    fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }

    fn with_pixels(&self, pixels: PixelGrid) -> Self {
        Self::new(self.id, pixels)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile {}:\n{}", self.id, self.pixels)
    }
}

/// Validated arena of puzzle tiles
///
/// Guarantees: at least one tile, every tile square with the same edge
/// length, unique identifiers, and a tile count that is a perfect square.
#[derive(Clone, Debug)]
pub struct TileSet {
    tiles: Vec<Tile>,
    tile_size: usize,
    grid_side: usize,
}

impl TileSet {
    /// Validate and wrap parsed tiles
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No tiles are given
    /// - A tile is not square or differs in size from the first tile
    /// - Two tiles share an identifier
    /// - The tile count is not a perfect square
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        let first = tiles.first().ok_or(PuzzleError::NoTiles)?;
        let tile_size = first.side_len();

        let mut seen = HashSet::with_capacity(tiles.len());
        for tile in &tiles {
            let (rows, cols) = (tile.pixels.rows(), tile.pixels.cols());
            if rows != cols {
                return Err(PuzzleError::NonSquareTile {
                    tile: tile.id,
                    rows,
                    cols,
                });
            }
            if rows != tile_size {
                return Err(PuzzleError::InconsistentTileSize {
                    tile: tile.id,
                    expected: tile_size,
                    found: rows,
                });
            }
            if !seen.insert(tile.id) {
                return Err(PuzzleError::DuplicateTile { id: tile.id });
            }
        }

        let grid_side = tiles.len().isqrt();
        if grid_side * grid_side != tiles.len() {
            return Err(PuzzleError::NotPerfectSquare {
                tile_count: tiles.len(),
            });
        }

        Ok(Self {
            tiles,
            tile_size,
            grid_side,
        })
    }

    /// Number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a validated set; provided for API completeness
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Edge length shared by every tile
    pub const fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Side length of the square grid the tiles form
    pub const fn grid_side(&self) -> usize {
        self.grid_side
    }

    /// Tile at an arena position
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Arena position of the tile with the given identifier
    pub fn position(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.id == id)
    }

    /// All tiles in input order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate tiles in input order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
