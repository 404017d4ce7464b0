//! Greedy grid-fill search placing every tile by edge matching
//!
//! Cells are filled in row-major order from a chosen top-left anchor. A cell in
//! the first column must match the bottom edge of the cell above; every other
//! cell must match the right edge of the cell to its left.
//!
//! # Precondition
//!
//! The search never backtracks over earlier placements: the first available
//! tile with a matching orientation wins each cell. This is correct only for
//! inputs where every cell admits at most one consistent candidate, which holds
//! for well-formed puzzles. Inputs with ambiguous edges may be rejected or
//! misassembled.

use crate::algorithm::bitset::TileBitset;
use crate::algorithm::matching::{OrientedTiles, edges_match, find_matching_orientation};
use crate::io::error::{PuzzleError, Result};
use crate::spatial::{Orientable, Orientation, Side, Tile, TileId, TileSet};
use ndarray::Array2;

/// A completed square arrangement of oriented tiles
#[derive(Clone, Debug)]
pub struct TileGrid {
    cells: Array2<Tile>,
}

impl TileGrid {
    /// Wrap placements laid out by the caller
    ///
    /// Returns `None` unless the placement array is square and non-empty.
    /// Edge consistency is not checked; see [`TileGrid::is_consistent`].
    pub fn from_cells(cells: Array2<Tile>) -> Option<Self> {
        (cells.nrows() == cells.ncols() && !cells.is_empty()).then_some(Self { cells })
    }

    /// Number of tiles along each side
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }

    /// Placed tile at (`row`, `col`)
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.cells.get((row, col))
    }

    /// Borrow the placements
    pub const fn cells(&self) -> &Array2<Tile> {
        &self.cells
    }

    /// Identifiers at the four corners: top-left, top-right, bottom-left, bottom-right
    pub fn corner_ids(&self) -> Vec<TileId> {
        let last = self.side().saturating_sub(1);
        [(0, 0), (0, last), (last, 0), (last, last)]
            .into_iter()
            .filter_map(|(row, col)| self.get(row, col).map(Tile::id))
            .collect()
    }

    /// Tile identifiers laid out by grid row
    pub fn id_rows(&self) -> Vec<Vec<TileId>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(Tile::id).collect())
            .collect()
    }

    /// Check every interior edge against its neighbour
    pub fn is_consistent(&self) -> bool {
        let side = self.side();
        (0..side).all(|row| {
            (0..side).all(|col| {
                let Some(tile) = self.get(row, col) else {
                    return false;
                };
                let right_ok = self
                    .get(row, col + 1)
                    .is_none_or(|right| edges_match(tile, Side::Right, right));
                let below_ok = self
                    .get(row + 1, col)
                    .is_none_or(|below| edges_match(tile, Side::Bottom, below));
                right_ok && below_ok
            })
        })
    }
}

/// Report passed to observers before each anchor is tried
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorAttempt {
    /// 1-based attempt number
    pub number: usize,
    /// Total anchors that could be tried
    pub total: usize,
    /// Identifier of the anchor tile
    pub tile: TileId,
    /// Orientation of the anchor tile
    pub orientation: Orientation,
}

/// Grid-fill search over a validated tile set
pub struct GridAssembler<'a> {
    tiles: &'a TileSet,
    oriented: &'a OrientedTiles,
    preferred: Vec<usize>,
}

impl<'a> GridAssembler<'a> {
    /// Create an assembler trying anchors in input order
    pub const fn new(tiles: &'a TileSet, oriented: &'a OrientedTiles) -> Self {
        Self {
            tiles,
            oriented,
            preferred: Vec::new(),
        }
    }

    /// Try these arena positions as anchors before all others
    ///
    /// Every tile remains a candidate, so the search stays exhaustive.
    #[must_use]
    pub fn prefer(mut self, indices: &[usize]) -> Self {
        self.preferred = indices.to_vec();
        self
    }

    /// Anchor arena positions in the order they will be tried
    pub fn anchor_order(&self) -> Vec<usize> {
        let mut remaining = TileBitset::all(self.tiles.len());
        let mut order = Vec::with_capacity(self.tiles.len());
        for &index in &self.preferred {
            if remaining.remove(index) {
                order.push(index);
            }
        }
        order.extend(remaining.iter());
        order
    }

    /// Fill the grid starting from one anchor
    ///
    /// Returns `None` as soon as a cell has no candidate; a partial grid is
    /// never returned.
    pub fn fill_from(&self, anchor: usize, orientation: Orientation) -> Option<TileGrid> {
        let side = self.tiles.grid_side();
        let first = self.oriented.variants(anchor).get(orientation.index())?;

        let mut available = TileBitset::all(self.tiles.len());
        available.remove(anchor);

        let mut placed: Vec<Tile> = Vec::with_capacity(side * side);
        placed.push(first.clone());

        for cell in 1..side * side {
            let (neighbor, facing) = if cell % side == 0 {
                (placed.get(cell - side)?, Side::Bottom)
            } else {
                (placed.get(cell - 1)?, Side::Right)
            };
            let edge = neighbor.edge(facing);

            let candidate = available.iter().find_map(|index| {
                find_matching_orientation(&edge, facing, self.oriented.variants(index))
                    .map(|tile| (index, tile.clone()))
            });
            let Some((index, tile)) = candidate else {
                log::trace!(
                    "anchor {} ({orientation}) stuck at cell ({}, {})",
                    first.id(),
                    cell / side,
                    cell % side
                );
                return None;
            };

            available.remove(index);
            placed.push(tile);
        }

        Array2::from_shape_vec((side, side), placed)
            .ok()
            .map(|cells| TileGrid { cells })
    }

    /// Search all anchors until one yields a complete grid
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::NoAssembly`] if no anchor tile in any
    /// orientation completes the grid
    pub fn assemble(&self) -> Result<TileGrid> {
        self.assemble_with(|_| {})
    }

    /// Search all anchors, reporting each attempt to `on_attempt` before it runs
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::NoAssembly`] if no anchor tile in any
    /// orientation completes the grid
    pub fn assemble_with<F>(&self, mut on_attempt: F) -> Result<TileGrid>
    where
        F: FnMut(&AnchorAttempt),
    {
        let order = self.anchor_order();
        let total = order.len() * Orientation::ALL.len();
        let mut number = 0;

        for index in order {
            let Some(tile) = self.tiles.get(index) else {
                continue;
            };
            for orientation in Orientation::ALL {
                number += 1;
                on_attempt(&AnchorAttempt {
                    number,
                    total,
                    tile: tile.id(),
                    orientation,
                });

                if let Some(grid) = self.fill_from(index, orientation) {
                    log::info!(
                        "grid completed from anchor {} ({orientation}) after {number} attempts",
                        tile.id()
                    );
                    return Ok(grid);
                }
            }
        }

        Err(PuzzleError::NoAssembly {
            tile_count: self.tiles.len(),
            anchors_tried: number,
        })
    }
}
