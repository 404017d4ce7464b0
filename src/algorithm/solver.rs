use crate::algorithm::assembly::{AnchorAttempt, GridAssembler, TileGrid};
use crate::algorithm::matching::{OrientedTiles, find_corners};
use crate::analysis::patterns::{Pattern, PatternScan, locate};
use crate::analysis::stitching::stitch;
use crate::io::configuration::CORNER_COUNT;
use crate::io::error::{PuzzleError, Result, computation_error};
use crate::spatial::{Tile, TileId, TileSet};

/// Both answers plus the intermediate results that produced them
#[derive(Clone, Debug)]
pub struct Solution {
    /// Identifiers of the corner tiles in input order
    pub corners: Vec<TileId>,
    /// Product of the corner identifiers
    pub corner_product: u64,
    /// The assembled grid
    pub grid: TileGrid,
    /// The oriented image and pattern occurrences
    pub scan: PatternScan,
    /// Marked pixels not attributed to a pattern occurrence
    pub roughness: usize,
    /// The pattern that was searched for
    pub pattern: Pattern,
}

/// Runs corner detection, assembly, stitching and pattern search in order
pub struct Solver<'a> {
    tiles: &'a TileSet,
    pattern: &'a Pattern,
}

impl<'a> Solver<'a> {
    /// Create a solver for a tile set and the pattern to look for
    pub const fn new(tiles: &'a TileSet, pattern: &'a Pattern) -> Self {
        Self { tiles, pattern }
    }

    /// Solve without observing the anchor search
    ///
    /// # Errors
    ///
    /// See [`Solver::solve_with`]
    pub fn solve(&self) -> Result<Solution> {
        self.solve_with(|_| {})
    }

    /// Solve, reporting every anchor attempt to `on_attempt`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Edge matching does not find exactly four corners
    /// - The corner product overflows `u64`
    /// - No anchor completes the grid
    /// - Stitching produces an image of the wrong size
    /// - No orientation of the image contains the pattern
    pub fn solve_with<F>(&self, on_attempt: F) -> Result<Solution>
    where
        F: FnMut(&AnchorAttempt),
    {
        let oriented = OrientedTiles::new(self.tiles);

        let corner_indices = find_corners(self.tiles, &oriented);
        if corner_indices.len() != CORNER_COUNT {
            return Err(PuzzleError::CornerCount {
                found: corner_indices.len(),
            });
        }
        let corners: Vec<TileId> = corner_indices
            .iter()
            .filter_map(|&index| self.tiles.get(index).map(Tile::id))
            .collect();
        let corner_product = corner_product(&corners)?;
        log::info!("corner tiles {corners:?}, product {corner_product}");

        let grid = GridAssembler::new(self.tiles, &oriented)
            .prefer(&corner_indices)
            .assemble_with(on_attempt)?;
        log::debug!("grid layout {:?}", grid.id_rows());

        let mut placed_corners = grid.corner_ids();
        let mut detected_corners = corners.clone();
        placed_corners.sort_unstable();
        detected_corners.sort_unstable();
        if placed_corners != detected_corners {
            log::warn!(
                "assembled corners {placed_corners:?} differ from detected corners {detected_corners:?}"
            );
        }

        let image = stitch(&grid)?;
        let scan = locate(&image, self.pattern)?;
        let roughness = scan.roughness(self.pattern)?;
        log::info!(
            "{} pattern occurrences in orientation {}, roughness {roughness}",
            scan.occurrences(),
            scan.orientation
        );

        Ok(Solution {
            corners,
            corner_product,
            grid,
            scan,
            roughness,
            pattern: self.pattern.clone(),
        })
    }
}

/// Multiply tile identifiers
///
/// # Errors
///
/// Returns an error if the product overflows `u64`
pub fn corner_product(ids: &[TileId]) -> Result<u64> {
    ids.iter().try_fold(1_u64, |product, &id| {
        product
            .checked_mul(id)
            .ok_or_else(|| computation_error("corner product", &format!("{ids:?} overflows u64")))
    })
}
