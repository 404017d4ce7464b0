//! Edge-matching tile assembler with pattern search
//!
//! Square binary-pixel tiles are reassembled into a square image so that
//! every interior edge matches its neighbour. The stitched image is then
//! searched, under its eight symmetries, for a fixed pixel pattern.

/// Edge matching, grid-fill search and end-to-end solving
pub mod algorithm;
/// Stitching and pattern detection over the assembled image
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Pixel grids, orientations, tiles and images
pub mod spatial;

pub use io::error::{PuzzleError, Result};
