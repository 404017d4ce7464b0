//! Binary pixel grids with the square symmetry transforms shared by tiles and images
//!
//! Rotation, mirroring and edge extraction are written once here and exposed to
//! the identifier-carrying [`Tile`](crate::spatial::tiles::Tile) and the
//! identifier-free [`Image`](crate::spatial::image::Image) through [`Orientable`].

use crate::io::configuration::{MARKED_PIXEL, UNMARKED_PIXEL};
use crate::spatial::orientation::{Orientation, Side};
use bitvec::prelude::*;
use ndarray::{Array2, ArrayView2, s};
use std::fmt;

/// Ordered pixel values along one side of a grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge(BitVec);

impl Edge {
    /// Number of pixels along the edge
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Test if the edge has no pixels
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The same pixels read in the opposite direction
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut bits = self.0.clone();
        bits.reverse();
        Self(bits)
    }

    /// Iterate the pixel values in reading order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().by_vals()
    }
}

impl FromIterator<bool> for Edge {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for marked in self.iter() {
            write!(f, "{}", pixel_char(marked))?;
        }
        Ok(())
    }
}

/// Rectangular grid of marked/unmarked pixels
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Array2<bool>,
}

impl PixelGrid {
    /// Wrap an existing pixel array
    pub const fn new(pixels: Array2<bool>) -> Self {
        Self { pixels }
    }

    /// Build a grid from rows of equal length
    ///
    /// Returns `None` when the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let flat: Vec<bool> = rows.into_iter().flatten().collect();
        Array2::from_shape_vec((height, width), flat)
            .ok()
            .map(Self::new)
    }

    /// Number of pixel rows
    pub fn rows(&self) -> usize {
        self.pixels.nrows()
    }

    /// Number of pixel columns
    pub fn cols(&self) -> usize {
        self.pixels.ncols()
    }

    /// Test whether the pixel at (`row`, `col`) is marked; out of bounds reads as unmarked
    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.pixels.get((row, col)).copied().unwrap_or(false)
    }

    /// Count marked pixels
    pub fn marked_count(&self) -> usize {
        self.pixels.iter().filter(|&&marked| marked).count()
    }

    /// Borrow the underlying array
    pub fn view(&self) -> ArrayView2<'_, bool> {
        self.pixels.view()
    }

    /// Rotate a quarter turn clockwise: `out[r][c] = in[n-1-c][r]`
    #[must_use]
    pub fn rotated_clockwise(&self) -> Self {
        Self::new(self.pixels.t().slice(s![.., ..;-1]).to_owned())
    }

    /// Reverse the row order
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self::new(self.pixels.slice(s![..;-1, ..]).to_owned())
    }

    /// Apply an orientation: mirror first, then rotate
    #[must_use]
    pub fn oriented(&self, orientation: Orientation) -> Self {
        let mut grid = if orientation.is_mirrored() {
            self.mirrored()
        } else {
            self.clone()
        };
        for _ in 0..orientation.quarter_turns() {
            grid = grid.rotated_clockwise();
        }
        grid
    }

    /// Extract the pixels along one side
    pub fn edge(&self, side: Side) -> Edge {
        let (rows, cols) = self.pixels.dim();
        let last_row = rows.saturating_sub(1);
        let last_col = cols.saturating_sub(1);
        match side {
            Side::Top => (0..cols).map(|col| self.is_marked(0, col)).collect(),
            Side::Bottom => (0..cols).map(|col| self.is_marked(last_row, col)).collect(),
            Side::Left => (0..rows).map(|row| self.is_marked(row, 0)).collect(),
            Side::Right => (0..rows).map(|row| self.is_marked(row, last_col)).collect(),
        }
    }

    /// Remove the outermost ring of pixels
    ///
    /// Grids narrower than three pixels trim to an empty grid.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        let (rows, cols) = self.pixels.dim();
        if rows < 2 || cols < 2 {
            return Self::new(Array2::from_elem((0, 0), false));
        }
        Self::new(self.pixels.slice(s![1..rows - 1, 1..cols - 1]).to_owned())
    }
}

impl From<Array2<bool>> for PixelGrid {
    fn from(pixels: Array2<bool>) -> Self {
        Self::new(pixels)
    }
}

impl fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.pixels.rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for &marked in row {
                write!(f, "{}", pixel_char(marked))?;
            }
        }
        Ok(())
    }
}

const fn pixel_char(marked: bool) -> char {
    if marked { MARKED_PIXEL } else { UNMARKED_PIXEL }
}

/// A value backed by a pixel grid that can be reoriented
///
/// Implementors only supply access to their pixels and a way to rebuild
/// themselves around new pixels; every transform is derived from that.
pub trait Orientable: Sized {
    /// Borrow the pixel grid
    fn pixels(&self) -> &PixelGrid;

    /// Build a value identical to `self` except for its pixels
    #[must_use]
    fn with_pixels(&self, pixels: PixelGrid) -> Self;

    /// Apply an orientation, producing a new value
    #[must_use]
    fn oriented(&self, orientation: Orientation) -> Self {
        self.with_pixels(self.pixels().oriented(orientation))
    }

    /// All eight orientations in [`Orientation::ALL`] order
    ///
    /// Symmetric grids still yield eight values; equal results are not skipped.
    fn orientations(&self) -> impl Iterator<Item = (Orientation, Self)> {
        Orientation::ALL
            .into_iter()
            .map(move |orientation| (orientation, self.oriented(orientation)))
    }

    /// Extract the pixels along one side
    fn edge(&self, side: Side) -> Edge {
        self.pixels().edge(side)
    }

    /// Number of pixel rows
    fn side_len(&self) -> usize {
        self.pixels().rows()
    }

    /// Count marked pixels
    fn marked_count(&self) -> usize {
        self.pixels().marked_count()
    }
}
