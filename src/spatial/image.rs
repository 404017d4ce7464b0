//! The stitched composite image

use crate::io::error::{PuzzleError, Result};
use crate::io::input::parse_pixel_rows;
use crate::spatial::grid::{Orientable, PixelGrid};
use std::fmt;
use std::str::FromStr;

/// Border-trimmed composite of every placed tile
///
/// Unlike a tile it carries no identifier; it shares the orientation
/// behaviour through [`Orientable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pixels: PixelGrid,
}

impl Image {
    /// Wrap a pixel grid as an image
    pub const fn new(pixels: PixelGrid) -> Self {
        Self { pixels }
    }

    /// Side length in pixels (row count)
    pub fn side(&self) -> usize {
        self.pixels.rows()
    }
}

impl Orientable for Image {
    fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }

    fn with_pixels(&self, pixels: PixelGrid) -> Self {
        Self::new(pixels)
    }
}

impl FromStr for Image {
    type Err = PuzzleError;

    /// Parse rows of `#`/`.`; blank lines are skipped
    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| (index + 1, line.trim_end()));
        parse_pixel_rows(rows).map(Self::new)
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pixels)
    }
}
