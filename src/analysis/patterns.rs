//! Fixed-shape pattern detection over the eight orientations of an image

use crate::io::configuration::{MARKED_PIXEL, SEA_MONSTER};
use crate::io::error::{PuzzleError, Result, computation_error, invalid_parameter};
use crate::spatial::{Image, Orientable, Orientation, PixelGrid};
use ndarray::Array2;

/// Relative pixel offsets that must all be marked for a match
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    offsets: Vec<(usize, usize)>,
    height: usize,
    width: usize,
}

impl Pattern {
    /// Parse ASCII art where `#` marks a pattern pixel
    ///
    /// # Errors
    ///
    /// Returns an error if the art marks no pixels
    pub fn from_art(art: &str) -> Result<Self> {
        let pattern = Self::from_marked(art);
        if pattern.is_empty() {
            return Err(invalid_parameter(
                "pattern",
                &art,
                &format!("contains no '{MARKED_PIXEL}' pixels"),
            ));
        }
        Ok(pattern)
    }

    /// The default sea monster
    pub fn sea_monster() -> Self {
        Self::from_marked(SEA_MONSTER)
    }

    fn from_marked(art: &str) -> Self {
        let offsets: Vec<(usize, usize)> = art
            .lines()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == MARKED_PIXEL)
                    .map(move |(col, _)| (row, col))
            })
            .collect();
        let height = offsets.iter().map(|&(row, _)| row + 1).max().unwrap_or(0);
        let width = offsets.iter().map(|&(_, col)| col + 1).max().unwrap_or(0);

        Self {
            offsets,
            height,
            width,
        }
    }

    /// Number of marked pattern pixels
    pub const fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Test if the pattern marks no pixels
    pub const fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Rows spanned by the bounding box
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Columns spanned by the bounding box
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Offsets relative to the top-left anchor
    pub fn offsets(&self) -> &[(usize, usize)] {
        &self.offsets
    }

    /// Test whether every pattern pixel is marked with the anchor at (`row`, `col`)
    pub fn matches_at(&self, image: &Image, row: usize, col: usize) -> bool {
        let pixels = image.pixels();
        self.offsets
            .iter()
            .all(|&(dr, dc)| pixels.is_marked(row + dr, col + dc))
    }

    /// Anchors of every occurrence in the image as given
    ///
    /// Only anchors whose bounding box fits inside the image are tested.
    pub fn find_in(&self, image: &Image) -> Vec<(usize, usize)> {
        let pixels = image.pixels();
        let (Some(max_row), Some(max_col)) = (
            pixels.rows().checked_sub(self.height),
            pixels.cols().checked_sub(self.width),
        ) else {
            return Vec::new();
        };
        if self.is_empty() {
            return Vec::new();
        }

        (0..=max_row)
            .flat_map(|row| (0..=max_col).map(move |col| (row, col)))
            .filter(|&(row, col)| self.matches_at(image, row, col))
            .collect()
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::sea_monster()
    }
}

/// The image orientation that contains the pattern and where it occurs
#[derive(Clone, Debug)]
pub struct PatternScan {
    /// Orientation applied to the stitched image
    pub orientation: Orientation,
    /// The stitched image in that orientation
    pub image: Image,
    /// Top-left anchors of each occurrence
    pub anchors: Vec<(usize, usize)>,
}

impl PatternScan {
    /// Number of occurrences found
    pub const fn occurrences(&self) -> usize {
        self.anchors.len()
    }

    /// Marked pixels minus pattern pixels times occurrences
    ///
    /// # Errors
    ///
    /// Returns an error if overlapping occurrences claim more pixels than are marked
    pub fn roughness(&self, pattern: &Pattern) -> Result<usize> {
        let claimed = pattern.len() * self.occurrences();
        self.image
            .marked_count()
            .checked_sub(claimed)
            .ok_or_else(|| {
                computation_error(
                    "roughness",
                    &format!("{claimed} pattern pixels exceed marked pixels"),
                )
            })
    }

    /// Mask of every pixel covered by some occurrence
    pub fn coverage(&self, pattern: &Pattern) -> PixelGrid {
        let pixels = self.image.pixels();
        let mut mask = Array2::from_elem((pixels.rows(), pixels.cols()), false);
        for &(row, col) in &self.anchors {
            for &(dr, dc) in pattern.offsets() {
                if let Some(cell) = mask.get_mut((row + dr, col + dc)) {
                    *cell = true;
                }
            }
        }
        PixelGrid::new(mask)
    }
}

/// Try each orientation of the image until one contains the pattern
///
/// # Errors
///
/// Returns [`PuzzleError::PatternNotFound`] if no orientation contains it
pub fn locate(image: &Image, pattern: &Pattern) -> Result<PatternScan> {
    for (orientation, oriented) in image.orientations() {
        let anchors = pattern.find_in(&oriented);
        if anchors.is_empty() {
            log::trace!("no pattern in orientation {orientation}");
            continue;
        }
        log::debug!(
            "{} occurrences in orientation {orientation}",
            anchors.len()
        );
        return Ok(PatternScan {
            orientation,
            image: oriented,
            anchors,
        });
    }

    Err(PuzzleError::PatternNotFound {
        image_side: image.side(),
        pattern_pixels: pattern.len(),
    })
}
