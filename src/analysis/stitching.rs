//! Border trimming and concatenation of a solved grid into one image

use crate::algorithm::assembly::TileGrid;
use crate::io::error::{Result, computation_error};
use crate::spatial::{Image, Orientable, PixelGrid};
use ndarray::{ArrayBase, ArrayView2, Axis, concatenate};

/// Side length of the image stitched from `grid_side`² tiles of `tile_size`
pub const fn expected_image_side(tile_size: usize, grid_side: usize) -> usize {
    tile_size.saturating_sub(2) * grid_side
}

/// Trim every tile's border and join the remainders by grid position
///
/// Within a grid row the trimmed tiles are joined left to right; the
/// resulting bands are stacked top to bottom.
///
/// # Errors
///
/// Returns an error if the trimmed tiles cannot be concatenated (mixed tile
/// sizes) or the result is not `(tile_size - 2) × grid_side` pixels square
pub fn stitch(grid: &TileGrid) -> Result<Image> {
    let tile_size = grid.get(0, 0).map_or(0, Orientable::side_len);

    let bands = grid
        .cells()
        .rows()
        .into_iter()
        .map(|row| {
            let trimmed: Vec<PixelGrid> = row.iter().map(|tile| tile.pixels().trimmed()).collect();
            let views: Vec<ArrayView2<'_, bool>> = trimmed.iter().map(PixelGrid::view).collect();
            concatenate(Axis(1), &views).map_err(|error| computation_error("stitch row", &error))
        })
        .collect::<Result<Vec<_>>>()?;

    let band_views: Vec<ArrayView2<'_, bool>> = bands.iter().map(ArrayBase::view).collect();
    let pixels = concatenate(Axis(0), &band_views)
        .map_err(|error| computation_error("stitch bands", &error))?;

    let expected = expected_image_side(tile_size, grid.side());
    if pixels.dim() != (expected, expected) {
        return Err(computation_error(
            "stitch",
            &format!(
                "image is {}x{}, expected {expected}x{expected}",
                pixels.nrows(),
                pixels.ncols()
            ),
        ));
    }

    log::debug!("stitched {expected}x{expected} image");
    Ok(Image::new(PixelGrid::new(pixels)))
}
