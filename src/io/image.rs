//! PNG export of the oriented image with pattern pixels highlighted

use crate::analysis::patterns::{Pattern, PatternScan};
use crate::io::configuration::{MARKED_COLOR, MAX_EXPORT_SCALE, PATTERN_COLOR, UNMARKED_COLOR};
use crate::io::error::{PuzzleError, Result, WithContext, computation_error, invalid_parameter};
use crate::spatial::Orientable;
use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;

/// Render the scanned image as RGB, `scale` output pixels per image pixel
///
/// # Errors
///
/// Returns an error if `scale` is zero or above the maximum, or the scaled
/// image does not fit in `u32` dimensions
pub fn render_scan(scan: &PatternScan, pattern: &Pattern, scale: u32) -> Result<RgbImage> {
    if scale == 0 || scale > MAX_EXPORT_SCALE {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("must be between 1 and {MAX_EXPORT_SCALE}"),
        ));
    }

    let pixels = scan.image.pixels();
    let coverage = scan.coverage(pattern);
    let side = u32::try_from(pixels.rows())
        .ok()
        .and_then(|rows| rows.checked_mul(scale))
        .ok_or_else(|| computation_error("png export", &"image too large to export"))?;

    Ok(ImageBuffer::from_fn(side, side, |x, y| {
        let row = (y / scale) as usize;
        let col = (x / scale) as usize;
        let color = if coverage.is_marked(row, col) {
            PATTERN_COLOR
        } else if pixels.is_marked(row, col) {
            MARKED_COLOR
        } else {
            UNMARKED_COLOR
        };
        Rgb(color)
    }))
}

/// Export the scanned image as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The scale is invalid (see [`render_scan`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_scan_as_png(
    scan: &PatternScan,
    pattern: &Pattern,
    scale: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_scan(scan, pattern, scale)?;

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).with_path(output_path, "save png")?;
    log::info!("exported image to {}", output_path.display());

    Ok(())
}
