//! Text rendering of the solved layout and the pattern overlay

use crate::algorithm::assembly::TileGrid;
use crate::analysis::patterns::{Pattern, PatternScan};
use crate::io::configuration::{MARKED_PIXEL, PATTERN_PIXEL, UNMARKED_PIXEL};
use crate::spatial::Orientable;

/// Tile identifiers by grid row, right-aligned in equal-width columns
pub fn render_layout(grid: &TileGrid) -> String {
    let rows = grid.id_rows();
    let width = rows
        .iter()
        .flatten()
        .map(|id| id.to_string().len())
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|row| {
            row.iter()
                .map(|id| format!("{id:>width$}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The oriented image with pattern-covered pixels drawn as `O`
pub fn render_overlay(scan: &PatternScan, pattern: &Pattern) -> String {
    let pixels = scan.image.pixels();
    let coverage = scan.coverage(pattern);

    (0..pixels.rows())
        .map(|row| {
            (0..pixels.cols())
                .map(|col| {
                    if coverage.is_marked(row, col) {
                        PATTERN_PIXEL
                    } else if pixels.is_marked(row, col) {
                        MARKED_PIXEL
                    } else {
                        UNMARKED_PIXEL
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
