//! Parsing of tile files and pattern art
//!
//! A tile file is a sequence of blocks separated by blank lines. Each block
//! starts with a `Tile <id>:` header followed by rows of `#` and `.`.

use crate::analysis::patterns::Pattern;
use crate::io::configuration::{
    MARKED_PIXEL, TILE_HEADER_PREFIX, TILE_HEADER_SUFFIX, UNMARKED_PIXEL,
};
use crate::io::error::{Result, WithContext, malformed};
use crate::spatial::{PixelGrid, Tile, TileId, TileSet};
use std::path::Path;

/// Read and parse a tile file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are not a
/// valid tile set
pub fn read_tiles(path: &Path) -> Result<TileSet> {
    let text = std::fs::read_to_string(path).with_path(path, "read tile file")?;
    parse_tiles(&text)
}

/// Read a pattern from an ASCII art file
///
/// # Errors
///
/// Returns an error if the file cannot be read or marks no pixels
pub fn read_pattern(path: &Path) -> Result<Pattern> {
    let text = std::fs::read_to_string(path).with_path(path, "read pattern file")?;
    Pattern::from_art(&text)
}

/// Parse tile blocks into a validated tile set
///
/// # Errors
///
/// Returns an error if:
/// - A block has a missing or invalid header, or no pixel rows
/// - A pixel row contains a character other than `#` or `.`
/// - Rows within a tile differ in length
/// - The tiles fail [`TileSet::new`] validation
pub fn parse_tiles(input: &str) -> Result<TileSet> {
    let tiles = split_blocks(input)
        .into_iter()
        .map(|block| parse_tile(&block))
        .collect::<Result<Vec<_>>>()?;

    let tile_set = TileSet::new(tiles)?;
    log::info!(
        "parsed {} tiles of {}x{} pixels ({}x{} grid)",
        tile_set.len(),
        tile_set.tile_size(),
        tile_set.tile_size(),
        tile_set.grid_side(),
        tile_set.grid_side()
    );
    Ok(tile_set)
}

/// Parse numbered rows of `#`/`.` into a pixel grid
///
/// Line numbers are only used in error messages.
///
/// # Errors
///
/// Returns an error on an unknown pixel character, ragged rows, or no rows
pub fn parse_pixel_rows<'a, I>(rows: I) -> Result<PixelGrid>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let mut first_line = None;
    let mut width = None;
    let mut parsed = Vec::new();

    for (line_no, line) in rows {
        first_line.get_or_insert(line_no);
        let row = line
            .chars()
            .map(|ch| match ch {
                MARKED_PIXEL => Ok(true),
                UNMARKED_PIXEL => Ok(false),
                other => Err(malformed(
                    line_no,
                    &format!("unexpected pixel character {other:?}"),
                )),
            })
            .collect::<Result<Vec<bool>>>()?;

        let expected = *width.get_or_insert(row.len());
        if row.len() != expected {
            return Err(malformed(
                line_no,
                &format!("row has {} pixels, expected {expected}", row.len()),
            ));
        }
        parsed.push(row);
    }

    if parsed.is_empty() {
        return Err(malformed(first_line.unwrap_or(1), &"no pixel rows"));
    }

    PixelGrid::from_rows(parsed)
        .ok_or_else(|| malformed(first_line.unwrap_or(1), &"ragged pixel rows"))
}

/// Non-blank lines grouped into blocks, each line paired with its 1-based number
fn split_blocks(input: &str) -> Vec<Vec<(usize, &str)>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push((index + 1, line));
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

fn parse_tile(block: &[(usize, &str)]) -> Result<Tile> {
    let Some((&(header_line, header), rows)) = block.split_first() else {
        return Err(malformed(1, &"empty tile block"));
    };

    let id = parse_header(header_line, header)?;
    if rows.is_empty() {
        return Err(malformed(header_line, &format!("tile {id} has no pixel rows")));
    }

    let pixels = parse_pixel_rows(rows.iter().copied())?;
    Ok(Tile::new(id, pixels))
}

fn parse_header(line_no: usize, line: &str) -> Result<TileId> {
    let digits = line
        .trim()
        .strip_prefix(TILE_HEADER_PREFIX)
        .and_then(|rest| rest.strip_suffix(TILE_HEADER_SUFFIX))
        .ok_or_else(|| {
            malformed(
                line_no,
                &format!("expected '{TILE_HEADER_PREFIX}<id>{TILE_HEADER_SUFFIX}', found {line:?}"),
            )
        })?;

    match digits.trim().parse::<TileId>() {
        Ok(0) => Err(malformed(line_no, &"tile id must be positive")),
        Ok(id) => Ok(id),
        Err(error) => Err(malformed(
            line_no,
            &format!("invalid tile id {digits:?}: {error}"),
        )),
    }
}
