//! Spatial data structures for tiles and images
//!
//! This module contains spatial-related functionality including:
//! - Square symmetries and tile sides
//! - Pixel grids and the shared orientation capability
//! - Identified tiles and the tile arena
//! - The stitched composite image

/// Pixel grids, edges and the `Orientable` capability
pub mod grid;
/// The stitched composite image
pub mod image;
/// Square symmetries and tile sides
pub mod orientation;
/// Identified tiles and the tile arena
pub mod tiles;

pub use grid::{Edge, Orientable, PixelGrid};
pub use image::Image;
pub use orientation::{Orientation, Side};
pub use tiles::{Tile, TileId, TileSet};
