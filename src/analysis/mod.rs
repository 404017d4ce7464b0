//! Analysis of a solved grid: stitching it into an image and searching that image

/// Fixed-shape pattern detection over image orientations
pub mod patterns;
/// Border trimming and tile concatenation
pub mod stitching;
