//! Puzzle constants and runtime configuration defaults

// Input symbols
/// Character for a marked pixel
pub const MARKED_PIXEL: char = '#';
/// Character for an unmarked pixel
pub const UNMARKED_PIXEL: char = '.';
/// Character used when rendering pixels covered by a pattern occurrence
pub const PATTERN_PIXEL: char = 'O';

/// Leading text of a tile header line
pub const TILE_HEADER_PREFIX: &str = "Tile ";
/// Trailing character of a tile header line
pub const TILE_HEADER_SUFFIX: char = ':';

/// Default pattern searched for in the assembled image
///
/// `#` marks a pattern pixel; every other character is ignored.
pub const SEA_MONSTER: &str = "                  # \n#    ##    ##    ###\n #  #  #  #  #  #   ";

// Corner classification
/// Number of matching neighbours that makes a tile a corner
pub const CORNER_NEIGHBORS: usize = 2;
/// Number of corners in a valid puzzle
pub const CORNER_COUNT: usize = 4;

// PNG export settings
/// Default pixel scale for exported images
pub const DEFAULT_EXPORT_SCALE: u32 = 4;
/// Largest accepted pixel scale
pub const MAX_EXPORT_SCALE: u32 = 64;
/// Colour of unmarked pixels
pub const UNMARKED_COLOR: [u8; 3] = [12, 44, 82];
/// Colour of marked pixels outside any pattern occurrence
pub const MARKED_COLOR: [u8; 3] = [120, 170, 210];
/// Colour of pixels covered by a pattern occurrence
pub const PATTERN_COLOR: [u8; 3] = [230, 90, 40];

// Progress bar display settings
/// Progress bar template for the anchor search
pub const PROGRESS_TEMPLATE: &str = "{msg} [{bar:40.cyan/blue}] {pos}/{len} anchors";
