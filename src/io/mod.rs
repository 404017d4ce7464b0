//! Input/output operations and error handling

/// Command-line parsing and the solve/report runner
pub mod cli;
/// Puzzle constants and runtime defaults
pub mod configuration;
/// Error types and context management
pub mod error;
/// PNG export of the oriented image
pub mod image;
/// Tile file and pattern art parsing
pub mod input;
/// Terminal logger installation
pub mod logging;
/// Anchor search progress display
pub mod progress;
/// Text rendering of the layout and pattern overlay
pub mod visualization;
