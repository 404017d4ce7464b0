//! Error types and context management for puzzle operations

use crate::spatial::tiles::TileId;
use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Input text could not be read as a tile set
    MalformedInput {
        /// 1-based line number of the offending line
        line: usize,
        /// Description of what's wrong with the line
        reason: String,
    },

    /// Input contained no tile blocks at all
    NoTiles,

    /// Tile pixel block is not square
    NonSquareTile {
        /// Identifier of the offending tile
        tile: TileId,
        /// Number of pixel rows
        rows: usize,
        /// Number of pixel columns
        cols: usize,
    },

    /// Tile edge length differs from the first tile's
    InconsistentTileSize {
        /// Identifier of the offending tile
        tile: TileId,
        /// Edge length of the first tile
        expected: usize,
        /// Edge length of the offending tile
        found: usize,
    },

    /// Two tiles share an identifier
    DuplicateTile {
        /// The repeated identifier
        id: TileId,
    },

    /// Tile count cannot form a square grid
    NotPerfectSquare {
        /// Number of tiles parsed
        tile_count: usize,
    },

    /// Edge matching did not single out exactly four corners
    ///
    /// Occurs when the input is not a valid puzzle, for example:
    /// - A single-tile input (no tile has two neighbours)
    /// - Edges that match more than one partner
    CornerCount {
        /// Number of tiles with exactly two neighbours
        found: usize,
    },

    /// Every anchor tile and orientation failed to produce a complete grid
    NoAssembly {
        /// Number of tiles in the puzzle
        tile_count: usize,
        /// Number of anchor attempts made
        anchors_tried: usize,
    },

    /// No orientation of the assembled image contains the pattern
    PatternNotFound {
        /// Side length of the searched image
        image_side: usize,
        /// Marked pixels in the pattern
        pattern_pixels: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the assembled image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// The global logger could not be installed
    LoggerInit {
        /// Underlying logger error
        source: log::SetLoggerError,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::MalformedInput { line, reason } => {
                write!(f, "Malformed input at line {line}: {reason}")
            }
            Self::NoTiles => write!(f, "Input contains no tiles"),
            Self::NonSquareTile { tile, rows, cols } => {
                write!(f, "Tile {tile} is not square ({rows}x{cols})")
            }
            Self::InconsistentTileSize {
                tile,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Tile {tile} has edge length {found}, expected {expected}"
                )
            }
            Self::DuplicateTile { id } => write!(f, "Tile {id} appears more than once"),
            Self::NotPerfectSquare { tile_count } => {
                write!(f, "{tile_count} tiles cannot form a square grid")
            }
            Self::CornerCount { found } => {
                write!(f, "Expected 4 corner tiles, found {found}")
            }
            Self::NoAssembly {
                tile_count,
                anchors_tried,
            } => {
                write!(
                    f,
                    "No complete grid for {tile_count} tiles after {anchors_tried} anchor attempts"
                )
            }
            Self::PatternNotFound {
                image_side,
                pattern_pixels,
            } => {
                write!(
                    f,
                    "Pattern of {pattern_pixels} pixels not found in any orientation of the {image_side}x{image_side} image"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::LoggerInit { source } => write!(f, "Failed to initialise logging: {source}"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::LoggerInit { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File the failing operation touched
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with the file and operation involved
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add the path and operation context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<PuzzleError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only errors that carry a location benefit from the context
            match &mut error {
                PuzzleError::FileSystem {
                    path, operation, ..
                } => {
                    if let Some(context_path) = &context.path {
                        path.clone_from(context_path);
                    }
                    if let Some(context_operation) = context.operation {
                        *operation = context_operation;
                    }
                }
                PuzzleError::ImageExport { path, .. } => {
                    if let Some(context_path) = &context.path {
                        path.clone_from(context_path);
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.to_path_buf()),
            operation: Some(operation),
        })
    }
}

impl From<image::ImageError> for PuzzleError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<log::SetLoggerError> for PuzzleError {
    fn from(err: log::SetLoggerError) -> Self {
        Self::LoggerInit { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> PuzzleError {
    PuzzleError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a malformed input error for a 1-based line number
pub fn malformed(line: usize, reason: &impl ToString) -> PuzzleError {
    PuzzleError::MalformedInput {
        line,
        reason: reason.to_string(),
    }
}
