//! Error types for mosaic generation and output

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Coordinate access outside `[0, side)` on either axis
    ///
    /// The solver, tiler and randomizer only ever request in-range cells,
    /// so this surfacing at runtime indicates a logic error.
    OutOfBounds {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Side length of the grid that was accessed
        side: usize,
    },

    /// Color identifier outside the range a grid or palette accepts
    InvalidColor {
        /// The offending color identifier
        color: u8,
        /// Number of colors accepted (valid identifiers are `1..=colors`)
        colors: usize,
    },

    /// Backtracking exhausted every candidate without a complete tile
    UnsolvableTile {
        /// Side length of the tile
        side: usize,
        /// Number of colors the tile had to use
        colors: usize,
    },

    /// Every color is held by a neighbor, so rejection sampling cannot terminate
    NoAvailableColors {
        /// Column of the cell being resampled
        x: usize,
        /// Row of the cell being resampled
        y: usize,
    },

    /// Failure while writing the serialized image
    FileSystem {
        /// Destination involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { x, y, side } => {
                write!(f, "Coordinate ({x}, {y}) is outside a {side}x{side} grid")
            }
            Self::InvalidColor { color, colors } => {
                write!(f, "Color {color} is out of range (valid: 1..={colors})")
            }
            Self::UnsolvableTile { side, colors } => {
                write!(
                    f,
                    "No valid {side}x{side} tile exists that uses exactly {colors} colors"
                )
            }
            Self::NoAvailableColors { x, y } => {
                write!(f, "Every color is taken by a neighbor of ({x}, {y})")
            }
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
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Attach the destination and operation to an I/O failure
pub fn write_error<'a>(
    path: &'a Path,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> AlgorithmError + 'a {
    move |source| AlgorithmError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
