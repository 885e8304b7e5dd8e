//! Error types for grid construction, indexing, and tiling
//!
//! Every failure is a deterministic function of the operation's inputs and
//! is reported synchronously; no operation leaves a partially constructed
//! value behind.

use std::fmt;

/// Main error type for all grid operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid or tile-grid dimensions below the 1x1 minimum
    InvalidGrid {
        /// Which dimension failed validation ("rows", "cols", "tile_rows",
        /// or "tile_cols")
        dimension: &'static str,
        /// Provided value that failed validation
        value: usize,
    },

    /// Cell constructed directly with a negative coordinate
    ///
    /// Direct construction performs no wraparound; only grid indexing
    /// resolves negative indices against the grid extent.
    InvalidCoordinate {
        /// Which coordinate failed validation ("row" or "col")
        coordinate: &'static str,
        /// Provided value that failed validation
        value: i64,
    },

    /// Requested index lies outside the grid after negative-index resolution
    OutOfBounds {
        /// Which axis the index missed ("row" or "col")
        axis: &'static str,
        /// Index as requested by the caller, before resolution
        index: i64,
        /// Extent of the grid along that axis
        extent: usize,
    },

    /// Grid cannot be partitioned with the requested pattern
    ///
    /// Raised when a fixed-size tiling would need a tile larger than the
    /// grid, or when requested tile counts do not balance under the
    /// ceiling-division rule (see [`crate::spatial::tiling::can_tile_into`]).
    InvalidTiling {
        /// Size of the grid being tiled (rows, cols)
        grid: (usize, usize),
        /// Dimensions of the pattern grid passed to the tiling call
        pattern: (usize, usize),
        /// Why the partition is impossible
        reason: &'static str,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid { dimension, value } => {
                write!(f, "Grid {dimension} must be 1 or greater, got {value}")
            }
            Self::InvalidCoordinate { coordinate, value } => {
                write!(f, "Cell {coordinate} must be 0 or greater, got {value}")
            }
            Self::OutOfBounds {
                axis,
                index,
                extent,
            } => {
                write!(f, "Index {index} outside grid {axis} extent {extent}")
            }
            Self::InvalidTiling {
                grid,
                pattern,
                reason,
            } => {
                write!(
                    f,
                    "Cannot tile {}x{} grid with {}x{} pattern: {reason}",
                    grid.0, grid.1, pattern.0, pattern.1
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Convenience type alias for grid operation results
pub type Result<T> = std::result::Result<T, GridError>;
