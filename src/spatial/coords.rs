//! Cell addressing primitives and index resolution
//!
//! Indices supplied by callers are signed: negative values count back from
//! the trailing edge of an axis, Python-slice style, and are resolved here
//! before any cell is built. Resolved coordinates are always non-negative
//! and in bounds.

use crate::error::{GridError, Result};
use crate::spatial::grid::GridBounds;
use crate::transform::{Affine, HasTransform};

/// Resolve a possibly negative index against an axis extent
///
/// Negative indices have the extent added once, so `-1` addresses the last
/// position. Anything still outside `[0, extent)` is an `OutOfBounds` error
/// reporting the index as the caller wrote it.
pub(crate) fn resolve(index: i64, extent: usize, axis: &'static str) -> Result<usize> {
    let resolved = if index < 0 {
        index + extent as i64
    } else {
        index
    };

    if resolved < 0 || resolved >= extent as i64 {
        return Err(GridError::OutOfBounds {
            axis,
            index,
            extent,
        });
    }

    Ok(resolved as usize)
}

/// A free-standing (row, col) address not attached to any grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// Create a cell address from signed coordinates
    ///
    /// Direct construction performs no wraparound: a negative coordinate is
    /// rejected rather than resolved against an extent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` if either coordinate is negative.
    pub fn new(row: i64, col: i64) -> Result<Self> {
        if row < 0 {
            return Err(GridError::InvalidCoordinate {
                coordinate: "row",
                value: row,
            });
        }

        if col < 0 {
            return Err(GridError::InvalidCoordinate {
                coordinate: "col",
                value: col,
            });
        }

        Ok(Self {
            row: row as usize,
            col: col as usize,
        })
    }

    /// Row of this address
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Column of this address
    pub const fn col(&self) -> usize {
        self.col
    }
}

/// A cell produced by indexing into a grid
///
/// Carries a non-owning back reference to the grid it was looked up in, so
/// the grid must outlive the cell. Coordinates are already resolved and in
/// bounds.
#[derive(Debug, Clone, Copy)]
pub struct GridCell<'g, G> {
    row: usize,
    col: usize,
    grid: &'g G,
}

impl<'g, G> GridCell<'g, G> {
    pub(crate) const fn new(row: usize, col: usize, grid: &'g G) -> Self {
        Self { row, col, grid }
    }

    /// Row of this cell within its grid
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Column of this cell within its grid
    pub const fn col(&self) -> usize {
        self.col
    }

    /// The grid this cell was looked up in
    pub const fn grid(&self) -> &'g G {
        self.grid
    }
}

impl<G: GridBounds> GridCell<'_, G> {
    /// Position of this cell in a row-major flattening of its grid
    ///
    /// Equals the index the cell would have after reshaping the grid into a
    /// one-dimensional sequence of `rows * cols` cells.
    pub fn linear_index(&self) -> usize {
        self.row * self.grid.cols() + self.col
    }
}

impl<G: HasTransform> HasTransform for GridCell<'_, G> {
    // The parent transform is reported unadjusted for the cell's own
    // (row, col) offset within the grid.
    fn transform(&self) -> Affine {
        self.grid.transform()
    }
}
