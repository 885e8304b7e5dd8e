//! Rectangular grids and bounds-checked cell lookup
//!
//! A grid is a fixed rows-by-cols coordinate space; it holds no cell data.
//! Indexing resolves negative indices against the grid extent and yields a
//! [`GridCell`] borrowing the grid. Attaching an [`Affine`] transform
//! produces a new georeferenced grid without mutating the original.

use ndarray::Array2;

use crate::error::{GridError, Result};
use crate::spatial::coords::{GridCell, resolve};
use crate::transform::{Affine, HasTransform};

/// Dimension accessors shared by every grid-like value
///
/// Tiled grids measure their dimensions in tiles rather than cells, and a
/// tile reports its own (possibly truncated) size.
pub trait GridBounds {
    /// Number of rows
    fn rows(&self) -> usize;

    /// Number of columns
    fn cols(&self) -> usize;

    /// Dimensions as a (rows, cols) pair
    fn size(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }
}

/// Bounds-checked indexing with negative-index wraparound
///
/// What indexing yields depends on the grid: plain and georeferenced grids
/// yield cells, tiled grids yield tiles, and tiles yield cells expressed in
/// base-grid coordinates.
pub trait GridIndex: GridBounds {
    /// Value produced by indexing, borrowing from the grid
    type Entry<'a>
    where
        Self: 'a;

    /// Build the entry for coordinates already resolved to be in bounds
    ///
    /// Callers normally go through [`Self::cell_at`], which performs
    /// wraparound resolution and bounds checks before delegating here.
    fn entry(&self, row: usize, col: usize) -> Self::Entry<'_>;

    /// Look up the entry at (row, col)
    ///
    /// Negative indices count back from the trailing edge, so `-1`
    /// addresses the last row or column.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either index, after resolution, lies
    /// outside the grid.
    fn cell_at(&self, row: i64, col: i64) -> Result<Self::Entry<'_>> {
        let row = resolve(row, self.rows(), "row")?;
        let col = resolve(col, self.cols(), "col")?;
        Ok(self.entry(row, col))
    }
}

fn checked_dims(rows: usize, cols: usize) -> Result<(usize, usize)> {
    if rows < 1 {
        return Err(GridError::InvalidGrid {
            dimension: "rows",
            value: rows,
        });
    }

    if cols < 1 {
        return Err(GridError::InvalidGrid {
            dimension: "cols",
            value: cols,
        });
    }

    Ok((rows, cols))
}

/// A plain rectangular grid with no georeferencing attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a grid of the given dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrid` if either dimension is below the 1x1 minimum.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let (rows, cols) = checked_dims(rows, cols)?;
        Ok(Self { rows, cols })
    }

    /// Grid matching the shape of a 2-D array
    ///
    /// Convenience for addressing raster buffers held in `ndarray` storage;
    /// the array's standard layout matches [`GridCell::linear_index`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrid` if the array is empty along either axis.
    pub fn from_array<T>(array: &Array2<T>) -> Result<Self> {
        let (rows, cols) = array.dim();
        Self::new(rows, cols)
    }

    /// A copy of this grid carrying the given transform
    pub const fn attach_transform(&self, transform: Affine) -> AffineGrid {
        AffineGrid {
            rows: self.rows,
            cols: self.cols,
            transform,
        }
    }
}

impl GridBounds for Grid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }
}

impl GridIndex for Grid {
    type Entry<'a>
        = GridCell<'a, Self>
    where
        Self: 'a;

    fn entry(&self, row: usize, col: usize) -> GridCell<'_, Self> {
        GridCell::new(row, col, self)
    }
}

/// A rectangular grid with an affine transform to a continuous space
///
/// Behaves exactly like [`Grid`] for sizing and indexing; cells looked up
/// in it additionally expose the grid's transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineGrid {
    rows: usize,
    cols: usize,
    transform: Affine,
}

impl AffineGrid {
    /// Create a georeferenced grid of the given dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrid` if either dimension is below the 1x1 minimum.
    pub fn new(rows: usize, cols: usize, transform: Affine) -> Result<Self> {
        let (rows, cols) = checked_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            transform,
        })
    }
}

impl GridBounds for AffineGrid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }
}

impl GridIndex for AffineGrid {
    type Entry<'a>
        = GridCell<'a, Self>
    where
        Self: 'a;

    fn entry(&self, row: usize, col: usize) -> GridCell<'_, Self> {
        GridCell::new(row, col, self)
    }
}

impl HasTransform for AffineGrid {
    fn transform(&self) -> Affine {
        self.transform
    }
}
