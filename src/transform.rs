//! Affine transform coefficients and the scale algebra used when grids nest
//!
//! A transform maps (col, row) grid coordinates to a continuous (x, y)
//! coordinate space. When a georeferenced grid is tiled, the scale terms are
//! multiplied by the tile size so that one step in the tile grid covers a
//! whole tile; attaching a transform to an existing tiling divides the scale
//! terms to recover the base-grid transform. The two directions are exact
//! inverses, keeping every grid in a lineage mutually consistent.

/// Six-coefficient affine transform mapping (col, row) to (x, y)
///
/// Follows the GDAL coefficient order: `x = a*col + b*row + c` and
/// `y = d*col + e*row + f`. Coefficients are not validated; callers own
/// their meaning, including degenerate or non-invertible choices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    /// Horizontal scale: x units per column step
    pub a: f64,
    /// Row shear term contributing to x
    pub b: f64,
    /// Horizontal offset: x of the grid origin
    pub c: f64,
    /// Column shear term contributing to y
    pub d: f64,
    /// Vertical scale: y units per row step (negative for north-up rasters)
    pub e: f64,
    /// Vertical offset: y of the grid origin
    pub f: f64,
}

impl Affine {
    /// Create a transform from its six coefficients
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// The identity transform, mapping (col, row) to (col, row)
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0)
    }

    /// Map grid coordinates to the continuous coordinate space
    pub fn apply(&self, col: f64, row: f64) -> (f64, f64) {
        let x = self.a.mul_add(col, self.b.mul_add(row, self.c));
        let y = self.d.mul_add(col, self.e.mul_add(row, self.f));
        (x, y)
    }

    /// Transform whose unit step covers one whole tile instead of one cell
    ///
    /// The horizontal scale is multiplied by the tile width and the vertical
    /// scale by the tile height; shear and offset terms are unchanged.
    pub fn coarsened(&self, tile_rows: usize, tile_cols: usize) -> Self {
        Self {
            a: self.a * tile_cols as f64,
            e: self.e * tile_rows as f64,
            ..*self
        }
    }

    /// Base-grid transform recovered from a tile-level transform
    ///
    /// Inverse of [`Self::coarsened`]: divides the scale terms by the tile
    /// size so that one step covers a single base cell again.
    pub fn refined(&self, tile_rows: usize, tile_cols: usize) -> Self {
        Self {
            a: self.a / tile_cols as f64,
            e: self.e / tile_rows as f64,
            ..*self
        }
    }
}

/// Capability trait for grid values carrying a georeferencing transform
///
/// Implemented by transform-carrying grids and by the cells and tiles
/// derived from them. Derived values report their parent grid's transform
/// unadjusted for their own position within it.
pub trait HasTransform {
    /// The affine transform mapping this value's coordinates to world space
    fn transform(&self) -> Affine;
}
