//! Recursively tileable grids with affine georeferencing
//!
//! Models rectangular grids of cells that partition into rectangular tiles,
//! optionally carrying an affine transform from grid coordinates to a
//! continuous coordinate space, as used in raster and tile-based geospatial
//! processing. Grids, tiles, and cells are immutable value types: every
//! construction and lookup is a pure computation, safe to share across
//! threads without synchronization.
//!
//! The crate holds no pixel data and performs no I/O. It answers layout
//! questions: how a grid decomposes into tiles, which base-grid cell a tile
//! lookup lands on, and how a transform rescales as it propagates between a
//! grid and its tiling.

#![forbid(unsafe_code)]

/// Error types for grid construction, indexing, and tiling
pub mod error;
/// Grid, cell, and tiling data structures
pub mod spatial;
/// Affine transform coefficients and the scale algebra used when grids nest
pub mod transform;

pub use error::{GridError, Result};
pub use spatial::coords::{Cell, GridCell};
pub use spatial::grid::{AffineGrid, Grid, GridBounds, GridIndex};
pub use spatial::tiling::{
    Tile, TileLayout, Tileable, TiledAffineGrid, TiledCell, TiledGrid, can_tile_into,
};
pub use transform::{Affine, HasTransform};
