//! Spatial data structures: grids, cells, and tilings
//!
//! This module contains the coordinate model:
//! - Cell addressing and linear-index flattening
//! - Rectangular grids with bounds-checked, wraparound indexing
//! - Partitioning grids into grids of tiles

/// Cell addressing primitives and index resolution
pub mod coords;
/// Rectangular grids and bounds-checked cell lookup
pub mod grid;
/// Partitioning grids into grids of tiles
pub mod tiling;

pub use grid::Grid;
