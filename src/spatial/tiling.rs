//! Partitioning grids into grids of tiles
//!
//! Two entry points decide the layout. [`Tileable::tile_via`] fixes the
//! tile size and derives tile counts by ceiling division, truncating the
//! trailing row and column of tiles when the sizes do not divide evenly.
//! [`Tileable::tile_into`] fixes the tile counts and derives a tile size,
//! refusing counts that fail the [`can_tile_into`] balance rule. Both
//! delegate to a single per-type constructor once the layout is chosen.
//!
//! Tiling a georeferenced grid coarsens its transform so that one step in
//! the tile grid covers a whole tile; attaching a transform to an existing
//! tiling refines it back down to the base grid, so both levels stay
//! mutually consistent.

use crate::error::{GridError, Result};
use crate::spatial::grid::{AffineGrid, Grid, GridBounds, GridIndex};
use crate::transform::{Affine, HasTransform};

/// Whether an axis of `extent` cells splits into exactly `count` tiles
///
/// Tiles along an axis are `ceil(extent / count)` cells long; the split is
/// accepted when covering the axis consumes exactly `count` such tiles,
/// with no leftover tile needed beyond the count. The final tile may still
/// be shorter than the others: `extent` 10 splits into 4 tiles of length
/// 3, 3, 3, 1, but not into 6, which 5 tiles of length 2 already cover.
pub const fn can_tile_into(extent: usize, count: usize) -> bool {
    if extent == 0 || count == 0 {
        return false;
    }

    count == extent.div_ceil(extent.div_ceil(count))
}

fn checked_layout(grid_size: (usize, usize), tile_size: (usize, usize)) -> Result<()> {
    for (dimension, value) in [
        ("rows", grid_size.0),
        ("cols", grid_size.1),
        ("tile_rows", tile_size.0),
        ("tile_cols", tile_size.1),
    ] {
        if value < 1 {
            return Err(GridError::InvalidGrid { dimension, value });
        }
    }

    Ok(())
}

/// Grids that can be partitioned into a grid of tiles
pub trait Tileable: GridBounds + Sized {
    /// Tiled grid type produced by the partitioning operations
    type Tiled;

    /// Assemble the tiled grid from a layout
    ///
    /// `grid_size` counts tiles along each axis and `tile_size` is the
    /// nominal size of one tile. [`Self::tile_via`] and [`Self::tile_into`]
    /// compute balanced layouts before delegating here; layouts supplied
    /// directly are validated like any other grid dimensions.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrid` if any tile count or tile dimension is below
    /// the 1x1 minimum.
    fn tiled(&self, grid_size: (usize, usize), tile_size: (usize, usize))
    -> Result<Self::Tiled>;

    /// Partition into tiles the size of `pattern`
    ///
    /// Tile counts are the ceiling of this grid's dimensions over the
    /// pattern's, so when the sizes do not divide evenly the trailing row
    /// or column of tiles covers only what remains of the grid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTiling` if `pattern` exceeds this grid in either
    /// dimension.
    fn tile_via(&self, pattern: &Grid) -> Result<Self::Tiled> {
        if self.rows() < pattern.rows() || self.cols() < pattern.cols() {
            return Err(GridError::InvalidTiling {
                grid: self.size(),
                pattern: pattern.size(),
                reason: "tile size exceeds the grid",
            });
        }

        let counts = (
            self.rows().div_ceil(pattern.rows()),
            self.cols().div_ceil(pattern.cols()),
        );

        self.tiled(counts, pattern.size())
    }

    /// Partition into a `pattern`-shaped grid of tiles
    ///
    /// `pattern`'s dimensions are the desired number of tiles along each
    /// axis. The tile size is the ceiling of the grid extent over the
    /// count, accepted per axis only when it passes [`can_tile_into`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidTiling` if either axis fails the balance rule.
    fn tile_into(&self, pattern: &Grid) -> Result<Self::Tiled> {
        if !(can_tile_into(self.rows(), pattern.rows())
            && can_tile_into(self.cols(), pattern.cols()))
        {
            return Err(GridError::InvalidTiling {
                grid: self.size(),
                pattern: pattern.size(),
                reason: "tile counts do not balance under ceiling division",
            });
        }

        let tile_size = (
            self.rows().div_ceil(pattern.rows()),
            self.cols().div_ceil(pattern.cols()),
        );

        self.tiled(pattern.size(), tile_size)
    }
}

impl Tileable for Grid {
    type Tiled = TiledGrid;

    fn tiled(&self, grid_size: (usize, usize), tile_size: (usize, usize)) -> Result<TiledGrid> {
        checked_layout(grid_size, tile_size)?;

        Ok(TiledGrid {
            rows: grid_size.0,
            cols: grid_size.1,
            tile_rows: tile_size.0,
            tile_cols: tile_size.1,
            base: *self,
        })
    }
}

impl Tileable for AffineGrid {
    type Tiled = TiledAffineGrid;

    // The tile-level transform steps one whole tile at a time, so the base
    // transform is coarsened by the tile size along each axis.
    fn tiled(
        &self,
        grid_size: (usize, usize),
        tile_size: (usize, usize),
    ) -> Result<TiledAffineGrid> {
        checked_layout(grid_size, tile_size)?;

        Ok(TiledAffineGrid {
            rows: grid_size.0,
            cols: grid_size.1,
            tile_rows: tile_size.0,
            tile_cols: tile_size.1,
            transform: self.transform().coarsened(tile_size.0, tile_size.1),
            base: *self,
        })
    }
}

/// Accessors shared by tiled grids
///
/// [`GridBounds`] dimensions of a tiled grid count tiles; this trait adds
/// the nominal size of one tile and the extent of the underlying base
/// grid, which together determine where trailing tiles truncate.
pub trait TileLayout: GridBounds {
    /// Rows in one nominal (untruncated) tile
    fn tile_rows(&self) -> usize;

    /// Columns in one nominal tile
    fn tile_cols(&self) -> usize;

    /// Nominal tile size as a (rows, cols) pair
    fn tile_size(&self) -> (usize, usize) {
        (self.tile_rows(), self.tile_cols())
    }

    /// Extent of the underlying base grid as a (rows, cols) pair
    fn base_size(&self) -> (usize, usize);
}

/// A grid partitioned into a grid of tiles
///
/// Dimensions count tiles, not cells: a 10000x5000 grid tiled via
/// 1024x1024 tiles is a 10x5 `TiledGrid`. Indexing yields a [`Tile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiledGrid {
    rows: usize,
    cols: usize,
    tile_rows: usize,
    tile_cols: usize,
    base: Grid,
}

impl TiledGrid {
    /// The grid this tiling decomposes
    pub const fn base_grid(&self) -> &Grid {
        &self.base
    }

    /// Georeference this tiling, treating `transform` as tile-level
    ///
    /// The base grid's transform is derived by refining the scale terms by
    /// the tile size, so `tile.a == base.a * tile_cols` and
    /// `tile.e == base.e * tile_rows` hold for the resulting pair. The
    /// returned tiling wraps a freshly georeferenced copy of the base
    /// grid; this tiling is unchanged.
    pub fn attach_transform(&self, transform: Affine) -> TiledAffineGrid {
        let base = self
            .base
            .attach_transform(transform.refined(self.tile_rows, self.tile_cols));

        TiledAffineGrid {
            rows: self.rows,
            cols: self.cols,
            tile_rows: self.tile_rows,
            tile_cols: self.tile_cols,
            base,
            transform,
        }
    }
}

impl GridBounds for TiledGrid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }
}

impl TileLayout for TiledGrid {
    fn tile_rows(&self) -> usize {
        self.tile_rows
    }

    fn tile_cols(&self) -> usize {
        self.tile_cols
    }

    fn base_size(&self) -> (usize, usize) {
        self.base.size()
    }
}

impl GridIndex for TiledGrid {
    type Entry<'a>
        = Tile<'a, Self>
    where
        Self: 'a;

    fn entry(&self, row: usize, col: usize) -> Tile<'_, Self> {
        Tile::new(row, col, self)
    }
}

/// A tiled grid whose base grid and tile grid both carry transforms
///
/// Created by tiling an [`AffineGrid`] or by attaching a transform to a
/// [`TiledGrid`]; either way the two transforms differ exactly by the tile
/// size in their scale terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiledAffineGrid {
    rows: usize,
    cols: usize,
    tile_rows: usize,
    tile_cols: usize,
    base: AffineGrid,
    transform: Affine,
}

impl TiledAffineGrid {
    /// The georeferenced grid this tiling decomposes
    pub const fn base_grid(&self) -> &AffineGrid {
        &self.base
    }
}

impl GridBounds for TiledAffineGrid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }
}

impl TileLayout for TiledAffineGrid {
    fn tile_rows(&self) -> usize {
        self.tile_rows
    }

    fn tile_cols(&self) -> usize {
        self.tile_cols
    }

    fn base_size(&self) -> (usize, usize) {
        self.base.size()
    }
}

impl GridIndex for TiledAffineGrid {
    type Entry<'a>
        = Tile<'a, Self>
    where
        Self: 'a;

    fn entry(&self, row: usize, col: usize) -> Tile<'_, Self> {
        Tile::new(row, col, self)
    }
}

impl HasTransform for TiledAffineGrid {
    fn transform(&self) -> Affine {
        self.transform
    }
}

/// One tile of a tiled grid
///
/// A tile is both a cell of the tile grid, addressed by [`Self::row`] and
/// [`Self::col`], and a grid in its own right. Its size equals the nominal
/// tile size except on the trailing edge, where it covers only what
/// remains of the base grid. Indexing into a tile yields a [`TiledCell`]
/// whose coordinates are absolute in the base grid.
#[derive(Debug, Clone, Copy)]
pub struct Tile<'g, T> {
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
    grid: &'g T,
}

impl<'g, T: TileLayout> Tile<'g, T> {
    // `row`/`col` must already be resolved against the tile grid.
    pub(crate) fn new(row: usize, col: usize, grid: &'g T) -> Self {
        let (base_rows, base_cols) = grid.base_size();
        let rows = grid
            .tile_rows()
            .min(base_rows.saturating_sub(row * grid.tile_rows()));
        let cols = grid
            .tile_cols()
            .min(base_cols.saturating_sub(col * grid.tile_cols()));

        Self {
            row,
            col,
            rows,
            cols,
            grid,
        }
    }

    /// Row of this tile within the tile grid
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Column of this tile within the tile grid
    pub const fn col(&self) -> usize {
        self.col
    }

    /// The tiled grid this tile belongs to
    pub const fn grid(&self) -> &'g T {
        self.grid
    }
}

impl<T> GridBounds for Tile<'_, T> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }
}

impl<'g, T: TileLayout> GridIndex for Tile<'g, T> {
    type Entry<'a>
        = TiledCell<'a, T>
    where
        Self: 'a;

    // Tile-relative coordinates shift by this tile's offset in the base
    // grid, which is measured in nominal tile sizes even for truncated
    // trailing tiles.
    fn entry(&self, row: usize, col: usize) -> TiledCell<'_, T> {
        TiledCell {
            row: self.row * self.grid.tile_rows() + row,
            col: self.col * self.grid.tile_cols() + col,
            tile_row: self.row,
            tile_col: self.col,
            grid: self.grid,
        }
    }
}

impl<T: HasTransform> HasTransform for Tile<'_, T> {
    // Tile-level transform of the parent tiling, unadjusted for the
    // tile's own position.
    fn transform(&self) -> Affine {
        self.grid.transform()
    }
}

/// A base-grid cell reached by indexing through a tile
///
/// Coordinates are absolute in the ultimate base grid;
/// [`Self::tile_row`] and [`Self::tile_col`] record which tile the lookup
/// went through.
#[derive(Debug, Clone, Copy)]
pub struct TiledCell<'g, T> {
    row: usize,
    col: usize,
    tile_row: usize,
    tile_col: usize,
    grid: &'g T,
}

impl<'g, T> TiledCell<'g, T> {
    /// Row of this cell in the base grid
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Column of this cell in the base grid
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Row of the tile this cell was reached through
    pub const fn tile_row(&self) -> usize {
        self.tile_row
    }

    /// Column of the tile this cell was reached through
    pub const fn tile_col(&self) -> usize {
        self.tile_col
    }

    /// The tiled grid this cell was reached through
    pub const fn grid(&self) -> &'g T {
        self.grid
    }
}

impl<T: HasTransform> HasTransform for TiledCell<'_, T> {
    fn transform(&self) -> Affine {
        self.grid.transform()
    }
}
