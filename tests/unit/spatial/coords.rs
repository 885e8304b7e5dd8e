//! Tests for direct cell construction and linear-index flattening

#[cfg(test)]
mod tests {

    use griffine::{Cell, Grid, GridError, GridIndex};

    #[test]
    fn test_cell_construction_stores_coordinates() {
        let Ok(cell) = Cell::new(3, 11) else {
            unreachable!("non-negative coordinates are valid");
        };
        assert_eq!(cell.row(), 3);
        assert_eq!(cell.col(), 11);
    }

    // Direct construction rejects negatives instead of wrapping them; only
    // grid indexing resolves negative indices against an extent
    #[test]
    fn test_cell_construction_rejects_negative_row() {
        assert_eq!(
            Cell::new(-1, 0),
            Err(GridError::InvalidCoordinate {
                coordinate: "row",
                value: -1,
            })
        );
    }

    #[test]
    fn test_cell_construction_rejects_negative_col() {
        assert_eq!(
            Cell::new(0, -5),
            Err(GridError::InvalidCoordinate {
                coordinate: "col",
                value: -5,
            })
        );
    }

    // Row-major flattening on a 10x10 grid
    #[test]
    fn test_linear_index_row_major_flattening() {
        let Ok(grid) = Grid::new(10, 10) else {
            unreachable!("10x10 is a valid grid");
        };

        for ((row, col), expected) in [
            ((0, 0), 0),
            ((9, 9), 99),
            ((4, 9), 49),
            ((5, 0), 50),
            ((0, 5), 5),
        ] {
            let index = grid.cell_at(row, col).map(|cell| cell.linear_index());
            assert_eq!(index, Ok(expected), "cell ({row}, {col})");
        }
    }

    // Flattening strides by the column count, not the row count
    #[test]
    fn test_linear_index_uses_column_stride() {
        let Ok(grid) = Grid::new(10000, 5000) else {
            unreachable!("10000x5000 is a valid grid");
        };
        let index = grid.cell_at(1, 0).map(|cell| cell.linear_index());
        assert_eq!(index, Ok(5000));
    }

    // Repeated lookups of the same coordinates flatten identically
    #[test]
    fn test_linear_index_is_pure() {
        let Ok(grid) = Grid::new(17, 23) else {
            unreachable!("17x23 is a valid grid");
        };
        let first = grid.cell_at(16, 22).map(|cell| cell.linear_index());
        let second = grid.cell_at(16, 22).map(|cell| cell.linear_index());
        assert_eq!(first, second);
        assert_eq!(first, Ok(16 * 23 + 22));
    }
}
