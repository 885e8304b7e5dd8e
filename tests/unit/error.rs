//! Tests for error display formatting and the error trait surface

#[cfg(test)]
mod tests {

    use griffine::GridError;
    use std::error::Error;

    // Each variant renders its full context so callers can log errors
    // without unpacking fields
    #[test]
    fn test_invalid_grid_display() {
        let error = GridError::InvalidGrid {
            dimension: "rows",
            value: 0,
        };
        assert_eq!(error.to_string(), "Grid rows must be 1 or greater, got 0");
    }

    // Tile-layout failures are distinguishable from base-grid failures
    #[test]
    fn test_invalid_grid_display_names_tile_dimensions() {
        let error = GridError::InvalidGrid {
            dimension: "tile_cols",
            value: 0,
        };
        assert_eq!(
            error.to_string(),
            "Grid tile_cols must be 1 or greater, got 0"
        );
    }

    #[test]
    fn test_invalid_coordinate_display() {
        let error = GridError::InvalidCoordinate {
            coordinate: "col",
            value: -7,
        };
        assert_eq!(error.to_string(), "Cell col must be 0 or greater, got -7");
    }

    #[test]
    fn test_out_of_bounds_display() {
        let error = GridError::OutOfBounds {
            axis: "col",
            index: 5000,
            extent: 5000,
        };
        assert_eq!(error.to_string(), "Index 5000 outside grid col extent 5000");
    }

    #[test]
    fn test_invalid_tiling_display() {
        let error = GridError::InvalidTiling {
            grid: (100, 100),
            pattern: (128, 128),
            reason: "tile size exceeds the grid",
        };
        assert_eq!(
            error.to_string(),
            "Cannot tile 100x100 grid with 128x128 pattern: tile size exceeds the grid"
        );
    }

    // Grid errors carry no underlying cause
    #[test]
    fn test_errors_have_no_source() {
        let error = GridError::InvalidGrid {
            dimension: "cols",
            value: 0,
        };
        assert!(error.source().is_none());
    }

    // Identical inputs produce identical errors; equality makes that
    // checkable in one assertion
    #[test]
    fn test_errors_compare_by_value() {
        let first = GridError::OutOfBounds {
            axis: "row",
            index: -11,
            extent: 10,
        };
        let second = GridError::OutOfBounds {
            axis: "row",
            index: -11,
            extent: 10,
        };
        assert_eq!(first, second);
    }
}
