//! Tests for grid access, neighborhoods and availability queries

#[cfg(test)]
mod tests {
    use mosaic::AlgorithmError;
    use mosaic::spatial::{Image, Point};
    use std::collections::HashSet;

    // Corners have 3 neighbors, edges 5 and interior cells 8, never the cell itself
    // Verified by dropping the self-exclusion offset check
    #[test]
    fn test_neighbor_counts_and_uniqueness() {
        let image = Image::<5, 3>::new();

        for point in Image::<5, 3>::points() {
            let neighbors = image.neighbors(point.x, point.y).unwrap();
            let unique: HashSet<Point> = neighbors.iter().copied().collect();

            let on_x_edge = point.x == 0 || point.x == 4;
            let on_y_edge = point.y == 0 || point.y == 4;
            let expected = match (on_x_edge, on_y_edge) {
                (true, true) => 3,
                (true, false) | (false, true) => 5,
                (false, false) => 8,
            };

            assert_eq!(neighbors.len(), expected, "at {point:?}");
            assert_eq!(unique.len(), neighbors.len(), "duplicates at {point:?}");
            assert!(!unique.contains(&point));
            for neighbor in &neighbors {
                assert!(neighbor.x.abs_diff(point.x) <= 1);
                assert!(neighbor.y.abs_diff(point.y) <= 1);
                assert!(neighbor.x < 5 && neighbor.y < 5);
            }
        }
    }

    // Reads and writes outside the grid fail instead of touching memory
    // Verified by clamping coordinates in get
    #[test]
    fn test_out_of_bounds_access() {
        let mut image = Image::<4, 4>::new();

        assert!(matches!(
            image.get(4, 0),
            Err(AlgorithmError::OutOfBounds { x: 4, y: 0, side: 4 })
        ));
        assert!(matches!(
            image.set(0, 7, 1),
            Err(AlgorithmError::OutOfBounds { x: 0, y: 7, side: 4 })
        ));
        assert!(matches!(
            image.neighbors(9, 9),
            Err(AlgorithmError::OutOfBounds { .. })
        ));
    }

    // Colors above the grid's color count are rejected, zero unsets
    // Verified by removing the color range check in set
    #[test]
    fn test_set_color_range() {
        let mut image = Image::<2, 3>::new();

        image.set(1, 0, 3).unwrap();
        assert_eq!(image.get(1, 0).unwrap(), 3);

        assert!(matches!(
            image.set(1, 0, 4),
            Err(AlgorithmError::InvalidColor { color: 4, colors: 3 })
        ));

        image.set(1, 0, 0).unwrap();
        assert_eq!(image.get(1, 0).unwrap(), 0);
    }

    // x selects the column and y the row
    // Verified by transposing the index order
    #[test]
    fn test_coordinates_are_column_then_row() {
        let image = Image::<3, 9>::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();

        assert_eq!(image.get(2, 0).unwrap(), 3);
        assert_eq!(image.get(0, 2).unwrap(), 7);
    }

    // Available colors are all colors minus the neighbors' colors; unset excludes nothing
    // Verified by removing zero instead of skipping it
    #[test]
    fn test_available_colors() {
        let image = Image::<3, 6>::from_rows(&[[1, 0, 2], [0, 0, 0], [5, 1, 0]]).unwrap();
        let neighbors = image.neighbors(1, 1).unwrap();

        let available = image.available_colors(&neighbors).unwrap();
        assert_eq!(available.to_vec(), vec![3, 4, 6]);

        let corner = image.neighbors(2, 2).unwrap();
        let available = image.available_colors(&corner).unwrap();
        assert_eq!(available.to_vec(), vec![2, 3, 4, 5, 6]);
    }

    // Neighbor lists with foreign points are rejected
    #[test]
    fn test_available_colors_rejects_out_of_range_points() {
        let image = Image::<2, 2>::new();

        let result = image.available_colors(&[Point::new(0, 0), Point::new(2, 0)]);
        assert!(matches!(result, Err(AlgorithmError::OutOfBounds { .. })));
    }

    // Completeness requires every cell set and exactly COLORS distinct colors
    // Verified by checking only that no cell is unset
    #[test]
    fn test_is_complete_and_valid() {
        let full = Image::<2, 4>::from_rows(&[[1, 2], [3, 4]]).unwrap();
        assert!(full.is_complete_and_valid());

        let missing_color = Image::<2, 4>::from_rows(&[[1, 2], [3, 1]]).unwrap();
        assert!(missing_color.is_complete());
        assert!(!missing_color.is_complete_and_valid());

        let unset_cell = Image::<2, 4>::from_rows(&[[1, 2], [3, 0]]).unwrap();
        assert!(!unset_cell.is_complete());
        assert!(!unset_cell.is_complete_and_valid());
    }

    #[test]
    fn test_distinct_colors() {
        let image = Image::<2, 6>::from_rows(&[[6, 6], [0, 2]]).unwrap();
        assert_eq!(image.distinct_colors(), 2);
        assert_eq!(Image::<2, 6>::new().distinct_colors(), 0);
    }

    // Points are produced row by row
    #[test]
    fn test_points_row_major() {
        let points: Vec<Point> = Image::<2, 1>::points().collect();

        assert_eq!(
            points,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_new_grid_is_unset() {
        let image = Image::<3, 2>::default();

        assert_eq!(image.side(), 3);
        assert_eq!(image.colors(), 2);
        assert_eq!(Image::<3, 2>::MAX_COLOR, 2);
        for point in Image::<3, 2>::points() {
            assert_eq!(image.get(point.x, point.y).unwrap(), 0);
        }
    }

    #[test]
    fn test_from_rows_rejects_invalid_color() {
        let result = Image::<2, 2>::from_rows(&[[1, 2], [3, 1]]);
        assert!(matches!(
            result,
            Err(AlgorithmError::InvalidColor { color: 3, colors: 2 })
        ));
    }
}
