//! Tests for Moore neighborhood enumeration

#[cfg(test)]
mod tests {
    use mosaic::spatial::point::{Point, moore_neighbors};

    // Interior cells list all eight neighbors, top row first
    // Verified by swapping the row and column loop order
    #[test]
    fn test_interior_neighbor_order() {
        let neighbors = moore_neighbors(3, Point::new(1, 1));

        assert_eq!(
            neighbors,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
    }

    // Corner at the origin must not wrap below zero
    // Verified by replacing checked arithmetic with wrapping arithmetic
    #[test]
    fn test_origin_corner() {
        let neighbors = moore_neighbors(4, Point::new(0, 0));

        assert_eq!(
            neighbors,
            vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    // Far corner must not reach past the side
    // Verified by using <= instead of < for the upper bound
    #[test]
    fn test_far_corner() {
        let neighbors = moore_neighbors(4, Point::new(3, 3));

        assert_eq!(
            neighbors,
            vec![Point::new(2, 2), Point::new(3, 2), Point::new(2, 3)]
        );
    }

    // A single cell grid has no neighbors
    #[test]
    fn test_single_cell_grid() {
        assert!(moore_neighbors(1, Point::new(0, 0)).is_empty());
    }

    #[test]
    fn test_point_ordering_is_column_major() {
        assert!(Point::new(0, 5) < Point::new(1, 0));
        assert!(Point::new(2, 1) < Point::new(2, 2));
    }
}
