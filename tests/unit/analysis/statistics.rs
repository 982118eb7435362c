//! Tests for grid statistics and collision counting

#[cfg(test)]
mod tests {
    use mosaic::analysis::statistics::MosaicStatistics;
    use mosaic::spatial::Image;

    // A valid coloring reports no conflicts and full usage
    // Verified by counting a cell against itself
    #[test]
    fn test_valid_grid() {
        let image = Image::<2, 4>::from_rows(&[[1, 2], [3, 4]]).unwrap();

        let statistics = MosaicStatistics::from_image(&image).unwrap();

        assert_eq!(statistics.color_counts, vec![0, 1, 1, 1, 1]);
        assert_eq!(statistics.conflicts, 0);
        assert_eq!(statistics.cells(), 4);
        assert!(statistics.is_valid());
        assert!(statistics.uses_all_colors());
    }

    // Each colliding pair is counted once, diagonals included
    // Verified by counting pairs from both ends
    #[test]
    fn test_conflict_pairs_counted_once() {
        let uniform = Image::<2, 1>::from_rows(&[[1, 1], [1, 1]]).unwrap();
        assert_eq!(MosaicStatistics::from_image(&uniform).unwrap().conflicts, 6);

        let diagonal = Image::<2, 3>::from_rows(&[[1, 2], [3, 1]]).unwrap();
        let statistics = MosaicStatistics::from_image(&diagonal).unwrap();
        assert_eq!(statistics.conflicts, 1);
        assert!(!statistics.is_valid());
    }

    // Unset cells never collide but make the grid invalid
    #[test]
    fn test_unset_cells() {
        let image = Image::<3, 6>::from_rows(&[[0, 0, 0], [0, 5, 0], [0, 0, 0]]).unwrap();

        let statistics = MosaicStatistics::from_image(&image).unwrap();

        assert_eq!(statistics.unset_cells(), 8);
        assert_eq!(statistics.conflicts, 0);
        assert_eq!(statistics.distinct_colors(), 1);
        assert!(!statistics.uses_all_colors());
        assert!(!statistics.is_valid());
    }

    #[test]
    fn test_display_summary() {
        let image = Image::<2, 6>::from_rows(&[[1, 2], [3, 0]]).unwrap();

        let statistics = MosaicStatistics::from_image(&image).unwrap();

        assert_eq!(
            statistics.to_string(),
            "4 cells, 3/6 colors, 0 conflicts, 1 unset"
        );
    }
}
