//! Cell coordinates and Moore neighborhood enumeration

/// Column/row coordinate of a grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Point {
    /// Create a point from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

// Top row first, left to right within a row
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// In-bounds 8-connected neighbors of `center` in a `side x side` grid
///
/// The center itself is never included. Corners yield 3 points, edges 5 and
/// interior cells 8, always in the same order.
pub fn moore_neighbors(side: usize, center: Point) -> Vec<Point> {
    MOORE_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| {
            let x = center.x.checked_add_signed(dx)?;
            let y = center.y.checked_add_signed(dy)?;
            (x < side && y < side).then_some(Point::new(x, y))
        })
        .collect()
}
