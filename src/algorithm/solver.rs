//! Depth-first backtracking search for a fully colored tile
//!
//! The search starts at the top-left cell and spreads through the Moore
//! neighborhood: each cell tries its available colors in ascending order and,
//! after every assignment, descends into each of its neighbors in turn. A cell
//! that is already set contributes nothing and its parent simply moves on to
//! the next neighbor. When every color of a cell has been tried without
//! completing the grid the cell is unset again and control returns to its
//! parent.
//!
//! Recursion is replaced by an explicit stack of frames, each recording where
//! its cell resumes (next candidate color, next neighbor).

use crate::io::error::Result;
use crate::spatial::grid::Image;
use crate::spatial::point::Point;

/// Counters describing how much work a search performed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverStats {
    /// Cells entered, including ones that were already set
    pub visits: usize,
    /// Tentative color assignments
    pub assignments: usize,
    /// Cells unset after exhausting their candidates
    pub backtracks: usize,
}

#[derive(Debug)]
struct Frame {
    point: Point,
    neighbors: Vec<Point>,
    candidates: Vec<u8>,
    next_candidate: usize,
    next_neighbor: usize,
}

/// Backtracking tile solver
#[derive(Clone, Copy, Debug, Default)]
pub struct TileSolver {
    stats: SolverStats,
}

impl TileSolver {
    /// Create a solver with zeroed statistics
    pub const fn new() -> Self {
        Self {
            stats: SolverStats {
                visits: 0,
                assignments: 0,
                backtracks: 0,
            },
        }
    }

    /// Work performed by all searches run with this solver
    pub const fn stats(&self) -> SolverStats {
        self.stats
    }

    /// Color `image` in place so that it is complete and uses every color
    ///
    /// Returns `Ok(true)` with the grid left in its solved state, or
    /// `Ok(false)` once the root cell has exhausted every candidate. A grid
    /// that is already complete and valid is accepted as is.
    ///
    /// # Errors
    ///
    /// Propagates `OutOfBounds` from grid access, which only occurs if the
    /// neighborhood enumeration is broken
    pub fn solve<const SIDE: usize, const COLORS: usize>(
        &mut self,
        image: &mut Image<SIDE, COLORS>,
    ) -> Result<bool> {
        if image.is_complete_and_valid() {
            return Ok(true);
        }

        let mut stack = Vec::with_capacity(SIDE * SIDE);
        if let Some(root) = self.enter(image, Point::new(0, 0))? {
            stack.push(root);
        }

        while let Some(frame) = stack.last_mut() {
            if let Some(&neighbor) = frame.neighbors.get(frame.next_neighbor) {
                frame.next_neighbor += 1;
                if let Some(child) = self.enter(image, neighbor)? {
                    stack.push(child);
                }
                continue;
            }

            if let Some(&color) = frame.candidates.get(frame.next_candidate) {
                frame.next_candidate += 1;
                frame.next_neighbor = 0;
                image.set(frame.point.x, frame.point.y, color)?;
                self.stats.assignments += 1;

                if image.is_complete_and_valid() {
                    return Ok(true);
                }
                continue;
            }

            image.set(frame.point.x, frame.point.y, 0)?;
            self.stats.backtracks += 1;
            stack.pop();
        }

        Ok(false)
    }

    // Frames start with their neighbor cursor exhausted so the first step
    // assigns a candidate color.
    fn enter<const SIDE: usize, const COLORS: usize>(
        &mut self,
        image: &Image<SIDE, COLORS>,
        point: Point,
    ) -> Result<Option<Frame>> {
        self.stats.visits += 1;

        if image.get(point.x, point.y)? != 0 {
            return Ok(None);
        }

        let neighbors = image.neighbors(point.x, point.y)?;
        let candidates = image.available_colors(&neighbors)?.to_vec();

        Ok(Some(Frame {
            point,
            next_neighbor: neighbors.len(),
            neighbors,
            candidates,
            next_candidate: 0,
        }))
    }
}
