//! Summary statistics for a colored grid
//!
//! Used after generation to confirm the mosaic is fully set, free of
//! neighbor collisions and uses every available color.

use std::fmt;

use crate::io::error::Result;
use crate::spatial::grid::Image;

/// Color histogram and collision count of a grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MosaicStatistics {
    /// Cells per color identifier; index 0 counts unset cells
    pub color_counts: Vec<usize>,
    /// Unordered 8-neighbor pairs holding the same color
    pub conflicts: usize,
}

impl MosaicStatistics {
    /// Scan every cell of `image`
    ///
    /// # Errors
    ///
    /// Propagates `OutOfBounds` from grid access
    pub fn from_image<const SIDE: usize, const COLORS: usize>(
        image: &Image<SIDE, COLORS>,
    ) -> Result<Self> {
        let mut color_counts = vec![0; COLORS + 1];
        let mut conflicts = 0;

        for point in Image::<SIDE, COLORS>::points() {
            let color = image.get(point.x, point.y)?;
            if let Some(count) = color_counts.get_mut(usize::from(color)) {
                *count += 1;
            }
            if color == 0 {
                continue;
            }

            for neighbor in image.neighbors(point.x, point.y)? {
                // Each pair is seen from both ends
                if neighbor > point && image.get(neighbor.x, neighbor.y)? == color {
                    conflicts += 1;
                }
            }
        }

        Ok(Self {
            color_counts,
            conflicts,
        })
    }

    /// Total number of cells scanned
    pub fn cells(&self) -> usize {
        self.color_counts.iter().sum()
    }

    /// Number of cells left unset
    pub fn unset_cells(&self) -> usize {
        self.color_counts.first().copied().unwrap_or(0)
    }

    /// Number of color identifiers held by at least one cell
    pub fn distinct_colors(&self) -> usize {
        self.color_counts
            .iter()
            .skip(1)
            .filter(|&&count| count > 0)
            .count()
    }

    /// Whether every available color appears somewhere
    pub fn uses_all_colors(&self) -> bool {
        self.distinct_colors() == self.color_counts.len().saturating_sub(1)
    }

    /// Fully set with no neighbor collisions
    pub fn is_valid(&self) -> bool {
        self.conflicts == 0 && self.unset_cells() == 0
    }
}

impl fmt::Display for MosaicStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cells, {}/{} colors, {} conflicts, {} unset",
            self.cells(),
            self.distinct_colors(),
            self.color_counts.len().saturating_sub(1),
            self.conflicts,
            self.unset_cells()
        )
    }
}
