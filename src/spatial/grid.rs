//! Fixed-size square grid of "color or unset" cells
//!
//! Dimensions and color count are const generic parameters, so the tile and
//! the full mosaic are distinct types and a tile can never be handed to code
//! expecting the full grid. Cells hold `0` for unset and `1..=COLORS` for a
//! color identifier.

use ndarray::Array2;

use crate::algorithm::colorset::ColorSet;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::point::{Point, moore_neighbors};

/// Square grid with `SIDE x SIDE` cells and `COLORS` color identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image<const SIDE: usize, const COLORS: usize> {
    /// Cell values indexed `[y, x]`
    pixels: Array2<u8>,
}

impl<const SIDE: usize, const COLORS: usize> Default for Image<SIDE, COLORS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIDE: usize, const COLORS: usize> Image<SIDE, COLORS> {
    /// Largest color identifier a cell may hold
    pub const MAX_COLOR: u8 = COLORS as u8;

    /// Create a grid with every cell unset
    pub fn new() -> Self {
        const {
            assert!(SIDE > 0, "Grid side must be positive");
            assert!(
                COLORS > 0 && COLORS <= u8::MAX as usize,
                "Color count must fit in a cell"
            );
        };

        Self {
            pixels: Array2::zeros((SIDE, SIDE)),
        }
    }

    /// Build a grid from row-major cell values
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` if any value exceeds `COLORS`
    pub fn from_rows(rows: &[[u8; SIDE]; SIDE]) -> Result<Self> {
        let mut image = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &color) in row.iter().enumerate() {
                image.set(x, y, color)?;
            }
        }
        Ok(image)
    }

    /// Side length in cells
    pub const fn side(&self) -> usize {
        SIDE
    }

    /// Number of color identifiers
    pub const fn colors(&self) -> usize {
        COLORS
    }

    const fn out_of_bounds(x: usize, y: usize) -> AlgorithmError {
        AlgorithmError::OutOfBounds { x, y, side: SIDE }
    }

    /// Read a cell, `0` meaning unset
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either coordinate is `>= SIDE`
    pub fn get(&self, x: usize, y: usize) -> Result<u8> {
        self.pixels
            .get([y, x])
            .copied()
            .ok_or_else(|| Self::out_of_bounds(x, y))
    }

    /// Write a cell; `0` unsets it
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for coordinates `>= SIDE` and `InvalidColor`
    /// for a color above `COLORS`
    pub fn set(&mut self, x: usize, y: usize, color: u8) -> Result<()> {
        if usize::from(color) > COLORS {
            return Err(AlgorithmError::InvalidColor {
                color,
                colors: COLORS,
            });
        }

        let cell = self
            .pixels
            .get_mut([y, x])
            .ok_or_else(|| Self::out_of_bounds(x, y))?;
        *cell = color;
        Ok(())
    }

    /// In-bounds 8-connected neighbors of `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `(x, y)` itself is outside the grid
    pub fn neighbors(&self, x: usize, y: usize) -> Result<Vec<Point>> {
        if x >= SIDE || y >= SIDE {
            return Err(Self::out_of_bounds(x, y));
        }
        Ok(moore_neighbors(SIDE, Point::new(x, y)))
    }

    /// Colors in `1..=COLORS` not held by any of `neighbors`
    ///
    /// Unset neighbors exclude nothing.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if any listed point is outside the grid
    pub fn available_colors(&self, neighbors: &[Point]) -> Result<ColorSet> {
        let mut available = ColorSet::all(COLORS);
        for neighbor in neighbors {
            available.remove(self.get(neighbor.x, neighbor.y)?);
        }
        Ok(available)
    }

    /// Whether every cell holds a color
    pub fn is_complete(&self) -> bool {
        self.pixels.iter().all(|&color| color != 0)
    }

    /// Number of different color identifiers present
    pub fn distinct_colors(&self) -> usize {
        let mut used = ColorSet::empty(COLORS);
        for &color in &self.pixels {
            used.insert(color);
        }
        used.len()
    }

    /// Every cell is set and exactly `COLORS` distinct colors are used
    ///
    /// Adjacency is not re-checked here; cells are only ever assigned from
    /// `available_colors`, which already excludes neighbor collisions.
    pub fn is_complete_and_valid(&self) -> bool {
        self.is_complete() && self.distinct_colors() == COLORS
    }

    /// All coordinates in row-major order
    pub fn points() -> impl Iterator<Item = Point> {
        (0..SIDE).flat_map(|y| (0..SIDE).map(move |x| Point::new(x, y)))
    }
}
