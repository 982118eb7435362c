//! Randomized repair passes over a validly colored grid
//!
//! Each cell is redrawn uniformly from the colors its neighbors leave
//! available. Draws are made by rejection sampling over `1..=COLORS`, so the
//! expected number of draws per cell is `COLORS / |available|`. The result is
//! not uniform over valid colorings; cells visited earlier in a pass constrain
//! the ones visited after them.

use rand::Rng;

use crate::io::error::{AlgorithmError, Result};
use crate::spatial::grid::Image;

/// Seedable resampler applying local recoloring passes
#[derive(Debug)]
pub struct Randomizer<R> {
    rng: R,
    draws: u64,
}

impl<R: Rng> Randomizer<R> {
    /// Wrap a random source
    pub const fn new(rng: R) -> Self {
        Self { rng, draws: 0 }
    }

    /// Total candidate draws made, rejected ones included
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    /// Give back the random source
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Redraw the color of `(x, y)` from the colors its neighbors allow
    ///
    /// Neighbor values are read as they are now, including any cells already
    /// redrawn earlier in the current pass.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for coordinates outside the grid and
    /// `NoAvailableColors` when the neighbors already hold every color
    pub fn resample<const SIDE: usize, const COLORS: usize>(
        &mut self,
        image: &mut Image<SIDE, COLORS>,
        x: usize,
        y: usize,
    ) -> Result<u8> {
        let neighbors = image.neighbors(x, y)?;
        let available = image.available_colors(&neighbors)?;
        if available.is_empty() {
            return Err(AlgorithmError::NoAvailableColors { x, y });
        }

        let color = loop {
            self.draws += 1;
            let candidate = self.rng.random_range(1..=Image::<SIDE, COLORS>::MAX_COLOR);
            if available.contains(candidate) {
                break candidate;
            }
        };

        image.set(x, y, color)?;
        Ok(color)
    }

    /// Resample every cell once, bottom row first, right to left
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::resample`]
    pub fn pass<const SIDE: usize, const COLORS: usize>(
        &mut self,
        image: &mut Image<SIDE, COLORS>,
    ) -> Result<()> {
        for y in (0..SIDE).rev() {
            for x in (0..SIDE).rev() {
                self.resample(image, x, y)?;
            }
        }
        Ok(())
    }

    /// Run `passes` consecutive passes
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::resample`]
    pub fn randomize<const SIDE: usize, const COLORS: usize>(
        &mut self,
        image: &mut Image<SIDE, COLORS>,
        passes: usize,
    ) -> Result<()> {
        for _ in 0..passes {
            self.pass(image)?;
        }
        Ok(())
    }
}
