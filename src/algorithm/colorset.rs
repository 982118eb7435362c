//! Sets of colors still open to a cell
//!
//! A cell may take any color its neighbors do not hold. Both the tile solver
//! and the randomizer ask the grid for this set and then pick from it.

use bitvec::{bitvec, vec::BitVec};
use std::fmt;

/// Colors a cell could take, indexed by color id
///
/// Ids run `1..=colors`; `0` marks an unset cell and is never available.
/// Iteration is in ascending id order, which fixes the solver's candidate order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorSet {
    bits: BitVec,
    colors: usize,
}

impl ColorSet {
    /// No color open, as for a cell whose neighbors hold every color
    pub fn empty(colors: usize) -> Self {
        Self {
            bits: bitvec![0; colors],
            colors,
        }
    }

    /// Every color open, as for a cell with no set neighbors
    pub fn all(colors: usize) -> Self {
        Self {
            bits: bitvec![1; colors],
            colors,
        }
    }

    /// Reopen a color; `0` and ids past the palette size are ignored
    pub fn insert(&mut self, color: u8) {
        if let Some(index) = self.index(color) {
            self.bits.set(index, true);
        }
    }

    /// Rule out a color held by a neighbor; `0` leaves the set unchanged
    pub fn remove(&mut self, color: u8) {
        if let Some(index) = self.index(color) {
            self.bits.set(index, false);
        }
    }

    /// Whether `color` may be placed
    pub fn contains(&self, color: u8) -> bool {
        self.index(color)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Whether the neighbors leave no color at all
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Number of open colors
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Open colors, lowest id first
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter_ones().map(|index| (index + 1) as u8)
    }

    /// Open colors collected in ascending order
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }

    fn index(&self, color: u8) -> Option<usize> {
        usize::from(color)
            .checked_sub(1)
            .filter(|&index| index < self.colors)
    }
}

impl fmt::Display for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} colors open: {:?}", self.len(), self.colors, self.to_vec())
    }
}
