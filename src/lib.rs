//! Square pixel mosaics in which no two 8-connected neighbors share a color
//!
//! A small tile is colored by backtracking search so that it is complete and
//! uses every tile color. The tile is repeated across the full grid, and
//! randomized passes then redraw each cell among the colors its neighbors
//! leave available. The finished grid is written as a plain-text `P3` image.

#![forbid(unsafe_code)]

/// Tile search, tiling, randomization and pipeline orchestration
pub mod algorithm;
/// Post-generation checks on colored grids
pub mod analysis;
/// Configuration, errors, palette, serialization and the command line
pub mod io;
/// Grid storage and neighborhood geometry
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
