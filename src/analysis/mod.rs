//! Post-generation analysis of colored grids

/// Color histogram and neighbor collision counts
pub mod statistics;
