//! Spatial data structures
//!
//! This module contains:
//! - The fixed-size color grid
//! - Point coordinates and Moore neighborhood enumeration

/// Color grid with bounds-checked access and availability queries
pub mod grid;
/// Coordinates and neighborhood enumeration
pub mod point;

pub use grid::Image;
pub use point::Point;
