/// Bitset of color identifiers
pub mod colorset;
/// Solve-tile-randomize pipeline
pub mod executor;
/// Multi-pass rejection-sampling recoloring
pub mod randomizer;
/// Backtracking search for a complete tile
pub mod solver;
/// Modulo replication of a tile across a larger grid
pub mod tiler;
