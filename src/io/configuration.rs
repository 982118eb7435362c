//! Grid dimensions, color counts and runtime defaults

use crate::io::palette::PALETTE;

// Tile solved once by backtracking, then repeated across the full grid
/// Side length of the repeating tile
pub const TILE_SIDE: usize = 4;
/// Number of colors the tile must use exactly
pub const TILE_COLORS: usize = 4;

/// Side length of the generated mosaic
pub const FULL_SIDE: usize = 512;
/// Number of colors available to the randomizer
pub const FULL_COLORS: usize = 6;

/// Number of resampling passes over the full grid
pub const RANDOMIZER_PASSES: usize = 4;

/// Maximum channel value written in the image header
pub const MAX_CHANNEL_VALUE: u8 = 255;

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

const _: () = assert!(FULL_COLORS <= PALETTE.len(), "Not enough palette colors");
const _: () = assert!(TILE_COLORS <= FULL_COLORS, "Tile uses colors the mosaic lacks");
