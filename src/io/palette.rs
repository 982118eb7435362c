//! Fixed RGB palette indexed by color identifier

use crate::io::error::{AlgorithmError, Result};
use image::Rgb;

/// Color rendered for unset cells
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Output colors; identifier `n` maps to `PALETTE[n - 1]`
pub const PALETTE: [Rgb<u8>; 6] = [
    Rgb([23, 37, 42]),
    Rgb([43, 122, 120]),
    Rgb([58, 175, 169]),
    Rgb([159, 217, 215]),
    Rgb([222, 242, 241]),
    Rgb([238, 238, 238]),
];

/// Resolve a color identifier to its RGB value
///
/// # Errors
///
/// Returns `InvalidColor` if the identifier is past the end of the palette
pub fn rgb_for(color: u8) -> Result<Rgb<u8>> {
    if color == 0 {
        return Ok(BLACK);
    }

    PALETTE
        .get(usize::from(color) - 1)
        .copied()
        .ok_or(AlgorithmError::InvalidColor {
            color,
            colors: PALETTE.len(),
        })
}
