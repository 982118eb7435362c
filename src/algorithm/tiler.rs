use crate::io::error::Result;
use crate::spatial::grid::Image;

/// Repeat a tile across a larger grid by coordinate modulo
///
/// Sets `full[x][y] = tile[x mod TILE_SIDE][y mod TILE_SIDE]`. Adjacency
/// across tile repeats is not re-checked.
///
/// # Errors
///
/// Returns `InvalidColor` if the tile holds a color above `COLORS`
pub fn tile_image<
    const TILE_SIDE: usize,
    const TILE_COLORS: usize,
    const SIDE: usize,
    const COLORS: usize,
>(
    tile: &Image<TILE_SIDE, TILE_COLORS>,
) -> Result<Image<SIDE, COLORS>> {
    let mut full = Image::new();
    for point in Image::<SIDE, COLORS>::points() {
        let color = tile.get(point.x % TILE_SIDE, point.y % TILE_SIDE)?;
        full.set(point.x, point.y, color)?;
    }
    Ok(full)
}
