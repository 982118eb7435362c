//! Plain-text `P3` pixmap serialization

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::Rgb;

use crate::io::configuration::MAX_CHANNEL_VALUE;
use crate::io::error::{AlgorithmError, Result, write_error};
use crate::io::palette::rgb_for;
use crate::spatial::grid::Image;

/// Anything that can be read out pixel by pixel
pub trait PixelSource {
    /// Width and height in pixels
    fn dimensions(&self) -> (usize, usize);

    /// RGB value of the pixel at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns an error for coordinates outside the source or values with no
    /// RGB mapping
    fn color_at(&self, x: usize, y: usize) -> Result<Rgb<u8>>;
}

impl<const SIDE: usize, const COLORS: usize> PixelSource for Image<SIDE, COLORS> {
    fn dimensions(&self) -> (usize, usize) {
        (SIDE, SIDE)
    }

    fn color_at(&self, x: usize, y: usize) -> Result<Rgb<u8>> {
        rgb_for(self.get(x, y)?)
    }
}

/// Stream `source` as a `P3` image, one text line per pixel row
///
/// `destination` only labels I/O errors.
///
/// # Errors
///
/// Returns an error if a pixel cannot be resolved or the writer fails
pub fn write_ppm<W: Write>(
    source: &impl PixelSource,
    writer: &mut W,
    destination: &Path,
) -> Result<()> {
    let (width, height) = source.dimensions();

    write!(writer, "P3\n{width} {height}\n{MAX_CHANNEL_VALUE}\n")
        .map_err(write_error(destination, "write header"))?;

    for y in 0..height {
        for x in 0..width {
            let Rgb([red, green, blue]) = source.color_at(x, y)?;
            let separator = if x > 0 { " " } else { "" };
            write!(writer, "{separator}{red} {green} {blue}")
                .map_err(write_error(destination, "write pixel"))?;
        }
        writeln!(writer).map_err(write_error(destination, "write row"))?;
    }

    writer
        .flush()
        .map_err(write_error(destination, "flush output"))
}

/// Write `source` as a `P3` file, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written
pub fn export_ppm(source: &impl PixelSource, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = File::create(output_path).map_err(write_error(output_path, "create file"))?;
    let mut writer = BufWriter::new(file);
    write_ppm(source, &mut writer, output_path)
}
