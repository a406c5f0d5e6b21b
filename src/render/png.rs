//! PNG output for surfaces.
//!
//! Converts a surface to a PNG file with optional integer scaling.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{RastError, Result};
use crate::surface::Surface;

/// Write a surface to a PNG file.
///
/// # Arguments
///
/// * `surface` - The surface to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(surface: &Surface, path: &Path, scale: u32) -> Result<()> {
    let scale = scale.max(1); // Minimum scale of 1

    let width = surface.width() as u32 * scale;
    let height = surface.height() as u32 * scale;

    let mut img: RgbImage = ImageBuffer::new(width, height);

    for (y, row) in surface.rows().iter().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            let rgb = Rgb(colour.to_rgb());

            // Fill scaled pixels
            for sy in 0..scale {
                for sx in 0..scale {
                    let px = x as u32 * scale + sx;
                    let py = y as u32 * scale + sy;
                    img.put_pixel(px, py, rgb);
                }
            }
        }
    }

    img.save(path).map_err(|e| RastError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
