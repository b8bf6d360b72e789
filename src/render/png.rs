//! PNG output for sprite canvases.
//!
//! Converts canvases to PNG files with integer nearest-neighbour scaling.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{AssetError, Result};

use super::Canvas;

/// Upscale a canvas into an RGBA image.
///
/// Every source pixel becomes a `scale` x `scale` block of the same colour,
/// so hard pixel-art edges survive. A scale of 0 is treated as 1.
pub fn scale_canvas(canvas: &Canvas, scale: u32) -> RgbaImage {
    let scale = scale.max(1);

    let width = canvas.width() as u32 * scale;
    let height = canvas.height() as u32 * scale;

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for (y, row) in canvas.pixels().iter().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            let rgba = Rgba(colour.to_rgba());

            for sy in 0..scale {
                for sx in 0..scale {
                    let px = x as u32 * scale + sx;
                    let py = y as u32 * scale + sy;
                    img.put_pixel(px, py, rgba);
                }
            }
        }
    }

    img
}

/// Write a canvas to a PNG file.
///
/// # Arguments
///
/// * `canvas` - The drawn sprite
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(canvas: &Canvas, path: &Path, scale: u32) -> Result<()> {
    let img = scale_canvas(canvas, scale);

    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| AssetError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(())
}
