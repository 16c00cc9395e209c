//! # Output Module
//!
//! Writes rendered frames to disk:
//! - PNG: 8-bit RGB, channels rounded from the [0, 255] frame values
//! - EXR: linear f32 RGB, channels scaled down to [0, 1]
//!
//! The format is picked from the output file extension.

use std::path::Path;

use anyhow::{bail, Context, Result};
use exr::prelude::write_rgb_file;
use image::{ImageBuffer, Rgb, RgbImage};
use log::info;

use crate::renderer::Frame;

/// Convert a frame to 8-bit RGB.
pub fn to_rgb8(image: &Frame) -> RgbImage {
    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let pixel = image.get_pixel(x, y);
        Rgb(pixel.0.map(|c| c.clamp(0.0, 255.0).round() as u8))
    })
}

/// Save a frame as an 8-bit PNG.
pub fn save_image_as_png(image: &Frame, output_path: &Path) -> Result<()> {
    to_rgb8(image)
        .save(output_path)
        .with_context(|| format!("failed to save {}", output_path.display()))?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save a frame as a linear f32 OpenEXR file.
pub fn save_image_as_exr(image: &Frame, output_path: &Path) -> Result<()> {
    let width = image.width() as usize;
    write_rgb_file(output_path, width, image.height() as usize, |x, y| {
        let p = image.get_pixel(x as u32, y as u32);
        (p[0] / 255.0, p[1] / 255.0, p[2] / 255.0)
    })
    .with_context(|| format!("failed to save {}", output_path.display()))?;
    info!("HDR image saved as EXR: {}", output_path.display());
    Ok(())
}

/// Save a frame, choosing PNG or EXR from the file extension.
pub fn save_image(image: &Frame, output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref();
    let extension = output_path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => save_image_as_png(image, output_path),
        "exr" => save_image_as_exr(image, output_path),
        other => bail!(
            "Unsupported file extension '{}'. Only .png and .exr formats are supported.",
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_rounds_and_clamps() {
        let frame: Frame = ImageBuffer::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgb([0.4, 127.5, 254.6])
            } else {
                Rgb([-3.0, 300.0, 12.0])
            }
        });
        let rgb = to_rgb8(&frame);
        assert_eq!(rgb.get_pixel(0, 0).0, [0, 128, 255]);
        assert_eq!(rgb.get_pixel(1, 0).0, [0, 255, 12]);
    }

    #[test]
    fn writes_exr_file() {
        let frame: Frame = ImageBuffer::from_fn(2, 1, |x, _| Rgb([255.0 * x as f32, 127.5, 0.0]));
        let path = std::env::temp_dir().join(format!("skyglint-{}-frame.exr", std::process::id()));

        save_image(&frame, &path).unwrap();
        let written = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        let _ = std::fs::remove_file(&path);
        assert!(written > 0);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let frame: Frame = ImageBuffer::new(1, 1);
        assert!(save_image(&frame, "frame.bmp2").is_err());
        assert!(save_image(&frame, "frame").is_err());
    }
}
