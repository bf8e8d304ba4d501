//! Test data generation utilities.
//!
//! This module builds small synthetic images with known pixel patterns
//! and encodes them the way a client would upload them.

use image::{
    DynamicImage, GrayImage, ImageFormat, ImageResult, Luma, Rgb, RgbImage, Rgba, RgbaImage,
};
use std::io::Cursor;
use std::path::Path;

/// A horizontal grayscale ramp from 0 at the left edge to 255 at the right edge.
///
/// With a width of 256 every intensity appears exactly once per row.
pub fn linear_gradient(width: u32, height: u32) -> GrayImage {
    let span = width.saturating_sub(1).max(1);
    GrayImage::from_fn(width, height, |x, _| {
        Luma([((x * 255 + span / 2) / span) as u8])
    })
}

/// An RGB checkerboard alternating between two colors in `cell`-pixel squares.
pub fn checkerboard(width: u32, height: u32, cell: u32, a: [u8; 3], b: [u8; 3]) -> RgbImage {
    let cell = cell.max(1);
    RgbImage::from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            Rgb(a)
        } else {
            Rgb(b)
        }
    })
}

/// A single-color RGB image
pub fn solid_rgb(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// A single-color RGBA image
pub fn solid_rgba(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

/// Encode an image into memory in the given format
pub fn encode(image: &DynamicImage, format: ImageFormat) -> ImageResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, format)?;
    Ok(buffer.into_inner())
}

/// Encode an image as PNG bytes
pub fn png_bytes(image: impl Into<DynamicImage>) -> Vec<u8> {
    encode(&image.into(), ImageFormat::Png).expect("Failed to encode test PNG")
}

/// Write an image to disk, with the format chosen from the extension
pub fn write_image(image: impl Into<DynamicImage>, path: &Path) -> ImageResult<()> {
    let image: DynamicImage = image.into();
    image.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_gradient_covers_full_range() {
        let ramp = linear_gradient(256, 2);
        assert_eq!(ramp.get_pixel(0, 0).0, [0]);
        assert_eq!(ramp.get_pixel(255, 1).0, [255]);
        assert_eq!(ramp.get_pixel(128, 0).0, [128]);
    }

    #[test]
    fn test_checkerboard_alternates() {
        let board = checkerboard(4, 4, 2, [0, 0, 0], [255, 255, 255]);
        assert_eq!(board.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(board.get_pixel(2, 0).0, [255, 255, 255]);
        assert_eq!(board.get_pixel(2, 2).0, [0, 0, 0]);
    }
}
