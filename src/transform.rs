//! The recolor transform.
//!
//! Converts an image to 8-bit grayscale, maps every sample through a named
//! colormap and returns the RGB result together with the colormap
//! description.

use image::{DynamicImage, GenericImageView, GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use std::fmt;
use std::io::Cursor;
use std::str::FromStr;
use tracing::debug;

use crate::catalog::Catalog;
use crate::colormaps::{self, Colormap};
use crate::describe::describe;
use crate::error::{RecolorError, Result};

/// Encoded output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    /// MIME type for HTTP responses
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RecolorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            _ => Err(RecolorError::InvalidParameter {
                param: "format".to_string(),
                message: "Format must be 'png' or 'jpeg'".to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        })
    }
}

/// Apply a colormap to an image.
///
/// Returns the recolored image, with the dimensions of the grayscale
/// conversion of `image`, and the multi-line colormap description.
pub fn apply_colormap(
    catalog: &Catalog,
    image: &DynamicImage,
    colormap_name: &str,
) -> Result<(RgbImage, String)> {
    let colormap = colormaps::get_colormap(colormap_name)?;
    let gray = to_grayscale(image)?;

    debug!(
        colormap = %colormap_name,
        width = gray.width(),
        height = gray.height(),
        "Applying colormap"
    );

    let colored = colorize(&gray, colormap.as_ref());
    let info = describe(catalog, colormap_name).to_string();
    Ok((colored, info))
}

/// Decode an uploaded image, sniffing the format from its content
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    if bytes.is_empty() {
        return Err(RecolorError::InvalidImage {
            message: "No image data provided".to_string(),
        });
    }
    image::load_from_memory(bytes).map_err(|e| RecolorError::InvalidImage {
        message: format!("Failed to decode image: {}", e),
    })
}

/// Convert an image to 8-bit grayscale.
///
/// Color images use the ITU-R 601-2 luma transform
/// `L = R * 299/1000 + G * 587/1000 + B * 114/1000`; alpha is ignored.
pub fn to_grayscale(image: &DynamicImage) -> Result<GrayImage> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(RecolorError::InvalidImage {
            message: format!("Image has zero dimension ({}x{})", width, height),
        });
    }

    let gray = match image {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => image.to_luma8(),
        _ => {
            let rgb = image.to_rgb8();
            let mut gray = GrayImage::new(width, height);
            for (dst, src) in gray.pixels_mut().zip(rgb.pixels()) {
                *dst = Luma([luma(src)]);
            }
            gray
        }
    };

    Ok(gray)
}

/// Map every grayscale sample through a colormap, dropping alpha
pub fn colorize(gray: &GrayImage, colormap: &dyn Colormap) -> RgbImage {
    // One colormap evaluation per possible sample value
    let mut table = [[0u8; 3]; 256];
    for (level, entry) in table.iter_mut().enumerate() {
        let [r, g, b, _] = colormap.map_normalized(level as f32 / 255.0);
        *entry = [r, g, b];
    }

    let mut colored = RgbImage::new(gray.width(), gray.height());
    for (dst, src) in colored.pixels_mut().zip(gray.pixels()) {
        *dst = Rgb(table[src.0[0] as usize]);
    }
    colored
}

/// Encode a recolored image
pub fn encode_image(image: &RgbImage, format: OutputFormat) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, format.image_format())
        .map_err(|e| RecolorError::ImageEncoding {
            message: format!("Failed to encode {}: {}", format, e),
        })?;
    Ok(buffer.into_inner())
}

/// Fixed-point ITU-R 601-2 luma, rounded
fn luma(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}
