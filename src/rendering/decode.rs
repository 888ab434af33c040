//! Input decoding: PNG, JPEG and WebP into packed RGB8.

use crate::error::RenderError;
use crate::models::LimitsConfig;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader};
use serde::Serialize;
use std::fmt;
use std::io::Cursor;

/// Accepted input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Png,
    Jpeg,
    WebP,
}

impl InputFormat {
    fn from_image_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Png => Some(InputFormat::Png),
            ImageFormat::Jpeg => Some(InputFormat::Jpeg),
            ImageFormat::WebP => Some(InputFormat::WebP),
            _ => None,
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            InputFormat::Png => ImageFormat::Png,
            InputFormat::Jpeg => ImageFormat::Jpeg,
            InputFormat::WebP => ImageFormat::WebP,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            InputFormat::Png => "image/png",
            InputFormat::Jpeg => "image/jpeg",
            InputFormat::WebP => "image/webp",
        }
    }

    /// Whether a file extension names an accepted format.
    pub fn accepts_extension(ext: &str) -> bool {
        matches!(
            ext.to_ascii_lowercase().as_str(),
            "png" | "jpg" | "jpeg" | "webp"
        )
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputFormat::Png => "png",
            InputFormat::Jpeg => "jpeg",
            InputFormat::WebP => "webp",
        })
    }
}

/// A decoded, upright RGB8 image.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Packed `RGBRGB...` bytes, row-major
    pub rgb: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: InputFormat,
}

/// Sniff the format from the file contents.
pub fn detect_format(bytes: &[u8]) -> Result<InputFormat, RenderError> {
    let format = image::guess_format(bytes)
        .map_err(|_| RenderError::UnsupportedFormat("unrecognized data".to_string()))?;
    InputFormat::from_image_format(format).ok_or_else(|| {
        RenderError::UnsupportedFormat(
            format
                .extensions_str()
                .first()
                .copied()
                .unwrap_or("unknown")
                .to_string(),
        )
    })
}

/// Decode `bytes` to RGB8 with EXIF orientation applied.
///
/// The byte limit is checked before anything is parsed, the pixel limit
/// right after the header is read.
pub fn decode_rgb(bytes: &[u8], limits: &LimitsConfig) -> Result<DecodedImage, RenderError> {
    if bytes.len() > limits.max_input_bytes {
        return Err(RenderError::InputTooLarge {
            size: bytes.len(),
            max: limits.max_input_bytes,
        });
    }

    let format = detect_format(bytes)?;
    let mut decoder = ImageReader::with_format(Cursor::new(bytes), format.image_format())
        .into_decoder()
        .map_err(|e| RenderError::Decode(e.to_string()))?;

    let (width, height) = decoder.dimensions();
    if u64::from(width) * u64::from(height) > limits.max_pixels {
        return Err(RenderError::TooManyPixels {
            width,
            height,
            max: limits.max_pixels,
        });
    }

    let orientation = decoder.orientation().unwrap_or(Orientation::NoTransforms);
    let mut image =
        DynamicImage::from_decoder(decoder).map_err(|e| RenderError::Decode(e.to_string()))?;
    image.apply_orientation(orientation);

    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    tracing::debug!(%format, width, height, ?orientation, "Decoded input");

    Ok(DecodedImage {
        rgb: rgb.into_raw(),
        width,
        height,
        format,
    })
}
