//! Test images and config fixtures.

use edgewizard::models::AppConfig;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Colors used by the synthetic images
pub mod colors {
    pub const PAPER: [u8; 3] = [235, 235, 230];
    pub const INK: [u8; 3] = [25, 25, 35];
    pub const FLAG_RED: [u8; 3] = [220, 30, 40];
    pub const FLAG_GREEN: [u8; 3] = [20, 170, 60];
}

/// A dark rectangle on light paper.
pub fn rectangle(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        let inside = x >= width / 4 && x < 3 * width / 4 && y >= height / 4 && y < 3 * height / 4;
        Rgb(if inside { colors::INK } else { colors::PAPER })
    })
}

/// Red left half, green right half.
pub fn red_green_flag(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, _| {
        Rgb(if x < width / 2 {
            colors::FLAG_RED
        } else {
            colors::FLAG_GREEN
        })
    })
}

/// A single flat color.
pub fn flat(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    ImageBuffer::from_pixel(width, height, Rgb(color))
}

pub fn encode(image: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image.clone())
        .write_to(&mut out, format)
        .expect("encode fixture");
    out.into_inner()
}

pub fn png(image: &RgbImage) -> Vec<u8> {
    encode(image, ImageFormat::Png)
}

/// Write `bytes` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("write fixture");
    path
}

/// Default config without oxipng, to keep tests fast.
pub fn fast_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.output.optimize_png = false;
    config
}

pub const SAMPLE_CONFIG: &str = r#"
tuning:
  line_style: bold
  frame:
    enabled: true
    width: 3
limits:
  max_input_bytes: 2097152
  max_pixels: 1000000
output:
  optimize_png: false
batch:
  jobs: 2
"#;
