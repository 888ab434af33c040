//! Assertion helpers for tests.

use image::GrayImage;
use pretty_assertions::assert_eq;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Assert bytes are a PNG and decode them to grayscale.
pub fn assert_png(bytes: &[u8]) -> GrayImage {
    assert!(
        bytes.starts_with(PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    image::load_from_memory(bytes)
        .expect("PNG should decode")
        .to_luma8()
}

/// Assert a PNG has the expected dimensions and return its pixels.
pub fn assert_png_dimensions(bytes: &[u8], width: u32, height: u32) -> GrayImage {
    let gray = assert_png(bytes);
    assert_eq!(
        gray.dimensions(),
        (width, height),
        "PNG dimensions differ from input"
    );
    gray
}

/// Assert every pixel of the outer ring of `width` pixels is black.
pub fn assert_black_frame(gray: &GrayImage, width: u32) {
    let (w, h) = gray.dimensions();
    for (x, y, px) in gray.enumerate_pixels() {
        let ring = x < width || y < width || x + width >= w || y + width >= h;
        if ring {
            assert_eq!(px.0[0], 0, "frame pixel ({x}, {y}) is not black");
        }
    }
}

/// Assert the image contains no ink at all.
pub fn assert_blank(gray: &GrayImage) {
    let inked = gray.pixels().filter(|p| p.0[0] < 255).count();
    assert_eq!(inked, 0, "expected blank paper, found {inked} inked pixels");
}

/// Assert column `x` carries ink in every row.
pub fn assert_inked_column(gray: &GrayImage, x: u32) {
    for y in 0..gray.height() {
        let v = gray.get_pixel(x, y).0[0];
        assert!(v < 255, "column {x} row {y} has no ink (value {v})");
    }
}
