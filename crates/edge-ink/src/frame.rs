//! Optional black frame around the output.

use crate::field::Field;

/// Frame compositor options. Off by default; 2 pixels wide when enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOptions {
    pub enabled: bool,
    pub width: usize,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            width: 2,
        }
    }
}

impl FrameOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[inline]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

/// Set the outer ring of `width` pixels to 0.
///
/// The ring is flush with the image bounds. A width reaching half of the
/// shorter side covers the whole image.
pub fn draw_frame(field: &Field, width: usize) -> Field {
    let mut out = field.clone();
    let w = field.width();
    let h = field.height();
    if width == 0 {
        return out;
    }

    let bottom = h.saturating_sub(width);
    let right = w.saturating_sub(width);
    for y in 0..h {
        let in_band_y = y < width || y >= bottom;
        for x in 0..w {
            if in_band_y || x < width || x >= right {
                out.set(x, y, 0.0);
            }
        }
    }
    out
}
