//! Color space reduction: luminance, hue and saturation fields.

use super::rgb::{Rgb, RgbImage};
use crate::field::Field;

/// BT.709 luminance weights.
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// Guard below which a maximum or a channel spread counts as zero.
const EPSILON: f32 = 1e-6;

/// Per-pixel fields derived from an RGB image.
#[derive(Debug, Clone)]
pub struct ColorFields {
    /// BT.709 luminance divided by the image's own maximum luminance.
    pub luminance: Field,
    /// Circular hue in `[0, 1)`; `0.0` for achromatic pixels.
    pub hue: Field,
    /// `(max - min) / max`; `0.0` where `max` is zero.
    pub saturation: Field,
}

/// BT.709 luminance of one pixel, not normalized.
#[inline]
pub fn luminance(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// Hue and saturation from the max/min channel decomposition.
///
/// Hue is taken from whichever channel is maximal, checked in R, G, B
/// order, and scaled to `[0, 1)`.
#[inline]
pub fn hue_saturation(px: Rgb) -> (f32, f32) {
    let Rgb { r, g, b } = px;
    let max = px.max_channel();
    let min = px.min_channel();
    let delta = max - min;

    let saturation = if max > EPSILON { delta / max } else { 0.0 };

    if delta <= EPSILON {
        return (0.0, saturation);
    }

    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    // rem_euclid can land exactly on 6.0 for tiny negative inputs.
    let hue = (sector / 6.0).rem_euclid(1.0);
    (hue, saturation)
}

/// Derive normalized luminance, hue and saturation for every pixel.
pub fn reduce(image: &RgbImage) -> ColorFields {
    let width = image.width();
    let height = image.height();
    let total = width * height;

    let mut lum = Vec::with_capacity(total);
    let mut hue = Vec::with_capacity(total);
    let mut sat = Vec::with_capacity(total);

    for px in image.pixels() {
        lum.push(luminance(px.r, px.g, px.b));
        let (h, s) = hue_saturation(*px);
        hue.push(h);
        sat.push(s);
    }

    let luminance = Field::from_vec(lum, width, height).normalize_by_max(EPSILON);

    ColorFields {
        luminance,
        hue: Field::from_vec(hue, width, height),
        saturation: Field::from_vec(sat, width, height),
    }
}
