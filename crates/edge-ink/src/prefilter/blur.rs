//! Separable Gaussian blur on RGB images.
//!
//! - 1D kernel truncated at `round(4 * sigma)` taps per side, normalized.
//! - Horizontal pass then vertical pass, each channel independently.
//! - Borders replicate the nearest edge pixel.

use crate::color::{Rgb, RgbImage};

/// Kernel reach in standard deviations.
const TRUNCATE: f32 = 4.0;

/// Normalized 1D Gaussian taps, left to right, length `2 * radius + 1`.
pub fn gaussian_taps(sigma: f32) -> Vec<f32> {
    if sigma <= 0.0 {
        return vec![1.0];
    }
    let radius = (TRUNCATE * sigma + 0.5) as isize;
    let denom = 2.0 * sigma * sigma;
    let mut taps: Vec<f32> = (-radius..=radius)
        .map(|i| (-((i * i) as f32) / denom).exp())
        .collect();
    let sum: f32 = taps.iter().sum();
    for t in &mut taps {
        *t /= sum;
    }
    taps
}

/// Blur every channel of `image` with a Gaussian of the given sigma.
pub fn gaussian_blur_rgb(image: &RgbImage, sigma: f32) -> RgbImage {
    let taps = gaussian_taps(sigma);
    if taps.len() == 1 {
        return image.clone();
    }
    let radius = (taps.len() / 2) as isize;
    let w = image.width();
    let h = image.height();

    let mut horizontal = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0_f32; 3];
            for (k, &t) in taps.iter().enumerate() {
                let sx = (x as isize + k as isize - radius).clamp(0, w as isize - 1) as usize;
                let px = image.get(sx, y);
                acc[0] += px.r * t;
                acc[1] += px.g * t;
                acc[2] += px.b * t;
            }
            horizontal.push(Rgb::new(acc[0], acc[1], acc[2]));
        }
    }

    let mut out = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0_f32; 3];
            for (k, &t) in taps.iter().enumerate() {
                let sy = (y as isize + k as isize - radius).clamp(0, h as isize - 1) as usize;
                let px = horizontal[sy * w + x];
                acc[0] += px.r * t;
                acc[1] += px.g * t;
                acc[2] += px.b * t;
            }
            out.push(Rgb::new(acc[0], acc[1], acc[2]));
        }
    }

    RgbImage::new(out, w, h)
}
