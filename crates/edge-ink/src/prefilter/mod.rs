//! Pre-filter: line style applied to the color image before analysis.
//!
//! - [`LineStyle::Thin`] passes the image through untouched.
//! - [`LineStyle::Bold`] smooths each channel with a Gaussian whose sigma
//!   grows with the image's shorter side (see [`SmoothingOptions`]), then
//!   re-quantizes to 8 bits. Smoothing removes fine texture so the edge
//!   engine produces fewer, thicker strokes.
//!
//! ```
//! use edge_ink::{prefilter, LineStyle, Rgb, RgbImage, SmoothingOptions};
//!
//! let image = RgbImage::filled(8, 8, Rgb::from_u8(10, 200, 30));
//! let thin = prefilter::apply(&image, LineStyle::Thin, &SmoothingOptions::default());
//! assert_eq!(thin, image);
//! ```

mod blur;
mod options;

pub use blur::{gaussian_blur_rgb, gaussian_taps};
pub use options::{LineStyle, ParseLineStyleError, SmoothingOptions};

use crate::color::{Rgb, RgbImage};

/// Apply the line style to `image`.
pub fn apply(image: &RgbImage, style: LineStyle, smoothing: &SmoothingOptions) -> RgbImage {
    match style {
        LineStyle::Thin => image.clone(),
        LineStyle::Bold => {
            let sigma = smoothing.sigma_for(image.width(), image.height());
            let blurred = gaussian_blur_rgb(image, sigma);
            let quantized = blurred
                .pixels()
                .iter()
                .map(|px| Rgb::from_bytes(px.to_bytes_truncated()))
                .collect();
            RgbImage::new(quantized, image.width(), image.height())
        }
    }
}
