//! Color types and the color space reducer.
//!
//! - [`Rgb`] / [`RgbImage`]: the input boundary type, channels in `0.0..=1.0`
//! - [`reduce`]: luminance, hue and saturation fields for the edge engine
//!
//! # Example
//!
//! ```
//! use edge_ink::{color, Rgb, RgbImage};
//!
//! let image = RgbImage::filled(4, 4, Rgb::from_u8(200, 40, 40));
//! let fields = color::reduce(&image);
//!
//! // A flat image has its luminance normalized to exactly 1.0
//! assert!(fields.luminance.as_slice().iter().all(|&v| (v - 1.0).abs() < 1e-6));
//! ```

mod reduce;
mod rgb;

pub use reduce::{hue_saturation, luminance, reduce, ColorFields};
pub use rgb::{Rgb, RgbImage};
