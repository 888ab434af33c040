#![allow(clippy::needless_range_loop, clippy::manual_range_contains)]

//! edge-ink: photo to line-art stylization.
//!
//! Converts a color photograph into monochrome line art through a fixed,
//! deterministic sequence of per-pixel stages. No learned models, no GPU:
//! the output is a pure function of the input pixels and the options.
//!
//! # Quick Start
//!
//! ```
//! use edge_ink::EdgeStylizer;
//!
//! let rgb = vec![200u8; 8 * 6 * 3];
//! let result = EdgeStylizer::new().stylize_rgb8(&rgb, 8, 6).unwrap();
//!
//! assert_eq!(result.width(), 8);
//! assert_eq!(result.height(), 6);
//! assert_eq!(result.pixels().len(), 48);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGB input
//!     |
//!     v
//! [Pre-filter]          thin: identity, bold: Gaussian blur (sigma from size)
//!     |------------------------------------------.
//!     v                                          |
//! [Color reducer]       luminance, hue, sat      |
//!     |                                          |
//!     v                                          |
//! [Edge engine]         Scharr + hue boost       |
//!     |                 -> ink = (1-edge)^gamma  |
//!     v                                          |
//! [Contrast normalizer] P0.5..P99.5 stretch      |
//!     |                                          |
//!     v                                          |
//! [Tonal equalizer]     passes A, B, C, D        |
//!     |                                          v
//!     |<------------- [Separator detector] red/green boundaries
//!     v
//! [Frame]               optional black border
//!     |
//!     v
//! 8-bit grayscale (trunc(v * 255))
//! ```
//!
//! Every stage works on full-size [`Field`]s of `f32` in `[0, 1]`. Only the
//! final output (and the bold pre-filter, which re-quantizes its blurred
//! image) goes through 8 bits.
//!
//! # Line Tone
//!
//! The equalizer does not make lines black. It pulls all line pixels
//! (those below 0.985) into a narrow band around 0.33..0.36, which prints
//! as an even mid-gray pencil stroke regardless of how strong the
//! underlying edge was. Passes B, C and D only brighten.
//!
//! # Separators
//!
//! Saturated red next to saturated green can have almost no luminance
//! step. The separator detector looks for such vertical boundaries in the
//! pre-filtered color image and draws a line at each one, slightly darker
//! than the median line tone.

pub mod api;
pub mod color;
pub mod edges;
pub mod field;
pub mod frame;
pub mod output;
pub mod prefilter;
pub mod separator;
pub mod tone;


pub use api::{EdgeStylizer, StylizeError, StylizeOptions};
pub use color::{Rgb, RgbImage};
pub use edges::EdgeOptions;
pub use field::Field;
pub use frame::FrameOptions;
pub use output::StylizedImage;
pub use prefilter::{LineStyle, ParseLineStyleError, SmoothingOptions};
pub use separator::SeparatorOptions;
pub use tone::{EqualizerOptions, ToneBand};
