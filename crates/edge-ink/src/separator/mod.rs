//! Chromatic separator detection.
//!
//! Adjacent saturated red and green regions (flags, signage) can be nearly
//! isoluminant. The gradient engine then draws little or no line between
//! them. This stage finds such vertical boundaries in the color image and
//! draws a line at each one, at a tone matched to the existing lines.

mod detect;
mod inject;
mod options;

pub use detect::{collapse_runs, detect_separators, is_green, is_red};
pub use inject::{inject_separators, separator_tone};
pub use options::SeparatorOptions;
