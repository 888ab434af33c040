//! Tone stages: contrast normalization and line equalization.

mod equalizer;
mod normalize;
mod options;
mod stats;

pub use equalizer::{
    base_normalize, brightness_equalize, equalize, global_lift, line_mask, uniformize,
};
pub use normalize::{normalize_contrast, HIGH_PERCENTILE, LOW_PERCENTILE, MIN_SPAN};
pub use options::{EqualizerOptions, ToneBand};
pub use stats::{median, percentile, Sorted};
