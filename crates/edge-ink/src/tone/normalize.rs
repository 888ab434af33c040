//! Contrast normalizer: percentile stretch of the ink field.

use super::stats::Sorted;
use crate::field::Field;

/// Lower clipping percentile.
pub const LOW_PERCENTILE: f32 = 0.5;
/// Upper clipping percentile.
pub const HIGH_PERCENTILE: f32 = 99.5;
/// Below this span the field is left untouched.
pub const MIN_SPAN: f32 = 1e-4;

/// Stretch `field` so that P0.5 maps to 0 and P99.5 maps to 1.
///
/// Values outside the percentile window are clipped. A field whose window
/// is narrower than [`MIN_SPAN`] (a flat image, for instance) is returned
/// unchanged.
pub fn normalize_contrast(field: &Field) -> Field {
    let sorted = Sorted::new(field.as_slice());
    let (Some(low), Some(high)) = (
        sorted.percentile(LOW_PERCENTILE),
        sorted.percentile(HIGH_PERCENTILE),
    ) else {
        return field.clone();
    };

    let span = high - low;
    if span <= MIN_SPAN {
        return field.clone();
    }
    field.map(|v| ((v - low) / span).clamp(0.0, 1.0))
}
