//! Gradient magnitude engine.
//!
//! Turns the reduced color fields into an *ink* field where strong edges
//! are dark:
//!
//! ```text
//! luminance ──► Scharr ──► max(|gx|,|gy|) ─┐
//!                                          ├─► grad ──► / max(grad) ──► × gain, clip
//! hue, lum, sat ──► hue boost ──► × 1.5 ───┘                               │
//!                                                                          ▼
//!                                                   ink = (1 - edge) ^ gamma
//! ```
//!
//! The result still needs the contrast normalizer before it is usable as a
//! grayscale image.

mod boost;
mod grad;
mod options;

pub use boost::{circular_distance, hue_boost, hue_difference, luminance_difference};
pub use grad::{scharr_gradients, Grad};
pub use options::EdgeOptions;

use crate::color::ColorFields;
use crate::field::Field;

/// Floor for the adaptive gradient normalization.
const GRAD_EPSILON: f32 = 1e-6;

/// Combined edge strength in `[0, 1]`, before inversion.
pub fn edge_strength(fields: &ColorFields, opts: &EdgeOptions) -> Field {
    let lum_grad = scharr_gradients(&fields.luminance).dominant_magnitude();
    let boost = hue_boost(&fields.hue, &fields.luminance, &fields.saturation, opts);

    let combined: Vec<f32> = lum_grad
        .as_slice()
        .iter()
        .zip(boost.as_slice())
        .map(|(&g, &b)| g + opts.boost_weight * b)
        .collect();
    let grad = Field::from_vec(combined, lum_grad.width(), lum_grad.height());

    grad.normalize_by_max(GRAD_EPSILON)
        .map(|v| (v * opts.gain).clamp(0.0, 1.0))
}

/// Ink tone: inverted, gamma-corrected edge strength.
pub fn compute_ink(fields: &ColorFields, opts: &EdgeOptions) -> Field {
    edge_strength(fields, opts).map(|e| (1.0 - e).powf(opts.gamma).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{reduce, Rgb, RgbImage};

    #[test]
    fn test_flat_image_has_no_ink() {
        let image = RgbImage::filled(8, 8, Rgb::from_u8(90, 140, 200));
        let ink = compute_ink(&reduce(&image), &EdgeOptions::default());
        assert!(ink.as_slice().iter().all(|&v| (v - 1.0).abs() < 1e-6));
    }

    #[test]
    fn test_strongest_edge_is_fully_dark() {
        let mut image = RgbImage::filled(8, 8, Rgb::from_u8(0, 0, 0));
        for y in 0..8 {
            for x in 4..8 {
                image.set(x, y, Rgb::from_u8(255, 255, 255));
            }
        }
        let ink = compute_ink(&reduce(&image), &EdgeOptions::default());
        assert!(ink.get(3, 4) < 1e-6, "edge column should be black ink");
        assert!((ink.get(0, 4) - 1.0).abs() < 1e-6, "flat area stays white");
    }

    #[test]
    fn test_gain_saturates_weaker_edges() {
        // Two steps of different heights: 0 -> 0.5 and 0.5 -> 1.0 luminance
        // scaled so one is half as strong as the other
        let mut image = RgbImage::filled(12, 4, Rgb::new(0.0, 0.0, 0.0));
        for y in 0..4 {
            for x in 4..8 {
                image.set(x, y, Rgb::new(0.25, 0.25, 0.25));
            }
            for x in 8..12 {
                image.set(x, y, Rgb::new(0.75, 0.75, 0.75));
            }
        }
        let fields = reduce(&image);
        let strength = edge_strength(&fields, &EdgeOptions::default());
        // With gain 2.0 the half-strength edge also reaches 1.0
        assert!((strength.get(3, 1) - 1.0).abs() < 1e-5);
        assert!((strength.get(7, 1) - 1.0).abs() < 1e-5);

        let soft = edge_strength(&fields, &EdgeOptions::default().gain(1.0));
        assert!(soft.get(3, 1) < soft.get(7, 1));
    }

    #[test]
    fn test_luminance_step_weighs_against_full_hue_boost() {
        // Red | isoluminant green | gray 0.40 | gray 0.55
        let green = 0.2126 / 0.7152;
        let mut image = RgbImage::filled(40, 8, Rgb::new(1.0, 0.0, 0.0));
        for y in 0..8 {
            for x in 10..20 {
                image.set(x, y, Rgb::new(0.0, green, 0.0));
            }
            for x in 20..30 {
                image.set(x, y, Rgb::new(0.40, 0.40, 0.40));
            }
            for x in 30..40 {
                image.set(x, y, Rgb::new(0.55, 0.55, 0.55));
            }
        }
        let fields = reduce(&image);
        let strength = edge_strength(&fields, &EdgeOptions::default());

        // The red/green edge carries boost 1.0 (weighted 1.5) and sets the
        // maximum. A unit-scaled Scharr step of 0.15 / 0.55 then gives
        // 2.0 * 0.2727 / 1.5.
        let expected = 2.0 * (0.15 / 0.55) / 1.5;
        assert!(
            (strength.get(29, 4) - expected).abs() < 1e-3,
            "got {}",
            strength.get(29, 4)
        );
        assert!((strength.get(9, 4) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_desaturated_input_matches_pure_luminance_gradient() {
        let mut image = RgbImage::filled(6, 6, Rgb::new(0.2, 0.2, 0.2));
        image.set(2, 2, Rgb::new(0.9, 0.9, 0.9));
        let fields = reduce(&image);
        let with_boost = edge_strength(&fields, &EdgeOptions::default());
        let without = edge_strength(&fields, &EdgeOptions::default().boost_weight(0.0));
        assert_eq!(with_boost, without);
    }
}
