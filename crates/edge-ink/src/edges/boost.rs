//! Hue-discontinuity boost.
//!
//! Rewards color transitions that happen without a matching luminance
//! transition (red next to an equally bright green, for example), which a
//! luminance gradient alone cannot see. The boost is weighted by
//! saturation, so fully gray pixels never contribute.

use super::options::EdgeOptions;
use crate::field::Field;

/// Distance between two hues on the unit circle.
#[inline]
pub fn circular_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).abs();
    d.min(1.0 - d)
}

/// Forward neighbor differences, `max(dx, dy)` per pixel.
///
/// The last column (row) repeats the difference of the column (row) before
/// it; a field one pixel wide (tall) has no difference along that axis.
fn neighbor_difference(field: &Field, distance: impl Fn(f32, f32) -> f32) -> Field {
    let w = field.width();
    let h = field.height();
    let mut out = Field::filled(w, h, 0.0);

    for y in 0..h {
        for x in 0..w {
            let dx = if w < 2 {
                0.0
            } else {
                let x0 = x.min(w - 2);
                distance(field.get(x0 + 1, y), field.get(x0, y))
            };
            let dy = if h < 2 {
                0.0
            } else {
                let y0 = y.min(h - 2);
                distance(field.get(x, y0 + 1), field.get(x, y0))
            };
            out.set(x, y, dx.max(dy));
        }
    }

    out
}

/// Circular hue difference to the right/lower neighbor.
pub fn hue_difference(hue: &Field) -> Field {
    neighbor_difference(hue, circular_distance)
}

/// Linear luminance difference to the right/lower neighbor.
pub fn luminance_difference(luminance: &Field) -> Field {
    neighbor_difference(luminance, |a, b| (a - b).abs())
}

/// Per-pixel hue boost in `[0, 1]`.
///
/// `boost = (dH/hue_scale)^a * (1 - dL/luminance_scale)^b * sat^c`, with
/// both normalized differences clipped to `[0, 1]` first.
pub fn hue_boost(hue: &Field, luminance: &Field, saturation: &Field, opts: &EdgeOptions) -> Field {
    let d_hue = hue_difference(hue);
    let d_lum = luminance_difference(luminance);

    let data = d_hue
        .as_slice()
        .iter()
        .zip(d_lum.as_slice())
        .zip(saturation.as_slice())
        .map(|((&dh, &dl), &sat)| {
            let dh_norm = (dh / opts.hue_scale).clamp(0.0, 1.0);
            let dl_norm = (dl / opts.luminance_scale).clamp(0.0, 1.0);
            let boost = dh_norm.powf(opts.hue_exponent)
                * (1.0 - dl_norm).powf(opts.flatness_exponent)
                * sat.powf(opts.saturation_exponent);
            boost.clamp(0.0, 1.0)
        })
        .collect();

    Field::from_vec(data, hue.width(), hue.height())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circular_distance_wraps() {
        assert!((circular_distance(0.95, 0.05) - 0.1).abs() < 1e-6);
        assert!((circular_distance(0.05, 0.95) - 0.1).abs() < 1e-6);
        assert!((circular_distance(0.2, 0.5) - 0.3).abs() < 1e-6);
        assert_eq!(circular_distance(0.0, 1.0), 0.0);
    }

    #[test]
    fn test_neighbor_difference_pads_last_column() {
        let field = Field::from_vec(vec![0.0, 0.5, 0.7], 3, 1);
        let diff = luminance_difference(&field);
        assert!((diff.get(0, 0) - 0.5).abs() < 1e-6);
        assert!((diff.get(1, 0) - 0.2).abs() < 1e-6);
        assert!((diff.get(2, 0) - 0.2).abs() < 1e-6, "edge-padded");
    }

    #[test]
    fn test_neighbor_difference_takes_axis_max() {
        // 2x2: right neighbor differs by 0.1, lower neighbor by 0.6
        let field = Field::from_vec(vec![0.0, 0.1, 0.6, 0.6], 2, 2);
        let diff = luminance_difference(&field);
        assert!((diff.get(0, 0) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_hue_difference_uses_circular_distance() {
        let field = Field::from_vec(vec![0.98, 0.02], 2, 1);
        let diff = hue_difference(&field);
        assert!((diff.get(0, 0) - 0.04).abs() < 1e-6);
    }

    #[test]
    fn test_zero_saturation_gives_zero_boost() {
        let hue = Field::from_vec(vec![0.0, 0.5, 0.0, 0.5], 4, 1);
        let lum = Field::filled(4, 1, 0.5);
        let sat = Field::filled(4, 1, 0.0);
        let boost = hue_boost(&hue, &lum, &sat, &EdgeOptions::default());
        assert!(boost.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_isoluminant_hue_jump_gives_full_boost() {
        let hue = Field::from_vec(vec![0.0, 0.5], 2, 1);
        let lum = Field::filled(2, 1, 0.5);
        let sat = Field::filled(2, 1, 1.0);
        let boost = hue_boost(&hue, &lum, &sat, &EdgeOptions::default());
        assert!((boost.get(0, 0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_luminance_jump_suppresses_boost() {
        let hue = Field::from_vec(vec![0.0, 0.5], 2, 1);
        let lum = Field::from_vec(vec![0.0, 0.5], 2, 1);
        let sat = Field::filled(2, 1, 1.0);
        let boost = hue_boost(&hue, &lum, &sat, &EdgeOptions::default());
        assert_eq!(boost.get(0, 0), 0.0);
    }
}
