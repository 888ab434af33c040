//! Line tonal equalizer.
//!
//! Works only on *line pixels* (values below the mask threshold, taken in
//! row-major order). Each pass is a pure `&[f32] -> Vec<f32>` function that
//! recomputes its statistics from its own input; [`equalize`] chains them
//! and writes the result back into the masked positions.
//!
//! Pass A pulls dark outliers toward the median. Passes B, C and D only
//! ever raise values.

use super::options::{EqualizerOptions, ToneBand};
use super::stats::Sorted;
use crate::field::Field;

/// Spreads narrower than this are treated as flat.
const FLAT_SPREAD: f32 = 1e-4;
/// Minimum width of the pass B target band.
const MIN_BAND_WIDTH: f32 = 1e-3;

/// `true` where `value < threshold`.
pub fn line_mask(field: &Field, threshold: f32) -> Vec<bool> {
    field.as_slice().iter().map(|&v| v < threshold).collect()
}

/// Pass A: pull values below the median toward it.
///
/// Values below P25 move by `strong` of their distance to the median,
/// values in `[P25, median)` by `soft`.
pub fn base_normalize(values: &[f32], strong: f32, soft: f32) -> Vec<f32> {
    let sorted = Sorted::new(values);
    let (Some(q1), Some(med)) = (sorted.percentile(25.0), sorted.median()) else {
        return values.to_vec();
    };
    if med - q1 < FLAT_SPREAD {
        return values.to_vec();
    }

    values
        .iter()
        .map(|&v| {
            let out = if v < q1 {
                v + strong * (med - v)
            } else if v < med {
                v + soft * (med - v)
            } else {
                v
            };
            out.clamp(0.0, 1.0)
        })
        .collect()
}

/// Pass B: map the `[P_low, P_high]` window onto `band`, brightening only.
pub fn brightness_equalize(
    values: &[f32],
    low_pct: f32,
    high_pct: f32,
    band: ToneBand,
) -> Vec<f32> {
    let sorted = Sorted::new(values);
    let (Some(lo), Some(hi)) = (sorted.percentile(low_pct), sorted.percentile(high_pct)) else {
        return values.to_vec();
    };
    if hi - lo < FLAT_SPREAD {
        return values.to_vec();
    }

    let band = ToneBand::new(band.min, band.max.max(band.min + MIN_BAND_WIDTH));
    values
        .iter()
        .map(|&v| {
            let mapped = band.lerp((v - lo) / (hi - lo)).clamp(0.0, 1.0);
            if mapped > v {
                mapped
            } else {
                v
            }
        })
        .collect()
}

/// Pass C: constant lift with a floor.
pub fn global_lift(values: &[f32], lift: f32, floor: f32) -> Vec<f32> {
    values
        .iter()
        .map(|&v| (v + lift).max(floor).clamp(0.0, 1.0))
        .collect()
}

/// Pass D: remap the darkest `pct` percent onto `band`, brightening only.
///
/// If the selected values are (nearly) identical they all go to the band's
/// midpoint.
pub fn uniformize(values: &[f32], pct: f32, band: ToneBand) -> Vec<f32> {
    let sorted = Sorted::new(values);
    let Some(cutoff) = sorted.percentile(pct) else {
        return values.to_vec();
    };

    let (low_min, low_max) = values
        .iter()
        .filter(|&&v| v <= cutoff)
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if low_min > low_max {
        return values.to_vec();
    }
    let spread = low_max - low_min;

    values
        .iter()
        .map(|&v| {
            if v > cutoff {
                return v;
            }
            let mapped = if spread < FLAT_SPREAD {
                band.midpoint()
            } else {
                band.lerp((v - low_min) / spread)
            };
            mapped.max(v)
        })
        .collect()
}

/// Run the enabled passes over the line pixels of `field`.
pub fn equalize(field: &Field, opts: &EqualizerOptions) -> Field {
    if !opts.enabled {
        return field.clone();
    }

    let mask = line_mask(field, opts.mask_threshold);
    let mut values: Vec<f32> = field
        .as_slice()
        .iter()
        .zip(&mask)
        .filter_map(|(&v, &m)| m.then_some(v))
        .collect();
    if values.is_empty() {
        return field.clone();
    }

    values = base_normalize(&values, opts.strong_factor, opts.soft_factor);
    if opts.brightness_equalizer {
        values = brightness_equalize(
            &values,
            opts.brightness_low_percentile,
            opts.brightness_high_percentile,
            opts.brightness_band,
        );
    }
    if opts.global_lift {
        values = global_lift(&values, opts.lift, opts.lift_floor);
    }
    if opts.uniformizer {
        values = uniformize(&values, opts.uniformizer_percentile, opts.uniformizer_band);
    }

    let mut out = field.clone();
    let mut next = values.into_iter();
    for (slot, &m) in out.as_mut_slice().iter_mut().zip(&mask) {
        if m {
            if let Some(v) = next.next() {
                *slot = v;
            }
        }
    }
    out
}
