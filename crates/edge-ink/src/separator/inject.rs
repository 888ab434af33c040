//! Drawing detected separators into the tone field.

use super::options::SeparatorOptions;
use crate::field::Field;
use crate::tone::Sorted;

/// How far below the median line tone injected separators are drawn.
const TARGET_OFFSET: f32 = 0.005;

/// Tone for injected separator lines.
///
/// Slightly darker than the median of the field's current line pixels, or
/// than `fallback_base` when there are none.
pub fn separator_tone(field: &Field, opts: &SeparatorOptions) -> f32 {
    let line_values: Vec<f32> = field
        .as_slice()
        .iter()
        .copied()
        .filter(|&v| v < opts.mask_threshold)
        .collect();
    let base = Sorted::new(&line_values)
        .median()
        .unwrap_or(opts.fallback_base);
    (base - TARGET_OFFSET).max(0.0)
}

/// Darken the columns around each position to the separator tone.
///
/// Each position covers `x - line_width / 2 ..= x + line_width / 2`,
/// clipped to the image. Pixels already darker than the tone keep their
/// value.
pub fn inject_separators(field: &Field, positions: &[usize], opts: &SeparatorOptions) -> Field {
    let mut out = field.clone();
    let w = field.width();
    if positions.is_empty() || w == 0 {
        return out;
    }

    let target = separator_tone(field, opts);
    let half = opts.line_width / 2;

    for &x in positions {
        let first = x.saturating_sub(half);
        let last = (x + half).min(w - 1);
        for cx in first..=last {
            for y in 0..field.height() {
                let v = out.get(cx, y);
                out.set(cx, y, v.min(target));
            }
        }
    }
    out
}
