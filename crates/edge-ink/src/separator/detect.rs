//! Vertical red/green boundary detection.

use super::options::SeparatorOptions;
use crate::color::{Rgb, RgbImage};

const MIN_CHANNEL: f32 = 0.4;
const MIN_DOMINANCE: f32 = 0.12;

/// Strongly red: `R > 0.4` and `R` exceeds the other channels by > 0.12.
#[inline]
pub fn is_red(px: Rgb) -> bool {
    px.r > MIN_CHANNEL && px.r - px.g.max(px.b) > MIN_DOMINANCE
}

/// Strongly green, same rule as [`is_red`] on the green channel.
#[inline]
pub fn is_green(px: Rgb) -> bool {
    px.g > MIN_CHANNEL && px.g - px.r.max(px.b) > MIN_DOMINANCE
}

/// Fraction of rows where column `x - 1` and column `x` form a red/green
/// (or green/red) pair.
fn column_coverage(red: &[bool], green: &[bool], width: usize, height: usize, x: usize) -> f32 {
    let matches = (0..height)
        .filter(|&y| {
            let left = y * width + x - 1;
            let right = left + 1;
            (red[left] && green[right]) || (green[left] && red[right])
        })
        .count();
    matches as f32 / height as f32
}

/// Collapse runs of consecutive columns to their (floored) centers.
pub fn collapse_runs(columns: &[usize]) -> Vec<usize> {
    let mut centers = Vec::new();
    let mut iter = columns.iter().copied();
    let Some(first) = iter.next() else {
        return centers;
    };

    let (mut start, mut prev) = (first, first);
    for x in iter {
        if x == prev + 1 {
            prev = x;
        } else {
            centers.push((start + prev) / 2);
            start = x;
            prev = x;
        }
    }
    centers.push((start + prev) / 2);
    centers
}

/// Find vertical red/green boundaries, returned as ascending x positions.
///
/// Columns within `margin` of either side are not considered.
pub fn detect_separators(image: &RgbImage, opts: &SeparatorOptions) -> Vec<usize> {
    let w = image.width();
    let h = image.height();
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let margin = f64::from(opts.margin);
    let x_min = (w as f64 * margin) as usize;
    let x_max = (w as f64 * (1.0 - margin)) as usize;
    if x_max <= x_min + 1 {
        return Vec::new();
    }

    let red: Vec<bool> = image.pixels().iter().map(|&px| is_red(px)).collect();
    let green: Vec<bool> = image.pixels().iter().map(|&px| is_green(px)).collect();

    let candidates: Vec<usize> = (x_min + 1..x_max.min(w))
        .filter(|&x| column_coverage(&red, &green, w, h, x) >= opts.coverage)
        .collect();

    collapse_runs(&candidates)
}
