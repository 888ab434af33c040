//! Order statistics over value slices.

/// A sorted copy of `values` ready for repeated percentile queries.
#[derive(Debug, Clone)]
pub struct Sorted(Vec<f32>);

impl Sorted {
    pub fn new(values: &[f32]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f32::total_cmp);
        Self(sorted)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Percentile `pct` in `[0, 100]`, linearly interpolated between the
    /// two closest ranks (`rank = pct / 100 * (n - 1)`).
    ///
    /// Returns `None` for an empty slice.
    pub fn percentile(&self, pct: f32) -> Option<f32> {
        let n = self.0.len();
        if n == 0 {
            return None;
        }
        let rank = (pct.clamp(0.0, 100.0) / 100.0) as f64 * (n - 1) as f64;
        let lo = rank.floor() as usize;
        let hi = rank.ceil() as usize;
        let frac = (rank - lo as f64) as f32;
        let a = self.0[lo];
        let b = self.0[hi.min(n - 1)];
        Some(a + (b - a) * frac)
    }

    #[inline]
    pub fn median(&self) -> Option<f32> {
        self.percentile(50.0)
    }

    #[inline]
    pub fn min(&self) -> Option<f32> {
        self.0.first().copied()
    }

    #[inline]
    pub fn max(&self) -> Option<f32> {
        self.0.last().copied()
    }
}

/// Percentile of an unsorted slice. See [`Sorted::percentile`].
pub fn percentile(values: &[f32], pct: f32) -> Option<f32> {
    Sorted::new(values).percentile(pct)
}

/// Median of an unsorted slice.
pub fn median(values: &[f32]) -> Option<f32> {
    Sorted::new(values).median()
}
