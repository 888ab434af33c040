/// Tuning for red/green separator detection and line injection.
///
/// # Defaults
///
/// - `enabled`: true
/// - `coverage`: 0.25, fraction of rows that must show a red/green
///   transition at a column
/// - `margin`: 0.02, fraction of the width ignored at each side
/// - `line_width`: 1 pixel
/// - `fallback_base`: 0.34, line tone used when the image has no line
///   pixels to take a median from
#[derive(Debug, Clone, PartialEq)]
pub struct SeparatorOptions {
    pub enabled: bool,
    pub coverage: f32,
    pub margin: f32,
    pub line_width: usize,
    pub fallback_base: f32,
    /// Values below this are line pixels when computing the median tone.
    pub mask_threshold: f32,
}

impl Default for SeparatorOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            coverage: 0.25,
            margin: 0.02,
            line_width: 1,
            fallback_base: 0.34,
            mask_threshold: 0.985,
        }
    }
}

impl SeparatorOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[inline]
    pub fn coverage(mut self, coverage: f32) -> Self {
        self.coverage = coverage;
        self
    }

    #[inline]
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    #[inline]
    pub fn line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    #[inline]
    pub fn fallback_base(mut self, base: f32) -> Self {
        self.fallback_base = base;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let opts = SeparatorOptions::default();
        assert!(opts.enabled);
        assert!((opts.coverage - 0.25).abs() < f32::EPSILON);
        assert!((opts.margin - 0.02).abs() < f32::EPSILON);
        assert_eq!(opts.line_width, 1);
        assert!((opts.fallback_base - 0.34).abs() < f32::EPSILON);
    }

    #[test]
    fn test_builder() {
        let opts = SeparatorOptions::new().line_width(3).coverage(0.5).enabled(false);
        assert_eq!(opts.line_width, 3);
        assert!((opts.coverage - 0.5).abs() < f32::EPSILON);
        assert!(!opts.enabled);
    }
}
