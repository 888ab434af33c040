//! Line style selection and the bold-mode smoothing law.

use std::fmt;
use std::str::FromStr;

/// Stroke style requested by the caller.
///
/// - `Thin`: the input is analysed as-is (fine detail, thin strokes)
/// - `Bold`: the input is smoothed first, merging texture into thicker strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Thin,
    Bold,
}

impl LineStyle {
    /// Resolve a style name leniently.
    ///
    /// Names are trimmed and compared case-insensitively. `None` and any
    /// unrecognized name fall back to [`LineStyle::Thin`].
    ///
    /// ```
    /// use edge_ink::LineStyle;
    ///
    /// assert_eq!(LineStyle::from_name(Some(" BOLD ")), LineStyle::Bold);
    /// assert_eq!(LineStyle::from_name(Some("sketchy")), LineStyle::Thin);
    /// assert_eq!(LineStyle::from_name(None), LineStyle::Thin);
    /// ```
    pub fn from_name(name: Option<&str>) -> Self {
        name.and_then(|n| n.parse().ok()).unwrap_or_default()
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            LineStyle::Thin => "thin",
            LineStyle::Bold => "bold",
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a style name is not `thin` or `bold`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLineStyleError(String);

impl fmt::Display for ParseLineStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown line style '{}' (expected 'thin' or 'bold')", self.0)
    }
}

impl std::error::Error for ParseLineStyleError {}

impl FromStr for LineStyle {
    type Err = ParseLineStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "thin" => Ok(LineStyle::Thin),
            "bold" => Ok(LineStyle::Bold),
            _ => Err(ParseLineStyleError(s.to_string())),
        }
    }
}

/// Sigma law for bold-mode smoothing.
///
/// `sigma = clamp(base_sigma * min(width, height) / reference_size, min_sigma, max_sigma)`
///
/// # Defaults
///
/// - `base_sigma`: 0.8
/// - `reference_size`: 512.0
/// - `min_sigma` / `max_sigma`: 0.6 / 1.8
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingOptions {
    pub base_sigma: f32,
    pub reference_size: f32,
    pub min_sigma: f32,
    pub max_sigma: f32,
}

impl Default for SmoothingOptions {
    fn default() -> Self {
        Self {
            base_sigma: 0.8,
            reference_size: 512.0,
            min_sigma: 0.6,
            max_sigma: 1.8,
        }
    }
}

impl SmoothingOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn base_sigma(mut self, sigma: f32) -> Self {
        self.base_sigma = sigma;
        self
    }

    #[inline]
    pub fn reference_size(mut self, size: f32) -> Self {
        self.reference_size = size;
        self
    }

    /// Set the clamp range applied to the computed sigma.
    #[inline]
    pub fn sigma_range(mut self, min: f32, max: f32) -> Self {
        self.min_sigma = min;
        self.max_sigma = max;
        self
    }

    /// Sigma for an image of the given dimensions.
    ///
    /// Monotonically non-decreasing in `min(width, height)`.
    pub fn sigma_for(&self, width: usize, height: usize) -> f32 {
        let scale = width.min(height) as f32 / self.reference_size;
        (self.base_sigma * scale).clamp(self.min_sigma, self.max_sigma)
    }
}
