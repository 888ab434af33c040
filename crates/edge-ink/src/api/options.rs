//! Aggregate configuration for the whole pipeline.

use crate::edges::EdgeOptions;
use crate::frame::FrameOptions;
use crate::prefilter::{LineStyle, SmoothingOptions};
use crate::separator::SeparatorOptions;
use crate::tone::EqualizerOptions;

/// Every tunable of the stylization pipeline, grouped by stage.
///
/// `StylizeOptions::default()` reproduces the reference look: thin lines,
/// all equalizer passes on, separators on, no frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StylizeOptions {
    pub line_style: LineStyle,
    pub smoothing: SmoothingOptions,
    pub edges: EdgeOptions,
    pub equalizer: EqualizerOptions,
    pub separators: SeparatorOptions,
    pub frame: FrameOptions,
}

impl StylizeOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    #[inline]
    pub fn smoothing(mut self, smoothing: SmoothingOptions) -> Self {
        self.smoothing = smoothing;
        self
    }

    #[inline]
    pub fn edges(mut self, edges: EdgeOptions) -> Self {
        self.edges = edges;
        self
    }

    #[inline]
    pub fn equalizer(mut self, equalizer: EqualizerOptions) -> Self {
        self.equalizer = equalizer;
        self
    }

    #[inline]
    pub fn separators(mut self, separators: SeparatorOptions) -> Self {
        self.separators = separators;
        self
    }

    #[inline]
    pub fn frame(mut self, frame: FrameOptions) -> Self {
        self.frame = frame;
        self
    }

    /// Set the line-pixel threshold used by both the equalizer and
    /// separator injection.
    #[inline]
    pub fn mask_threshold(mut self, threshold: f32) -> Self {
        self.equalizer.mask_threshold = threshold;
        self.separators.mask_threshold = threshold;
        self
    }
}
