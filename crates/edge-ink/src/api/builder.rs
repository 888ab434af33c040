//! EdgeStylizer builder, the main entry point of the crate.

use super::error::StylizeError;
use super::options::StylizeOptions;
use crate::color::{reduce, RgbImage};
use crate::edges::{compute_ink, EdgeOptions};
use crate::field::Field;
use crate::frame::draw_frame;
use crate::output::StylizedImage;
use crate::prefilter::{self, LineStyle, SmoothingOptions};
use crate::separator::{detect_separators, inject_separators, SeparatorOptions};
use crate::tone::{equalize, normalize_contrast, EqualizerOptions};

/// Photo to line-art converter.
///
/// Configuration methods consume and return `self`;
/// [`stylize()`](Self::stylize) takes `&self`, so one stylizer can serve
/// any number of images and threads.
///
/// # Example
///
/// ```
/// use edge_ink::{EdgeStylizer, LineStyle};
///
/// let stylizer = EdgeStylizer::new()
///     .line_style(LineStyle::Bold)
///     .border(true);
///
/// let rgb = vec![128u8; 4 * 4 * 3];
/// let result = stylizer.stylize_rgb8(&rgb, 4, 4).unwrap();
///
/// assert_eq!(result.width(), 4);
/// assert_eq!(result.pixel(0, 0), 0); // frame
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeStylizer {
    options: StylizeOptions,
}

impl EdgeStylizer {
    /// Stylizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: StylizeOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &StylizeOptions {
        &self.options
    }

    /// Set the line style (pre-filter).
    #[inline]
    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.options.line_style = style;
        self
    }

    /// Set the sigma law used by [`LineStyle::Bold`].
    #[inline]
    pub fn smoothing(mut self, smoothing: SmoothingOptions) -> Self {
        self.options.smoothing = smoothing;
        self
    }

    #[inline]
    pub fn edges(mut self, edges: EdgeOptions) -> Self {
        self.options.edges = edges;
        self
    }

    /// Set edge gain (>1.0 darkens edges).
    #[inline]
    pub fn gain(mut self, gain: f32) -> Self {
        self.options.edges = self.options.edges.gain(gain);
        self
    }

    /// Set ink gamma (<1.0 adds contrast near lines).
    #[inline]
    pub fn gamma(mut self, gamma: f32) -> Self {
        self.options.edges = self.options.edges.gamma(gamma);
        self
    }

    #[inline]
    pub fn equalizer(mut self, equalizer: EqualizerOptions) -> Self {
        self.options.equalizer = equalizer;
        self
    }

    #[inline]
    pub fn separators(mut self, separators: SeparatorOptions) -> Self {
        self.options.separators = separators;
        self
    }

    /// Enable or disable the black frame.
    #[inline]
    pub fn border(mut self, enabled: bool) -> Self {
        self.options.frame.enabled = enabled;
        self
    }

    /// Set the frame width in pixels.
    #[inline]
    pub fn border_width(mut self, width: usize) -> Self {
        self.options.frame.width = width;
        self
    }

    /// Run the pipeline on packed 8-bit `RGBRGB...` bytes.
    pub fn stylize_rgb8(
        &self,
        bytes: &[u8],
        width: usize,
        height: usize,
    ) -> Result<StylizedImage, StylizeError> {
        if width == 0 || height == 0 {
            return Err(StylizeError::EmptyImage { width, height });
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(StylizeError::TooLarge { width, height })?;
        let image = RgbImage::from_rgb8(bytes, width, height).ok_or(
            StylizeError::LengthMismatch {
                expected,
                actual: bytes.len(),
            },
        )?;
        Ok(self.stylize(&image))
    }

    /// Run the pipeline on a float RGB image.
    pub fn stylize(&self, image: &RgbImage) -> StylizedImage {
        let (field, separators) = self.stylize_field(image);
        StylizedImage::new(field.to_gray8(), image.width(), image.height(), separators)
    }

    /// Run the pipeline and keep the float tone field.
    ///
    /// Returns the field before 8-bit quantization, plus the separator
    /// positions that were injected.
    pub fn stylize_field(&self, image: &RgbImage) -> (Field, Vec<usize>) {
        let opts = &self.options;

        let filtered = prefilter::apply(image, opts.line_style, &opts.smoothing);
        let fields = reduce(&filtered);
        let ink = compute_ink(&fields, &opts.edges);
        let normalized = normalize_contrast(&ink);
        let mut field = equalize(&normalized, &opts.equalizer);

        let separators = if opts.separators.enabled {
            detect_separators(&filtered, &opts.separators)
        } else {
            Vec::new()
        };
        if !separators.is_empty() {
            field = inject_separators(&field, &separators, &opts.separators);
        }

        if opts.frame.enabled {
            field = draw_frame(&field, opts.frame.width);
        }

        field.clamp_unit();
        (field, separators)
    }
}
