//! The grayscale result of a stylization run.

/// 8-bit grayscale line art plus the separator columns that were drawn.
///
/// Pixels are row-major, one byte per pixel, 0 = black ink, 255 = paper.
///
/// # Example
///
/// ```
/// use edge_ink::StylizedImage;
///
/// let image = StylizedImage::new(vec![255, 0, 255, 0], 2, 2, vec![1]);
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.pixel(1, 0), 0);
/// assert_eq!(image.separators(), &[1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylizedImage {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
    separators: Vec<usize>,
}

impl StylizedImage {
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height`.
    pub fn new(pixels: Vec<u8>, width: usize, height: usize, separators: Vec<usize>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width * height,
            "pixel count ({}) must match width * height ({}x{})",
            pixels.len(),
            width,
            height,
        );
        Self {
            pixels,
            width,
            height,
            separators,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.width + x]
    }

    /// X positions of the injected red/green separators, ascending.
    #[inline]
    pub fn separators(&self) -> &[usize] {
        &self.separators
    }

    #[inline]
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Mean gray level; 255.0 is blank paper. `0.0` for an empty image.
    pub fn mean(&self) -> f64 {
        if self.pixels.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.pixels.iter().map(|&p| u64::from(p)).sum();
        sum as f64 / self.pixels.len() as f64
    }
}
