//! RGB pixel and raster types.
//!
//! The pipeline works on display-referred RGB exactly as decoded (sRGB
//! assumed, no linearization): luminance weights and the red/green
//! classification thresholds are tuned against encoded values.

/// An RGB color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel (0.0..=1.0)
    pub r: f32,
    /// Green channel (0.0..=1.0)
    pub g: f32,
    /// Blue channel (0.0..=1.0)
    pub b: f32,
}

impl Rgb {
    /// Create a new color from float values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use edge_ink::Rgb;
    /// let red = Rgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to `[R, G, B]` bytes, truncating after clamping.
    ///
    /// Truncation (not rounding) matches how the blurred pre-filter output
    /// is re-quantized.
    #[inline]
    pub fn to_bytes_truncated(self) -> [u8; 3] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0) as u8,
            (self.g.clamp(0.0, 1.0) * 255.0) as u8,
            (self.b.clamp(0.0, 1.0) * 255.0) as u8,
        ]
    }

    /// Largest channel value.
    #[inline]
    pub fn max_channel(self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    /// Smallest channel value.
    #[inline]
    pub fn min_channel(self) -> f32 {
        self.r.min(self.g).min(self.b)
    }
}

/// An RGB raster image, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbImage {
    pixels: Vec<Rgb>,
    width: usize,
    height: usize,
}

impl RgbImage {
    /// Wrap existing pixels.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height`.
    pub fn new(pixels: Vec<Rgb>, width: usize, height: usize) -> Self {
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
        }
    }

    /// Build an image from packed 8-bit `RGBRGB...` bytes.
    ///
    /// Returns `None` when the buffer length does not match the dimensions.
    pub fn from_rgb8(bytes: &[u8], width: usize, height: usize) -> Option<Self> {
        if bytes.len() != width.checked_mul(height)?.checked_mul(3)? {
            return None;
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| Rgb::from_u8(px[0], px[1], px[2]))
            .collect();
        Some(Self::new(pixels, width, height))
    }

    /// A single-color image.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self::new(vec![color; width * height], width, height)
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
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Pixel at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    /// Replace the pixel at `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        self.pixels[y * self.width + x] = color;
    }
}
