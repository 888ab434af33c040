//! Scalar fields: the single-channel float grids every stage exchanges.
//!
//! A [`Field`] stores one `f32` per pixel in row-major order. Luminance,
//! hue, saturation, edge strength, ink and the final grayscale tone all use
//! the same representation so stages can be chained without conversions.

/// A row-major grid of `f32` values with fixed dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl Field {
    /// Create a field filled with `value`.
    pub fn filled(width: usize, height: usize, value: f32) -> Self {
        Self {
            data: vec![value; width * height],
            width,
            height,
        }
    }

    /// Wrap existing row-major data.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `data.len() == width * height`.
    pub fn from_vec(data: Vec<f32>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            width * height,
            "field data length ({}) must match width * height ({}x{})",
            data.len(),
            width,
            height,
        );
        Self {
            data,
            width,
            height,
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
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Value at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        self.data[y * self.width + x] = value;
    }

    /// One row as a slice.
    #[inline]
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Apply `f` to every value, producing a new field of the same size.
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            data: self.data.iter().map(|&v| f(v)).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Largest value, or `0.0` for an empty field.
    pub fn max_value(&self) -> f32 {
        self.data.iter().copied().fold(0.0_f32, f32::max)
    }

    /// Divide by the field's own maximum, never by less than `floor`.
    ///
    /// This is the adaptive per-image rescale used for luminance and for
    /// the combined gradient.
    pub fn normalize_by_max(&self, floor: f32) -> Self {
        let max = self.max_value().max(floor);
        self.map(|v| v / max)
    }

    /// Clamp every value into `[0, 1]` in place.
    pub fn clamp_unit(&mut self) {
        for v in &mut self.data {
            *v = v.clamp(0.0, 1.0);
        }
    }

    /// Quantize to 8-bit grayscale by truncation after clamping to `[0, 1]`.
    pub fn to_gray8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0) as u8)
            .collect()
    }
}
