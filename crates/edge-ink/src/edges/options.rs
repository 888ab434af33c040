//! Edge engine options.

/// Tuning for the gradient magnitude engine.
///
/// # Defaults
///
/// - `gain`: 2.0 (>1.0 darkens edges)
/// - `gamma`: 0.8 (<1.0 adds contrast to near-line tones)
/// - `hue_scale` / `luminance_scale`: 0.20 / 0.25 normalizers for the
///   neighbor differences feeding the hue boost
/// - `hue_exponent`, `flatness_exponent`, `saturation_exponent`: 1.4, 2.0, 1.2
/// - `boost_weight`: 1.5, weight of the hue boost added to the luminance
///   gradient
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeOptions {
    pub gain: f32,
    pub gamma: f32,
    pub hue_scale: f32,
    pub luminance_scale: f32,
    pub hue_exponent: f32,
    pub flatness_exponent: f32,
    pub saturation_exponent: f32,
    pub boost_weight: f32,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            gain: 2.0,
            gamma: 0.8,
            hue_scale: 0.20,
            luminance_scale: 0.25,
            hue_exponent: 1.4,
            flatness_exponent: 2.0,
            saturation_exponent: 1.2,
            boost_weight: 1.5,
        }
    }
}

impl EdgeOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set edge gain.
    #[inline]
    pub fn gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    /// Set ink gamma.
    #[inline]
    pub fn gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the weight of the hue boost in the combined gradient.
    #[inline]
    pub fn boost_weight(mut self, weight: f32) -> Self {
        self.boost_weight = weight;
        self
    }
}
