//! Line tonal equalizer options.

/// A closed target band `[min, max]` that line tones are remapped onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneBand {
    pub min: f32,
    pub max: f32,
}

impl ToneBand {
    #[inline]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn midpoint(&self) -> f32 {
        (self.min + self.max) / 2.0
    }

    /// Linear map of `t` in `[0, 1]` onto the band.
    #[inline]
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + t * (self.max - self.min)
    }
}

/// Tuning for the four equalizer passes.
///
/// Pass A (base normalize) always runs when `enabled` is set; passes B, C
/// and D have their own switches.
///
/// # Defaults
///
/// | Field | Default |
/// |---|---|
/// | `enabled` | `true` |
/// | `mask_threshold` | 0.985 |
/// | `strong_factor` / `soft_factor` | 0.8 / 0.4 |
/// | `brightness_equalizer` | on, P5..P95 onto `[0.28, 0.34]` |
/// | `global_lift` | on, +0.01 with floor 0.33 |
/// | `uniformizer` | on, lowest decile onto `[0.33, 0.36]` |
#[derive(Debug, Clone, PartialEq)]
pub struct EqualizerOptions {
    pub enabled: bool,
    /// Values strictly below this count as line pixels.
    pub mask_threshold: f32,
    /// Pass A pull toward the median for values below P25.
    pub strong_factor: f32,
    /// Pass A pull toward the median for values in `[P25, median)`.
    pub soft_factor: f32,

    pub brightness_equalizer: bool,
    pub brightness_low_percentile: f32,
    pub brightness_high_percentile: f32,
    pub brightness_band: ToneBand,

    pub global_lift: bool,
    pub lift: f32,
    pub lift_floor: f32,

    pub uniformizer: bool,
    pub uniformizer_percentile: f32,
    pub uniformizer_band: ToneBand,
}

impl Default for EqualizerOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            mask_threshold: 0.985,
            strong_factor: 0.8,
            soft_factor: 0.4,
            brightness_equalizer: true,
            brightness_low_percentile: 5.0,
            brightness_high_percentile: 95.0,
            brightness_band: ToneBand::new(0.28, 0.34),
            global_lift: true,
            lift: 0.01,
            lift_floor: 0.33,
            uniformizer: true,
            uniformizer_percentile: 10.0,
            uniformizer_band: ToneBand::new(0.33, 0.36),
        }
    }
}

impl EqualizerOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Equalizer with every pass switched off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    #[inline]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[inline]
    pub fn mask_threshold(mut self, threshold: f32) -> Self {
        self.mask_threshold = threshold;
        self
    }

    /// Set the pass A factors.
    #[inline]
    pub fn base_factors(mut self, strong: f32, soft: f32) -> Self {
        self.strong_factor = strong;
        self.soft_factor = soft;
        self
    }

    #[inline]
    pub fn brightness_equalizer(mut self, on: bool) -> Self {
        self.brightness_equalizer = on;
        self
    }

    #[inline]
    pub fn brightness_band(mut self, band: ToneBand) -> Self {
        self.brightness_band = band;
        self
    }

    #[inline]
    pub fn global_lift(mut self, on: bool) -> Self {
        self.global_lift = on;
        self
    }

    #[inline]
    pub fn lift(mut self, lift: f32, floor: f32) -> Self {
        self.lift = lift;
        self.lift_floor = floor;
        self
    }

    #[inline]
    pub fn uniformizer(mut self, on: bool) -> Self {
        self.uniformizer = on;
        self
    }

    #[inline]
    pub fn uniformizer_band(mut self, band: ToneBand) -> Self {
        self.uniformizer_band = band;
        self
    }
}
