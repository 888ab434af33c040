use crate::error::ConfigError;
use edge_ink::{LineStyle, StylizeOptions, ToneBand};
use serde::{Deserialize, Serialize};
use std::path::Path;

const MIB: usize = 1024 * 1024;

/// Application configuration loaded from a YAML file.
///
/// Every section is optional; missing keys keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Overrides for the stylization pipeline
    pub tuning: TuningConfig,

    /// Input size limits
    pub limits: LimitsConfig,

    /// PNG output settings
    pub output: OutputConfig,

    /// Batch processing settings
    pub batch: BatchConfig,
}

/// Input size limits, checked before and during decoding.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Largest accepted encoded file, in bytes
    pub max_input_bytes: usize,
    /// Largest accepted `width * height`
    pub max_pixels: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: 20 * MIB,
            max_pixels: 40_000_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Re-compress PNGs with oxipng
    pub optimize_png: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { optimize_png: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Concurrent renders; unset means one per available CPU
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
}

impl BatchConfig {
    pub fn effective_jobs(&self) -> usize {
        self.jobs.filter(|&j| j > 0).unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }
}

/// Pipeline overrides. Unset values keep the pipeline defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TuningConfig {
    /// `thin` or `bold`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<String>,
    pub smoothing: SmoothingTuning,
    pub edges: EdgeTuning,
    pub equalizer: EqualizerTuning,
    pub separators: SeparatorTuning,
    pub frame: FrameTuning,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SmoothingTuning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_sigma: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_sigma: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sigma: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EdgeTuning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue_scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub luminance_scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue_exponent: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flatness_exponent: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation_exponent: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost_weight: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EqualizerTuning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_threshold: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strong_factor: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_factor: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness_equalizer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness_low_percentile: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness_high_percentile: Option<f32>,
    /// `[min, max]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness_band: Option<[f32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_lift: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lift: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lift_floor: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uniformizer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uniformizer_percentile: Option<f32>,
    /// `[min, max]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uniformizer_band: Option<[f32; 2]>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SeparatorTuning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_base: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FrameTuning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
}

fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *target = v;
    }
}

fn band(value: [f32; 2]) -> ToneBand {
    ToneBand::new(value[0], value[1])
}

impl TuningConfig {
    /// Apply the overrides on top of the pipeline defaults.
    ///
    /// An unrecognized line style falls back to thin.
    pub fn to_options(&self) -> StylizeOptions {
        let mut opts = StylizeOptions::default();
        opts.line_style = LineStyle::from_name(self.line_style.as_deref());

        let s = &self.smoothing;
        set(&mut opts.smoothing.base_sigma, s.base_sigma);
        set(&mut opts.smoothing.reference_size, s.reference_size);
        set(&mut opts.smoothing.min_sigma, s.min_sigma);
        set(&mut opts.smoothing.max_sigma, s.max_sigma);

        let e = &self.edges;
        set(&mut opts.edges.gain, e.gain);
        set(&mut opts.edges.gamma, e.gamma);
        set(&mut opts.edges.hue_scale, e.hue_scale);
        set(&mut opts.edges.luminance_scale, e.luminance_scale);
        set(&mut opts.edges.hue_exponent, e.hue_exponent);
        set(&mut opts.edges.flatness_exponent, e.flatness_exponent);
        set(&mut opts.edges.saturation_exponent, e.saturation_exponent);
        set(&mut opts.edges.boost_weight, e.boost_weight);

        let q = &self.equalizer;
        if let Some(threshold) = q.mask_threshold {
            opts = opts.mask_threshold(threshold);
        }
        let eq = &mut opts.equalizer;
        set(&mut eq.enabled, q.enabled);
        set(&mut eq.strong_factor, q.strong_factor);
        set(&mut eq.soft_factor, q.soft_factor);
        set(&mut eq.brightness_equalizer, q.brightness_equalizer);
        set(&mut eq.brightness_low_percentile, q.brightness_low_percentile);
        set(&mut eq.brightness_high_percentile, q.brightness_high_percentile);
        set(&mut eq.brightness_band, q.brightness_band.map(band));
        set(&mut eq.global_lift, q.global_lift);
        set(&mut eq.lift, q.lift);
        set(&mut eq.lift_floor, q.lift_floor);
        set(&mut eq.uniformizer, q.uniformizer);
        set(&mut eq.uniformizer_percentile, q.uniformizer_percentile);
        set(&mut eq.uniformizer_band, q.uniformizer_band.map(band));

        let r = &self.separators;
        set(&mut opts.separators.enabled, r.enabled);
        set(&mut opts.separators.coverage, r.coverage);
        set(&mut opts.separators.margin, r.margin);
        set(&mut opts.separators.line_width, r.line_width);
        set(&mut opts.separators.fallback_base, r.fallback_base);

        set(&mut opts.frame.enabled, self.frame.enabled);
        set(&mut opts.frame.width, self.frame.width);

        opts
    }

    /// Fully populated tuning describing `opts`, for display.
    pub fn from_options(opts: &StylizeOptions) -> Self {
        let eq = &opts.equalizer;
        Self {
            line_style: Some(opts.line_style.to_string()),
            smoothing: SmoothingTuning {
                base_sigma: Some(opts.smoothing.base_sigma),
                reference_size: Some(opts.smoothing.reference_size),
                min_sigma: Some(opts.smoothing.min_sigma),
                max_sigma: Some(opts.smoothing.max_sigma),
            },
            edges: EdgeTuning {
                gain: Some(opts.edges.gain),
                gamma: Some(opts.edges.gamma),
                hue_scale: Some(opts.edges.hue_scale),
                luminance_scale: Some(opts.edges.luminance_scale),
                hue_exponent: Some(opts.edges.hue_exponent),
                flatness_exponent: Some(opts.edges.flatness_exponent),
                saturation_exponent: Some(opts.edges.saturation_exponent),
                boost_weight: Some(opts.edges.boost_weight),
            },
            equalizer: EqualizerTuning {
                enabled: Some(eq.enabled),
                mask_threshold: Some(eq.mask_threshold),
                strong_factor: Some(eq.strong_factor),
                soft_factor: Some(eq.soft_factor),
                brightness_equalizer: Some(eq.brightness_equalizer),
                brightness_low_percentile: Some(eq.brightness_low_percentile),
                brightness_high_percentile: Some(eq.brightness_high_percentile),
                brightness_band: Some([eq.brightness_band.min, eq.brightness_band.max]),
                global_lift: Some(eq.global_lift),
                lift: Some(eq.lift),
                lift_floor: Some(eq.lift_floor),
                uniformizer: Some(eq.uniformizer),
                uniformizer_percentile: Some(eq.uniformizer_percentile),
                uniformizer_band: Some([eq.uniformizer_band.min, eq.uniformizer_band.max]),
            },
            separators: SeparatorTuning {
                enabled: Some(opts.separators.enabled),
                coverage: Some(opts.separators.coverage),
                margin: Some(opts.separators.margin),
                line_width: Some(opts.separators.line_width),
                fallback_base: Some(opts.separators.fallback_base),
            },
            frame: FrameTuning {
                enabled: Some(opts.frame.enabled),
                width: Some(opts.frame.width),
            },
        }
    }
}

impl AppConfig {
    /// Parse and validate YAML.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, failing on any problem.
    pub fn load_strict(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load from `path`, falling back to defaults with a warning.
    ///
    /// `None` means no config file was configured.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file configured, using defaults");
            return Self::default();
        };
        match Self::load_strict(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    line_style = config.tuning.line_style.as_deref().unwrap_or("thin"),
                    max_input_bytes = config.limits.max_input_bytes,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = &self.tuning.line_style {
            name.parse::<LineStyle>()
                .map_err(|e| ConfigError::Invalid {
                    field: "tuning.line_style",
                    message: e.to_string(),
                })?;
        }
        if self.limits.max_input_bytes == 0 {
            return Err(ConfigError::Invalid {
                field: "limits.max_input_bytes",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.limits.max_pixels == 0 {
            return Err(ConfigError::Invalid {
                field: "limits.max_pixels",
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(threshold) = self.tuning.equalizer.mask_threshold {
            if !(threshold > 0.0 && threshold <= 1.0) {
                return Err(ConfigError::Invalid {
                    field: "tuning.equalizer.mask_threshold",
                    message: format!("{threshold} is outside (0, 1]"),
                });
            }
        }
        if self.batch.jobs == Some(0) {
            return Err(ConfigError::Invalid {
                field: "batch.jobs",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// The configuration with every tuning value spelled out.
    pub fn effective(&self) -> Self {
        let mut resolved = self.clone();
        resolved.tuning = TuningConfig::from_options(&self.tuning.to_options());
        resolved.batch.jobs = Some(self.batch.effective_jobs());
        resolved
    }

    pub fn stylize_options(&self) -> StylizeOptions {
        self.tuning.to_options()
    }
}
