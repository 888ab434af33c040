pub mod config;
pub mod request;

pub use config::{
    AppConfig, BatchConfig, EdgeTuning, EqualizerTuning, FrameTuning, LimitsConfig, OutputConfig,
    SeparatorTuning, SmoothingTuning, TuningConfig,
};
pub use request::RenderOverrides;
