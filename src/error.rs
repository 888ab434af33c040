use edge_ink::StylizeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("Image too large: {size} bytes (max {max})")]
    InputTooLarge { size: usize, max: usize },

    #[error("Too many pixels: {width}x{height} (max {max})")]
    TooManyPixels { width: u32, height: u32, max: u64 },

    #[error("Stylize error: {0}")]
    Stylize(#[from] StylizeError),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Render task failed: {0}")]
    Task(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}
