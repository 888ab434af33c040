use crate::error::RenderError;
use crate::models::{AppConfig, LimitsConfig, RenderOverrides};
use crate::rendering::{decode_rgb, encode_gray_png, to_data_url, DecodedImage, InputFormat};
use edge_ink::{EdgeStylizer, LineStyle, StylizeOptions, StylizedImage};
use std::time::{Duration, Instant};

/// A finished render: encoded PNG plus what the pipeline saw.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub input_format: InputFormat,
    pub line_style: LineStyle,
    pub border: bool,
    pub separators: Vec<usize>,
    pub elapsed: Duration,
}

impl RenderOutput {
    /// The PNG as a `data:image/png;base64,` URL.
    pub fn data_url(&self) -> String {
        to_data_url(&self.png)
    }
}

/// Decode, stylize and encode, with configured limits and tuning.
///
/// Cheap to clone; clones share nothing mutable.
#[derive(Debug, Clone)]
pub struct StylizeService {
    options: StylizeOptions,
    limits: LimitsConfig,
    optimize_png: bool,
}

impl StylizeService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            options: config.stylize_options(),
            limits: config.limits.clone(),
            optimize_png: config.output.optimize_png,
        }
    }

    /// Base options before per-call overrides.
    pub fn options(&self) -> &StylizeOptions {
        &self.options
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    /// Configured options with `overrides` layered on top.
    pub fn resolve_options(&self, overrides: RenderOverrides) -> StylizeOptions {
        overrides.apply(&self.options)
    }

    /// Run the pipeline on an already decoded image.
    pub fn stylize_decoded(
        &self,
        decoded: &DecodedImage,
        overrides: RenderOverrides,
    ) -> Result<StylizedImage, RenderError> {
        let stylizer = EdgeStylizer::with_options(self.resolve_options(overrides));
        run_stylizer(&stylizer, decoded)
    }

    /// Encoded image bytes in, PNG bytes out.
    pub fn render_png(
        &self,
        bytes: &[u8],
        overrides: RenderOverrides,
    ) -> Result<RenderOutput, RenderError> {
        let start = Instant::now();
        let decoded = decode_rgb(bytes, &self.limits)?;
        let stylizer = EdgeStylizer::with_options(self.resolve_options(overrides));
        let opts = stylizer.options();
        let stylized = run_stylizer(&stylizer, &decoded)?;
        let png = encode_gray_png(&stylized, self.optimize_png)?;
        let elapsed = start.elapsed();

        tracing::info!(
            width = decoded.width,
            height = decoded.height,
            format = %decoded.format,
            style = %opts.line_style,
            border = opts.frame.enabled,
            separators = stylized.separators().len(),
            png_bytes = png.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Rendered line art"
        );

        Ok(RenderOutput {
            png,
            width: decoded.width,
            height: decoded.height,
            input_format: decoded.format,
            line_style: opts.line_style,
            border: opts.frame.enabled,
            separators: stylized.separators().to_vec(),
            elapsed,
        })
    }

    /// [`render_png`](Self::render_png) on the blocking thread pool.
    ///
    /// Decoding, the pipeline and PNG optimization are all CPU-bound, so
    /// none of it runs on the async worker threads.
    pub async fn render_png_async(
        &self,
        bytes: Vec<u8>,
        overrides: RenderOverrides,
    ) -> Result<RenderOutput, RenderError> {
        let service = self.clone();

        tokio::task::spawn_blocking(move || service.render_png(&bytes, overrides))
            .await
            .map_err(|e| RenderError::Task(e.to_string()))?
    }
}

fn run_stylizer(
    stylizer: &EdgeStylizer,
    decoded: &DecodedImage,
) -> Result<StylizedImage, RenderError> {
    let width = decoded.width as usize;
    let height = decoded.height as usize;
    Ok(stylizer.stylize_rgb8(&decoded.rgb, width, height)?)
}
