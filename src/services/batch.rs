//! Directory batch rendering with bounded concurrency.

use crate::error::RenderError;
use crate::models::RenderOverrides;
use crate::rendering::InputFormat;
use crate::services::StylizeService;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;

/// Outcome of one input file.
#[derive(Debug, Clone, Serialize)]
pub struct BatchItem {
    pub input: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub separators: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

impl BatchItem {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary of a batch run, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub jobs: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub elapsed_ms: u64,
    pub items: Vec<BatchItem>,
}

/// Supported image files directly inside `dir`, sorted by path.
pub fn collect_inputs(dir: &Path) -> Result<Vec<PathBuf>, RenderError> {
    let mut inputs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let accepted = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(InputFormat::accepts_extension);
        if path.is_file() && accepted {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// Output PNG path for each input.
///
/// Inputs map to `<stem>.png`. When several inputs share a stem (`a.jpg`
/// and `a.png`) each of them keeps its full name instead (`a.jpg.png`).
pub fn plan_outputs(inputs: &[PathBuf], output_dir: &Path) -> Vec<PathBuf> {
    let mut stem_counts: HashMap<&std::ffi::OsStr, usize> = HashMap::new();
    for input in inputs {
        if let Some(stem) = input.file_stem() {
            *stem_counts.entry(stem).or_default() += 1;
        }
    }

    inputs
        .iter()
        .map(|input| {
            let stem = input.file_stem().unwrap_or_default();
            let name = if stem_counts.get(stem).copied().unwrap_or(0) > 1 {
                let mut full = input.file_name().unwrap_or_default().to_os_string();
                full.push(".png");
                full
            } else {
                let mut plain = stem.to_os_string();
                plain.push(".png");
                plain
            };
            output_dir.join(name)
        })
        .collect()
}

async fn process_one(
    service: StylizeService,
    input: PathBuf,
    output: PathBuf,
    overrides: RenderOverrides,
) -> BatchItem {
    let start = Instant::now();
    let result = async {
        let bytes = tokio::fs::read(&input).await?;
        let rendered = service.render_png_async(bytes, overrides).await?;
        tokio::fs::write(&output, &rendered.png).await?;
        Ok::<_, RenderError>(rendered)
    }
    .await;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(rendered) => {
            tracing::debug!(
                input = %input.display(),
                output = %output.display(),
                elapsed_ms,
                "Batch item done"
            );
            BatchItem {
                input,
                output: Some(output),
                width: Some(rendered.width),
                height: Some(rendered.height),
                separators: rendered.separators,
                error: None,
                elapsed_ms,
            }
        }
        Err(e) => {
            tracing::warn!(input = %input.display(), %e, "Batch item failed");
            BatchItem {
                input,
                output: None,
                width: None,
                height: None,
                separators: Vec::new(),
                error: Some(e.to_string()),
                elapsed_ms,
            }
        }
    }
}

/// Render every supported image in `input_dir` into `output_dir`.
///
/// At most `jobs` images are in flight at once. A failing file is recorded
/// in the report and does not stop the batch; only problems with the
/// directories themselves are returned as errors.
pub async fn run_batch(
    service: &StylizeService,
    input_dir: &Path,
    output_dir: &Path,
    jobs: usize,
    overrides: RenderOverrides,
) -> Result<BatchReport, RenderError> {
    let start = Instant::now();
    let jobs = jobs.max(1);
    let inputs = collect_inputs(input_dir)?;
    tokio::fs::create_dir_all(output_dir).await?;
    let outputs = plan_outputs(&inputs, output_dir);

    tracing::info!(
        input_dir = %input_dir.display(),
        files = inputs.len(),
        jobs,
        "Starting batch"
    );

    let semaphore = Arc::new(Semaphore::new(jobs));
    let mut handles = Vec::with_capacity(inputs.len());
    for (input, output) in inputs.into_iter().zip(outputs) {
        let permit = semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| RenderError::Task(e.to_string()))?;
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            let item = process_one(service, input, output, overrides).await;
            drop(permit);
            item
        }));
    }

    let mut items = Vec::with_capacity(handles.len());
    for handle in handles {
        items.push(handle.await.map_err(|e| RenderError::Task(e.to_string()))?);
    }

    let succeeded = items.iter().filter(|i| i.is_ok()).count();
    let report = BatchReport {
        input_dir: input_dir.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        jobs,
        succeeded,
        failed: items.len() - succeeded,
        elapsed_ms: start.elapsed().as_millis() as u64,
        items,
    };

    tracing::info!(
        succeeded = report.succeeded,
        failed = report.failed,
        elapsed_ms = report.elapsed_ms,
        "Batch finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plan_outputs_plain_stems() {
        let inputs = vec![PathBuf::from("in/a.jpg"), PathBuf::from("in/b.webp")];
        let outputs = plan_outputs(&inputs, Path::new("out"));
        assert_eq!(
            outputs,
            vec![PathBuf::from("out/a.png"), PathBuf::from("out/b.png")]
        );
    }

    #[test]
    fn test_plan_outputs_disambiguates_shared_stems() {
        let inputs = vec![
            PathBuf::from("in/a.jpg"),
            PathBuf::from("in/a.png"),
            PathBuf::from("in/c.png"),
        ];
        let outputs = plan_outputs(&inputs, Path::new("out"));
        assert_eq!(
            outputs,
            vec![
                PathBuf::from("out/a.jpg.png"),
                PathBuf::from("out/a.png.png"),
                PathBuf::from("out/c.png"),
            ]
        );
    }

    #[test]
    fn test_collect_inputs_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.PNG", "a.jpg", "notes.txt", "c.webp", "d.gif"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("sub.png")).unwrap();

        let names: Vec<String> = collect_inputs(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.PNG", "c.webp"]);
    }

    #[test]
    fn test_collect_inputs_missing_dir() {
        let err = collect_inputs(Path::new("/nonexistent/edgewizard-input")).unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
    }
}
