use anyhow::Context;
use clap::{Parser, Subcommand};
use edge_ink::LineStyle;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edgewizard::models::{AppConfig, RenderOverrides};
use edgewizard::services::{run_batch, StylizeService};

#[derive(Parser)]
#[command(name = "edgewizard")]
#[command(about = "EdgeWizard - turn photos into clean line-art renderings")]
struct Cli {
    /// Config file (overrides CONFIG_FILE); errors in it are fatal
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one image to a grayscale PNG
    Render {
        /// Input image (PNG, JPEG or WebP)
        input: PathBuf,

        /// Output PNG file path (default: <input stem>.edges.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Line style: "thin" or "bold"
        #[arg(short, long)]
        style: Option<LineStyle>,

        /// Draw a black frame around the result
        #[arg(long)]
        border: bool,

        /// Never draw the frame, even if the config enables it
        #[arg(long, conflicts_with = "border")]
        no_border: bool,

        /// Print {"result_data_url": "data:image/png;base64,..."} to stdout
        #[arg(long)]
        data_url: bool,
    },
    /// Render every image in a directory
    Batch {
        /// Directory with input images
        input_dir: PathBuf,

        /// Directory for the PNG results (created if missing)
        output_dir: PathBuf,

        /// Concurrent renders (default: batch.jobs from config, else CPU count)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Line style: "thin" or "bold"
        #[arg(short, long)]
        style: Option<LineStyle>,

        /// Draw a black frame around each result
        #[arg(long)]
        border: bool,

        /// Never draw the frame
        #[arg(long, conflicts_with = "border")]
        no_border: bool,

        /// Print the batch report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as YAML
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            input,
            output,
            style,
            border,
            no_border,
            data_url,
        }) => {
            init_logging("edgewizard=info");
            let config = load_config(cli.config.as_deref())?;
            let overrides = build_overrides(style, border, no_border);
            run_render_command(&config, &input, output, overrides, data_url)
        }
        Some(Commands::Batch {
            input_dir,
            output_dir,
            jobs,
            style,
            border,
            no_border,
            json,
        }) => {
            init_logging("edgewizard=info");
            let config = load_config(cli.config.as_deref())?;
            let overrides = build_overrides(style, border, no_border);
            run_batch_command(&config, &input_dir, &output_dir, jobs, overrides, json).await
        }
        Some(Commands::Config) => {
            init_logging("edgewizard=warn");
            let config = load_config(cli.config.as_deref())?;
            print!("{}", serde_yaml::to_string(&config.effective())?);
            Ok(())
        }
        None => {
            run_status_command(cli.config.as_deref());
            Ok(())
        }
    }
}

fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

/// `--config` must load cleanly; `CONFIG_FILE` falls back to defaults.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        let config = AppConfig::load_strict(path)
            .with_context(|| format!("loading config {}", path.display()))?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        return Ok(config);
    }
    let from_env = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    Ok(AppConfig::load_or_default(from_env.as_deref()))
}

fn build_overrides(style: Option<LineStyle>, border: bool, no_border: bool) -> RenderOverrides {
    let border = match (border, no_border) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    RenderOverrides {
        line_style: style,
        border,
    }
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{stem}.edges.png"))
}

/// Render a single file (no async runtime work needed)
fn run_render_command(
    config: &AppConfig,
    input: &Path,
    output: Option<PathBuf>,
    overrides: RenderOverrides,
    data_url: bool,
) -> anyhow::Result<()> {
    let service = StylizeService::new(config);
    let bytes = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let rendered = service
        .render_png(&bytes, overrides)
        .with_context(|| format!("rendering {}", input.display()))?;

    if data_url {
        let body = serde_json::json!({ "result_data_url": rendered.data_url() });
        println!("{body}");
        if let Some(output) = output {
            std::fs::write(&output, &rendered.png)?;
        }
        return Ok(());
    }

    let output = output.unwrap_or_else(|| default_output_path(input));
    std::fs::write(&output, &rendered.png)
        .with_context(|| format!("writing {}", output.display()))?;
    println!(
        "Rendered {} ({}x{}, {} style, {} separator(s), {} bytes)",
        output.display(),
        rendered.width,
        rendered.height,
        rendered.line_style,
        rendered.separators.len(),
        rendered.png.len()
    );
    Ok(())
}

async fn run_batch_command(
    config: &AppConfig,
    input_dir: &Path,
    output_dir: &Path,
    jobs: Option<usize>,
    overrides: RenderOverrides,
    json: bool,
) -> anyhow::Result<()> {
    let service = StylizeService::new(config);
    let jobs = jobs.unwrap_or_else(|| config.batch.effective_jobs());
    let report = run_batch(&service, input_dir, output_dir, jobs, overrides).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for item in &report.items {
            match (&item.output, &item.error) {
                (Some(out), _) => println!("  + {} -> {}", item.input.display(), out.display()),
                (None, Some(err)) => println!("  ! {}: {err}", item.input.display()),
                (None, None) => {}
            }
        }
        println!(
            "\n{} rendered, {} failed ({} ms, {} jobs)",
            report.succeeded, report.failed, report.elapsed_ms, report.jobs
        );
    }

    if report.failed > 0 {
        anyhow::bail!("{} of {} files failed", report.failed, report.items.len());
    }
    Ok(())
}

/// Display status and configuration information
fn run_status_command(explicit_config: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let rust_log = std::env::var("RUST_LOG").ok();

    println!("EdgeWizard v{VERSION}");
    println!("Photo to line-art renderer\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        rust_log.as_deref().unwrap_or("edgewizard=info (default)")
    );

    let source = explicit_config
        .map(Path::to_path_buf)
        .or_else(|| config_file.map(PathBuf::from));
    let config_source = match &source {
        Some(path) if path.exists() => path.display().to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    let config = match &source {
        Some(path) => AppConfig::load_strict(path).unwrap_or_default(),
        None => AppConfig::default(),
    };
    let opts = config.stylize_options();

    println!("\nConfiguration:");
    println!("  Source:      {config_source}");
    println!("  Line style:  {}", opts.line_style);
    println!(
        "  Border:      {}",
        if opts.frame.enabled {
            format!("on ({} px)", opts.frame.width)
        } else {
            "off".to_string()
        }
    );
    println!(
        "  Limits:      {} MiB, {} MP",
        config.limits.max_input_bytes / (1024 * 1024),
        config.limits.max_pixels / 1_000_000
    );
    println!("  Batch jobs:  {}", config.batch.effective_jobs());
    println!("  Formats:     png, jpeg, webp");

    println!("\nCommands:");
    println!("  edgewizard render   Render one image to PNG");
    println!("  edgewizard batch    Render a directory of images");
    println!("  edgewizard config   Print the effective configuration");
    println!("\nRun 'edgewizard --help' for more details.");
}
