//! Directory batch rendering.

mod common;

use common::fixtures;
use common::*;
use edgewizard::models::RenderOverrides;
use edgewizard::services::{run_batch, StylizeService};
use image::ImageFormat;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[tokio::test]
async fn test_batch_renders_supported_files() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let image = fixtures::rectangle(24, 16);

    fixtures::write_file(input.path(), "a.png", &fixtures::png(&image));
    fixtures::write_file(
        input.path(),
        "b.jpg",
        &fixtures::encode(&image, ImageFormat::Jpeg),
    );
    fixtures::write_file(input.path(), "notes.txt", b"skip me");

    let service = StylizeService::new(&fixtures::fast_config());
    let report = run_batch(
        &service,
        input.path(),
        output.path(),
        2,
        RenderOverrides::new(),
    )
    .await
    .unwrap();

    assert_eq!(report.items.len(), 2);
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 0);
    assert_eq!(report.jobs, 2);

    for name in ["a.png", "b.png"] {
        let bytes = std::fs::read(output.path().join(name)).unwrap();
        assert_png_dimensions(&bytes, 24, 16);
    }
}

#[tokio::test]
async fn test_batch_records_failures_and_continues() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    fixtures::write_file(input.path(), "broken.png", b"\x89PNG\r\n\x1a\ntruncated");
    fixtures::write_file(
        input.path(),
        "good.png",
        &fixtures::png(&fixtures::rectangle(16, 16)),
    );

    let service = StylizeService::new(&fixtures::fast_config());
    let report = run_batch(
        &service,
        input.path(),
        output.path(),
        1,
        RenderOverrides::new(),
    )
    .await
    .unwrap();

    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed, 1);

    // Items come back in sorted input order
    let broken = &report.items[0];
    assert!(broken.input.ends_with("broken.png"));
    assert!(broken.output.is_none());
    assert!(broken.error.is_some());
    assert!(report.items[1].is_ok());
    assert!(!output.path().join("broken.png").exists());
}

#[tokio::test]
async fn test_batch_stem_collision_keeps_full_names() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let image = fixtures::rectangle(12, 12);

    fixtures::write_file(input.path(), "photo.png", &fixtures::png(&image));
    fixtures::write_file(
        input.path(),
        "photo.webp",
        &fixtures::encode(&image, ImageFormat::WebP),
    );

    let service = StylizeService::new(&fixtures::fast_config());
    let report = run_batch(
        &service,
        input.path(),
        output.path(),
        4,
        RenderOverrides::new(),
    )
    .await
    .unwrap();

    assert_eq!(report.succeeded, 2);
    assert!(output.path().join("photo.png.png").exists());
    assert!(output.path().join("photo.webp.png").exists());
}

#[tokio::test]
async fn test_batch_creates_output_dir_and_applies_overrides() {
    let input = TempDir::new().unwrap();
    let scratch = TempDir::new().unwrap();
    let output = scratch.path().join("nested").join("out");

    fixtures::write_file(
        input.path(),
        "flag.png",
        &fixtures::png(&fixtures::red_green_flag(40, 20)),
    );

    let service = StylizeService::new(&fixtures::fast_config());
    let overrides = RenderOverrides::new().with_border(true);
    let report = run_batch(&service, input.path(), &output, 1, overrides)
        .await
        .unwrap();

    assert_eq!(report.succeeded, 1);
    assert_eq!(report.items[0].separators.len(), 1);
    let bytes = std::fs::read(output.join("flag.png")).unwrap();
    assert_black_frame(&assert_png(&bytes), 2);
}

#[tokio::test]
async fn test_batch_report_serializes() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fixtures::write_file(
        input.path(),
        "one.png",
        &fixtures::png(&fixtures::rectangle(10, 10)),
    );

    let service = StylizeService::new(&fixtures::fast_config());
    let report = run_batch(&service, input.path(), output.path(), 3, RenderOverrides::new())
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["succeeded"], 1);
    assert_eq!(json["jobs"], 3);
    assert_eq!(json["items"][0]["width"], 10);
}

#[tokio::test]
async fn test_batch_missing_input_dir_is_error() {
    let scratch = TempDir::new().unwrap();
    let service = StylizeService::new(&fixtures::fast_config());

    let result = run_batch(
        &service,
        &scratch.path().join("missing"),
        &scratch.path().join("out"),
        1,
        RenderOverrides::new(),
    )
    .await;
    assert!(result.is_err());
}
