//! End-to-end rendering through the service: bytes in, PNG out.

mod common;

use common::fixtures::{self, colors};
use common::*;
use edge_ink::LineStyle;
use edgewizard::error::RenderError;
use edgewizard::models::{AppConfig, RenderOverrides};
use edgewizard::rendering::{from_data_url, InputFormat};
use edgewizard::services::StylizeService;
use image::ImageFormat;
use pretty_assertions::assert_eq;

fn service() -> StylizeService {
    StylizeService::new(&fixtures::fast_config())
}

#[test]
fn test_png_keeps_dimensions() {
    let bytes = fixtures::png(&fixtures::rectangle(48, 30));
    let out = service().render_png(&bytes, RenderOverrides::new()).unwrap();

    assert_eq!(out.input_format, InputFormat::Png);
    assert_eq!((out.width, out.height), (48, 30));
    assert_eq!(out.line_style, LineStyle::Thin);
    assert!(!out.border);
    assert_png_dimensions(&out.png, 48, 30);
}

#[test]
fn test_rectangle_outline_is_inked() {
    let bytes = fixtures::png(&fixtures::rectangle(64, 64));
    let out = service().render_png(&bytes, RenderOverrides::new()).unwrap();
    let gray = assert_png(&out.png);

    // Corner of the paper is far from any edge
    assert_eq!(gray.get_pixel(2, 2).0[0], 255);
    // The rectangle's left edge is at x = 16
    let edge = (14..=17).map(|x| gray.get_pixel(x, 32).0[0]).min().unwrap();
    assert!(edge < 128, "rectangle edge should be dark, got {edge}");
}

#[test]
fn test_jpeg_and_webp_inputs() {
    let image = fixtures::rectangle(40, 40);
    for (format, expected) in [
        (ImageFormat::Jpeg, InputFormat::Jpeg),
        (ImageFormat::WebP, InputFormat::WebP),
    ] {
        let bytes = fixtures::encode(&image, format);
        let out = service().render_png(&bytes, RenderOverrides::new()).unwrap();
        assert_eq!(out.input_format, expected);
        assert_png_dimensions(&out.png, 40, 40);
    }
}

#[test]
fn test_flat_image_is_blank_paper() {
    let bytes = fixtures::png(&fixtures::flat(32, 32, colors::PAPER));
    let out = service().render_png(&bytes, RenderOverrides::new()).unwrap();

    assert!(out.separators.is_empty());
    assert_blank(&assert_png(&out.png));
}

#[test]
fn test_red_green_flag_gets_separator() {
    let bytes = fixtures::png(&fixtures::red_green_flag(64, 32));
    let out = service().render_png(&bytes, RenderOverrides::new()).unwrap();

    assert_eq!(out.separators.len(), 1, "separators: {:?}", out.separators);
    let x = out.separators[0] as u32;
    assert!((28..=35).contains(&x), "separator at {x}");
    assert_inked_column(&assert_png(&out.png), x);
}

#[test]
fn test_border_override() {
    let bytes = fixtures::png(&fixtures::rectangle(32, 24));
    let overrides = RenderOverrides::new().with_border(true);
    let out = service().render_png(&bytes, overrides).unwrap();

    assert!(out.border);
    assert_black_frame(&assert_png(&out.png), 2);
}

#[test]
fn test_bold_override_and_unknown_style_name() {
    let bytes = fixtures::png(&fixtures::rectangle(32, 32));

    let bold = RenderOverrides::new().with_style_name(Some("bold"));
    let out = service().render_png(&bytes, bold).unwrap();
    assert_eq!(out.line_style, LineStyle::Bold);

    let unknown = RenderOverrides::new().with_style_name(Some("sketchy"));
    let out = service().render_png(&bytes, unknown).unwrap();
    assert_eq!(out.line_style, LineStyle::Thin);
}

#[test]
fn test_config_frame_width_applies() {
    let config = AppConfig::from_yaml_str(fixtures::SAMPLE_CONFIG).unwrap();
    let service = StylizeService::new(&config);
    let bytes = fixtures::png(&fixtures::rectangle(40, 40));

    let out = service.render_png(&bytes, RenderOverrides::new()).unwrap();
    assert_eq!(out.line_style, LineStyle::Bold);
    assert!(out.border);
    assert_black_frame(&assert_png(&out.png), 3);

    let out = service
        .render_png(&bytes, RenderOverrides::new().with_border(false))
        .unwrap();
    assert!(!out.border);
}

#[test]
fn test_data_url_round_trip() {
    let bytes = fixtures::png(&fixtures::rectangle(20, 20));
    let out = service().render_png(&bytes, RenderOverrides::new()).unwrap();

    let url = out.data_url();
    assert!(url.starts_with("data:image/png;base64,"));
    assert_eq!(from_data_url(&url).unwrap(), out.png);
}

#[test]
fn test_rejects_unrecognized_bytes() {
    let err = service()
        .render_png(b"definitely not an image", RenderOverrides::new())
        .unwrap_err();
    assert!(matches!(err, RenderError::UnsupportedFormat(_)), "{err}");
}

#[test]
fn test_input_limits() {
    let bytes = fixtures::png(&fixtures::rectangle(50, 50));

    let mut config = fixtures::fast_config();
    config.limits.max_input_bytes = 16;
    let err = StylizeService::new(&config)
        .render_png(&bytes, RenderOverrides::new())
        .unwrap_err();
    assert!(matches!(err, RenderError::InputTooLarge { max: 16, .. }), "{err}");

    let mut config = fixtures::fast_config();
    config.limits.max_pixels = 2_000;
    let err = StylizeService::new(&config)
        .render_png(&bytes, RenderOverrides::new())
        .unwrap_err();
    assert!(
        matches!(
            err,
            RenderError::TooManyPixels {
                width: 50,
                height: 50,
                ..
            }
        ),
        "{err}"
    );
}

#[test]
fn test_optimized_png_has_same_pixels() {
    let bytes = fixtures::png(&fixtures::rectangle(36, 36));
    let plain = service().render_png(&bytes, RenderOverrides::new()).unwrap();
    let optimized = StylizeService::new(&AppConfig::default())
        .render_png(&bytes, RenderOverrides::new())
        .unwrap();

    assert_eq!(assert_png(&plain.png), assert_png(&optimized.png));
}

#[tokio::test]
async fn test_async_render_matches_sync() {
    let bytes = fixtures::png(&fixtures::red_green_flag(40, 20));
    let service = service();

    let sync = service.render_png(&bytes, RenderOverrides::new()).unwrap();
    let async_out = service
        .render_png_async(bytes, RenderOverrides::new())
        .await
        .unwrap();

    assert_eq!(sync.png, async_out.png);
    assert_eq!(sync.separators, async_out.separators);
}
