use crate::error::RenderError;
use base64::Engine;
use edge_ink::StylizedImage;
use std::io::Cursor;

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Encode the stylized image as an 8-bit grayscale PNG.
///
/// With `optimize` the PNG is written with fast settings and then
/// re-compressed by oxipng; if oxipng fails the unoptimized bytes are kept.
pub fn encode_gray_png(image: &StylizedImage, optimize: bool) -> Result<Vec<u8>, RenderError> {
    let width = u32::try_from(image.width())
        .map_err(|_| RenderError::PngEncode(format!("width {} too large", image.width())))?;
    let height = u32::try_from(image.height())
        .map_err(|_| RenderError::PngEncode(format!("height {} too large", image.height())))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);
        if optimize {
            encoder.set_compression(png::Compression::Fast);
            encoder.set_filter(png::FilterType::NoFilter);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(image.pixels())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();

    if !optimize {
        return Ok(png_bytes);
    }

    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => Ok(optimized),
        Err(e) => {
            tracing::warn!(%e, "oxipng failed, keeping unoptimized PNG");
            Ok(png_bytes)
        }
    }
}

/// Wrap PNG bytes in a `data:image/png;base64,` URL.
pub fn to_data_url(png_bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(png_bytes);
    format!("{DATA_URL_PREFIX}{encoded}")
}

/// Extract the PNG bytes from a data URL produced by [`to_data_url`].
pub fn from_data_url(url: &str) -> Option<Vec<u8>> {
    let payload = url.strip_prefix(DATA_URL_PREFIX)?;
    base64::engine::general_purpose::STANDARD.decode(payload).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StylizedImage {
        let pixels = (0..48u32).map(|i| (i * 5) as u8).collect();
        StylizedImage::new(pixels, 8, 6, vec![])
    }

    fn decode_gray(bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(Cursor::new(bytes));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn test_encode_preserves_pixels() {
        let image = sample();
        for optimize in [false, true] {
            let bytes = encode_gray_png(&image, optimize).unwrap();
            assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
            // oxipng may switch to a palette, so compare decoded luma
            let decoded = image::load_from_memory(&bytes).unwrap().to_luma8();
            assert_eq!(decoded.dimensions(), (8, 6));
            assert_eq!(decoded.into_raw(), image.pixels(), "optimize = {optimize}");
        }
    }

    #[test]
    fn test_unoptimized_is_grayscale_8bit() {
        let bytes = encode_gray_png(&sample(), false).unwrap();
        let (info, _) = decode_gray(&bytes);
        assert_eq!(info.color_type, png::ColorType::Grayscale);
        assert_eq!(info.bit_depth, png::BitDepth::Eight);
    }

    #[test]
    fn test_data_url_round_trip() {
        let url = to_data_url(b"\x89PNG");
        assert_eq!(url, "data:image/png;base64,iVBORw==");
        assert_eq!(from_data_url(&url).unwrap(), b"\x89PNG");
        assert_eq!(from_data_url("data:text/plain;base64,AAAA"), None);
    }
}
