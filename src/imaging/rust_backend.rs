//! Pure Rust image backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP, GIF, BMP) | `image::load_from_memory` |
//! | Identify | `image::ImageReader::into_dimensions` |
//! | Alpha flattening | `DynamicImage::into_rgb8` |
//! | Resize | `image::imageops::resize` with `Lanczos3` filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder::new_with_quality` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::CoverParams;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, RgbImage};
use std::io::Cursor;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn decode(data: &[u8]) -> Result<DynamicImage, BackendError> {
    image::load_from_memory(data).map_err(|e| BackendError::Decode(e.to_string()))
}

/// Drop any alpha channel and normalize to 8-bit RGB.
///
/// Alpha is discarded, not composited: a transparent pixel keeps its stored
/// color values. Grayscale and 16-bit inputs are widened/narrowed to RGB8 so
/// the encoder only ever sees one pixel layout.
fn flatten(img: DynamicImage) -> RgbImage {
    img.into_rgb8()
}

fn encode_jpeg(img: &RgbImage, params: &CoverParams) -> Result<Vec<u8>, BackendError> {
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, params.quality.as_u8())
        .encode_image(img)
        .map_err(|e| BackendError::Encode(e.to_string()))?;
    if buf.is_empty() {
        return Err(BackendError::Encode("encoder produced no data".to_string()));
    }
    Ok(buf)
}

impl ImageBackend for RustBackend {
    fn identify(&self, data: &[u8]) -> Result<Dimensions, BackendError> {
        let (width, height) = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| BackendError::Decode(e.to_string()))?
            .into_dimensions()
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        Ok(Dimensions { width, height })
    }

    fn resize_cover(&self, data: &[u8], params: &CoverParams) -> Result<Vec<u8>, BackendError> {
        let rgb = flatten(decode(data)?);
        let resized = image::imageops::resize(&rgb, params.size, params.size, FilterType::Lanczos3);
        encode_jpeg(&resized, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::params::Quality;
    use image::{ImageFormat, Rgba, RgbaImage};

    fn encode_png(img: DynamicImage) -> Vec<u8> {
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    fn rgb_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        encode_png(DynamicImage::ImageRgb8(img))
    }

    fn decoded(jpeg: &[u8]) -> DynamicImage {
        assert_eq!(
            image::guess_format(jpeg).unwrap(),
            ImageFormat::Jpeg,
            "output must be JPEG"
        );
        image::load_from_memory(jpeg).unwrap()
    }

    #[test]
    fn identify_synthetic_png() {
        let backend = RustBackend::new();
        let dims = backend.identify(&rgb_png(200, 150)).unwrap();
        assert_eq!(
            dims,
            Dimensions {
                width: 200,
                height: 150
            }
        );
    }

    #[test]
    fn identify_garbage_errors() {
        let backend = RustBackend::new();
        assert!(backend.identify(b"not an image").is_err());
    }

    #[test]
    fn resize_landscape_stretches_to_square() {
        let backend = RustBackend::new();
        let out = backend
            .resize_cover(&rgb_png(1200, 300), &CoverParams::default())
            .unwrap();

        let img = decoded(&out);
        assert_eq!((img.width(), img.height()), (500, 500));
    }

    #[test]
    fn resize_tiny_portrait_upscales_to_square() {
        let backend = RustBackend::new();
        let out = backend
            .resize_cover(&rgb_png(3, 40), &CoverParams::default())
            .unwrap();

        let img = decoded(&out);
        assert_eq!((img.width(), img.height()), (500, 500));
    }

    #[test]
    fn resize_drops_alpha_channel() {
        let rgba = RgbaImage::from_pixel(64, 64, Rgba([200, 10, 10, 0]));
        let input = encode_png(DynamicImage::ImageRgba8(rgba));

        let backend = RustBackend::new();
        let out = backend
            .resize_cover(&input, &CoverParams::default())
            .unwrap();

        let img = decoded(&out);
        assert!(!img.color().has_alpha());
        assert_eq!((img.width(), img.height()), (500, 500));
    }

    #[test]
    fn resize_accepts_luma_alpha() {
        let la = image::GrayAlphaImage::from_pixel(20, 10, image::LumaA([90, 128]));
        let input = encode_png(DynamicImage::ImageLumaA8(la));

        let backend = RustBackend::new();
        let out = backend
            .resize_cover(&input, &CoverParams::default())
            .unwrap();

        assert!(!decoded(&out).color().has_alpha());
    }

    #[test]
    fn resize_is_stable_on_already_sized_cover() {
        let backend = RustBackend::new();
        let first = backend
            .resize_cover(&rgb_png(800, 800), &CoverParams::default())
            .unwrap();
        let second = backend
            .resize_cover(&first, &CoverParams::default())
            .unwrap();

        let img = decoded(&second);
        assert_eq!((img.width(), img.height()), (500, 500));
    }

    #[test]
    fn resize_honors_custom_size() {
        let backend = RustBackend::new();
        let params = CoverParams {
            size: 64,
            quality: Quality::new(80),
        };
        let out = backend.resize_cover(&rgb_png(100, 30), &params).unwrap();

        let img = decoded(&out);
        assert_eq!((img.width(), img.height()), (64, 64));
    }

    #[test]
    fn resize_corrupt_bytes_is_decode_error() {
        let backend = RustBackend::new();
        let result = backend.resize_cover(b"\x89PNG\r\n\x1a\ntruncated", &CoverParams::default());
        assert!(matches!(result, Err(BackendError::Decode(_))));
    }

    #[test]
    fn resize_empty_input_is_decode_error() {
        let backend = RustBackend::new();
        let result = backend.resize_cover(&[], &CoverParams::default());
        assert!(matches!(result, Err(BackendError::Decode(_))));
    }
}
