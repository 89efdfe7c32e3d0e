//! Pure Rust codec — decode and encode via the `image` crate.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, WebP, GIF, BMP, TIFF) | `image::load_from_memory` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` (quality applied) |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |
//! | Encode → WebP | `image::codecs::webp::WebPEncoder` (lossless — see below) |
//! | Encode → GIF | `image::codecs::gif::GifEncoder` |
//! | Encode → BMP | `image::codecs::bmp::BmpEncoder` |
//! | Alpha flattening | white canvas + `image::imageops::overlay` |
//!
//! The `image` crate's pure-Rust WebP encoder is lossless only, so the
//! quality setting is accepted for WebP but has no effect on the output.

use super::backend::{CodecError, ImageCodec};
use super::params::EncodeParams;
use crate::format::TargetFormat;
use image::codecs::bmp::BmpEncoder;
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageError, Rgba, RgbaImage};

/// Production codec backed by the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustCodec;

impl RustCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Composite the bitmap over an opaque white canvas of the same size.
///
/// Required before encoding to formats without alpha support, so that
/// transparent source pixels come out white instead of undefined/black.
fn flatten_onto_white(bitmap: &RgbaImage) -> image::RgbImage {
    let mut canvas =
        RgbaImage::from_pixel(bitmap.width(), bitmap.height(), Rgba([255, 255, 255, 255]));
    image::imageops::overlay(&mut canvas, bitmap, 0, 0);
    DynamicImage::ImageRgba8(canvas).to_rgb8()
}

fn encode_error(format: TargetFormat, err: ImageError) -> CodecError {
    match err {
        ImageError::Unsupported(_) => CodecError::Unsupported(format),
        other => CodecError::Encode(other.to_string()),
    }
}

impl ImageCodec for RustCodec {
    fn decode(&self, bytes: &[u8]) -> Result<RgbaImage, CodecError> {
        image::load_from_memory(bytes)
            .map(|img| img.to_rgba8())
            .map_err(|e| CodecError::Decode(e.to_string()))
    }

    fn encode(&self, bitmap: &RgbaImage, params: &EncodeParams) -> Result<Vec<u8>, CodecError> {
        let (width, height) = (bitmap.width(), bitmap.height());
        let format = params.format;
        let mut out = Vec::new();

        match format {
            TargetFormat::Jpeg => {
                let rgb = flatten_onto_white(bitmap);
                JpegEncoder::new_with_quality(&mut out, params.quality.percent().max(1))
                    .write_image(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
                    .map_err(|e| encode_error(format, e))?;
            }
            TargetFormat::Bmp => {
                let rgb = flatten_onto_white(bitmap);
                BmpEncoder::new(&mut out)
                    .encode(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
                    .map_err(|e| encode_error(format, e))?;
            }
            TargetFormat::Png => {
                PngEncoder::new(&mut out)
                    .write_image(bitmap.as_raw(), width, height, ExtendedColorType::Rgba8)
                    .map_err(|e| encode_error(format, e))?;
            }
            TargetFormat::WebP => {
                WebPEncoder::new_lossless(&mut out)
                    .write_image(bitmap.as_raw(), width, height, ExtendedColorType::Rgba8)
                    .map_err(|e| encode_error(format, e))?;
            }
            TargetFormat::Gif => {
                GifEncoder::new(&mut out)
                    .encode(bitmap.as_raw(), width, height, ExtendedColorType::Rgba8)
                    .map_err(|e| encode_error(format, e))?;
            }
        }

        if out.is_empty() {
            return Err(CodecError::Unsupported(format));
        }
        Ok(out)
    }
}
