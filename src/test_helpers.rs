//! Shared test utilities for the imgshift test suite.
//!
//! Synthetic bitmap and file builders used by codec and session tests.
//! Builders are deterministic so encode-output assertions are stable.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};

/// Bitmap with a color gradient — enough detail that lossy quality
/// settings visibly change the encoded size.
pub fn gradient_bitmap(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) % 256) as u8,
            255,
        ])
    })
}

/// Bitmap whose left half is fully transparent and right half opaque red.
///
/// Pixel (0, 0) is transparent; pixel (width-1, 0) is opaque. Used to
/// verify white-flattening for alphaless targets.
pub fn transparent_bitmap(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([200, 30, 30, 255])
        }
    })
}

/// Encode a bitmap as PNG bytes, for feeding into intake paths.
pub fn png_bytes(bitmap: &RgbaImage) -> Vec<u8> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            bitmap.as_raw(),
            bitmap.width(),
            bitmap.height(),
            ExtendedColorType::Rgba8,
        )
        .unwrap();
    out
}
