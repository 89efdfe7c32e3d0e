//! Decode/encode seam — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::load_from_memory` (JPEG, PNG, WebP, GIF, BMP, TIFF) |
//! | **Encode** | per-format `image` codecs, quality applied where meaningful |
//! | **Alpha flattening** | white canvas + `image::imageops::overlay` |
//!
//! The module is split into:
//! - **Parameters**: [`Quality`] and [`EncodeParams`] — the conversion request
//! - **Backend**: [`ImageCodec`] trait + error/dimension types
//! - **RustCodec**: the production implementation

pub mod backend;
mod params;
pub mod rust_codec;

pub use backend::{CodecError, Dimensions, ImageCodec};
pub use params::{EncodeParams, Quality};
pub use rust_codec::RustCodec;
// Re-exported for tests (session.rs tests drive the mock)
#[cfg(test)]
pub use backend::tests::MockCodec;
