//! Codec trait and shared types.
//!
//! The [`ImageCodec`] trait is the seam between the session and the pixel
//! work: decode bytes into a bitmap, encode a bitmap into target-format
//! bytes. Both operations are single-shot with no partial results — they
//! either produce a complete buffer or a well-defined error.
//!
//! The production implementation is
//! [`RustCodec`](super::rust_codec::RustCodec) — pure Rust via the `image`
//! crate, statically linked. Tests use the in-file [`MockCodec`].

use super::params::EncodeParams;
use crate::format::TargetFormat;
use image::RgbaImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    /// The bytes are not a decodable image.
    #[error("decode failed: {0}")]
    Decode(String),
    /// No encoder is available for the requested format.
    #[error("no encoder for {0}")]
    Unsupported(TargetFormat),
    /// The encoder failed partway through.
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Pixel dimensions of a decoded bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn of(bitmap: &RgbaImage) -> Self {
        Self {
            width: bitmap.width(),
            height: bitmap.height(),
        }
    }
}

/// Trait for decode/encode implementations.
///
/// Every codec must implement both operations so the session stays
/// codec-agnostic. Decoded bitmaps are always RGBA8; the codec owns any
/// color-model conversion needed on the way in or out.
pub trait ImageCodec {
    /// Decode raw file bytes into an RGBA bitmap.
    fn decode(&self, bytes: &[u8]) -> Result<RgbaImage, CodecError>;

    /// Encode a bitmap as the target format at the given quality.
    ///
    /// Quality is ignored by formats that don't use it.
    fn encode(&self, bitmap: &RgbaImage, params: &EncodeParams) -> Result<Vec<u8>, CodecError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::codec::params::Quality;
    use std::sync::Mutex;

    /// Scripted failure for the next mock operation.
    #[derive(Debug, Clone, PartialEq)]
    pub enum ScriptedFailure {
        Decode(String),
        Unsupported,
        Encode(String),
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Decode { byte_len: usize },
        Encode { format: TargetFormat, quality: u8, width: u32, height: u32 },
    }

    /// Mock codec that fabricates bitmaps and deterministic encode output.
    ///
    /// Decode returns a blank bitmap of the configured dimensions; encode
    /// returns a readable descriptor string as bytes so tests can assert on
    /// exactly what was produced. Uses Mutex so the mock stays Sync.
    pub struct MockCodec {
        pub decode_dims: Mutex<Vec<(u32, u32)>>,
        pub fail_next: Mutex<Option<ScriptedFailure>>,
        pub operations: Mutex<Vec<RecordedOp>>,
    }

    impl MockCodec {
        /// Mock that decodes every input as a `width`×`height` bitmap.
        pub fn with_dims(width: u32, height: u32) -> Self {
            Self {
                decode_dims: Mutex::new(vec![(width, height)]),
                fail_next: Mutex::new(None),
                operations: Mutex::new(Vec::new()),
            }
        }

        pub fn script_failure(&self, failure: ScriptedFailure) {
            *self.fail_next.lock().unwrap() = Some(failure);
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }

        /// The byte output encode produces for the given inputs.
        pub fn expected_output(
            format: TargetFormat,
            quality: Quality,
            width: u32,
            height: u32,
        ) -> Vec<u8> {
            format!("{}:{}x{}:q{}", format.mime(), width, height, quality.percent()).into_bytes()
        }
    }

    impl ImageCodec for MockCodec {
        fn decode(&self, bytes: &[u8]) -> Result<RgbaImage, CodecError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Decode { byte_len: bytes.len() });

            if let Some(ScriptedFailure::Decode(msg)) = self.fail_next.lock().unwrap().take() {
                return Err(CodecError::Decode(msg));
            }

            // Reuse the last configured dimensions once the queue drains
            let mut dims = self.decode_dims.lock().unwrap();
            let (w, h) = if dims.len() > 1 {
                dims.pop().unwrap()
            } else {
                *dims.first().ok_or_else(|| {
                    CodecError::Decode("no mock dimensions configured".to_string())
                })?
            };
            Ok(RgbaImage::new(w, h))
        }

        fn encode(&self, bitmap: &RgbaImage, params: &EncodeParams) -> Result<Vec<u8>, CodecError> {
            self.operations.lock().unwrap().push(RecordedOp::Encode {
                format: params.format,
                quality: params.quality.percent(),
                width: bitmap.width(),
                height: bitmap.height(),
            });

            match self.fail_next.lock().unwrap().take() {
                Some(ScriptedFailure::Unsupported) => {
                    Err(CodecError::Unsupported(params.format))
                }
                Some(ScriptedFailure::Encode(msg)) => Err(CodecError::Encode(msg)),
                _ => Ok(Self::expected_output(
                    params.format,
                    params.quality,
                    bitmap.width(),
                    bitmap.height(),
                )),
            }
        }
    }

    #[test]
    fn mock_records_decode_and_encode() {
        let codec = MockCodec::with_dims(100, 50);
        let bitmap = codec.decode(&[0u8; 16]).unwrap();
        assert_eq!(Dimensions::of(&bitmap), Dimensions { width: 100, height: 50 });

        let params = EncodeParams::new(TargetFormat::Png, Quality::default());
        let bytes = codec.encode(&bitmap, &params).unwrap();
        assert_eq!(bytes, b"image/png:100x50:q90".to_vec());

        let ops = codec.get_operations();
        assert_eq!(ops.len(), 2);
        assert!(matches!(ops[0], RecordedOp::Decode { byte_len: 16 }));
        assert!(matches!(
            ops[1],
            RecordedOp::Encode { format: TargetFormat::Png, quality: 90, width: 100, height: 50 }
        ));
    }

    #[test]
    fn mock_scripted_failures_fire_once() {
        let codec = MockCodec::with_dims(10, 10);
        codec.script_failure(ScriptedFailure::Unsupported);

        let bitmap = RgbaImage::new(10, 10);
        let params = EncodeParams::new(TargetFormat::WebP, Quality::default());
        assert!(matches!(
            codec.encode(&bitmap, &params),
            Err(CodecError::Unsupported(TargetFormat::WebP))
        ));
        // Next call succeeds again
        assert!(codec.encode(&bitmap, &params).is_ok());
    }
}
