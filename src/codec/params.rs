//! Parameter types for encode operations.
//!
//! [`EncodeParams`] is the conversion request: it describes *what* to
//! produce, not *how*. It is the interface between the session (which
//! decides when to convert) and the codec (which does the pixel work), so
//! codecs can be swapped for a mock without touching session logic.

use crate::format::TargetFormat;

/// Quality setting for lossy encoding, as an integer percent (0–100).
///
/// Clamped on construction. Only meaningful for JPEG and WebP targets;
/// other formats ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// A single conversion request: target format plus quality.
///
/// Constructed fresh per conversion; never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeParams {
    pub format: TargetFormat,
    pub quality: Quality,
}

impl EncodeParams {
    pub fn new(format: TargetFormat, quality: Quality) -> Self {
        Self { format, quality }
    }
}
