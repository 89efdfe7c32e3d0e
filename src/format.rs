//! Target formats and MIME-type handling.
//!
//! Centralizes every format table in one place: the output format enum, its
//! MIME and extension mappings, the intake allow-list, and the
//! source-to-default-target heuristic. The rest of the codebase never
//! matches on MIME strings directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum TargetFormat {
    Jpeg,
    Png,
    WebP,
    Gif,
    Bmp,
}

impl TargetFormat {
    /// All targets, in the order the format picker lists them.
    pub fn all() -> &'static [TargetFormat] {
        &[
            TargetFormat::Jpeg,
            TargetFormat::Png,
            TargetFormat::WebP,
            TargetFormat::Gif,
            TargetFormat::Bmp,
        ]
    }

    /// MIME type the artifact is labeled with.
    pub fn mime(self) -> &'static str {
        match self {
            TargetFormat::Jpeg => "image/jpeg",
            TargetFormat::Png => "image/png",
            TargetFormat::WebP => "image/webp",
            TargetFormat::Gif => "image/gif",
            TargetFormat::Bmp => "image/bmp",
        }
    }

    /// File extension for saved output.
    pub fn extension(self) -> &'static str {
        match self {
            TargetFormat::Jpeg => "jpg",
            TargetFormat::Png => "png",
            TargetFormat::WebP => "webp",
            TargetFormat::Gif => "gif",
            TargetFormat::Bmp => "bmp",
        }
    }

    /// Whether the encoded format can carry an alpha channel.
    ///
    /// Alphaless targets get their rasterization surface pre-filled with
    /// opaque white before the source is drawn, so transparent pixels come
    /// out white instead of undefined.
    pub fn supports_alpha(self) -> bool {
        !matches!(self, TargetFormat::Jpeg | TargetFormat::Bmp)
    }

    /// Whether the quality setting has any meaning for this format.
    pub fn uses_quality(self) -> bool {
        matches!(self, TargetFormat::Jpeg | TargetFormat::WebP)
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetFormat::Jpeg => "JPEG",
            TargetFormat::Png => "PNG",
            TargetFormat::WebP => "WebP",
            TargetFormat::Gif => "GIF",
            TargetFormat::Bmp => "BMP",
        };
        f.write_str(name)
    }
}

impl FromStr for TargetFormat {
    type Err = String;

    /// Parse from an extension-like token (`jpg`, `jpeg`, `png`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(TargetFormat::Jpeg),
            "png" => Ok(TargetFormat::Png),
            "webp" => Ok(TargetFormat::WebP),
            "gif" => Ok(TargetFormat::Gif),
            "bmp" => Ok(TargetFormat::Bmp),
            other => Err(format!("unknown format: {other}")),
        }
    }
}

/// MIME types accepted at intake, beyond the generic `image/` prefix.
const ACCEPTED_MIME: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
    "image/bmp",
    "image/tiff",
];

/// Intake allow-list: the fixed MIME set or any `image/`-prefixed type.
pub fn is_accepted_source(mime: &str) -> bool {
    mime.starts_with("image/") || ACCEPTED_MIME.contains(&mime)
}

/// Default target for a freshly selected source.
///
/// Usability heuristic, not a correctness rule: JPEG sources default to
/// PNG, PNG sources to JPEG, everything else to JPEG.
pub fn default_target_for(source_mime: &str) -> TargetFormat {
    match source_mime {
        "image/jpeg" | "image/jpg" => TargetFormat::Png,
        _ => TargetFormat::Jpeg,
    }
}

/// Guess a declared MIME type from a filename extension (CLI intake).
///
/// Unknown extensions map to `application/octet-stream`, which the intake
/// allow-list then rejects.
pub fn mime_from_extension(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}
