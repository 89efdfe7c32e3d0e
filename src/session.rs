//! Conversion session — all mutable conversion state in one object.
//!
//! A [`ConversionSession`] owns the full lifecycle of a single-image
//! conversion: intake, decode, format/quality selection, convert, download
//! naming, reset. There is no ambient state; create a session per
//! independent flow and drop it when done.
//!
//! # State invariant
//!
//! A converted artifact is valid only while it was produced from the
//! *current* source file and the *currently* selected target format.
//! Selecting a new file or changing the format clears the artifact slot
//! immediately, so a stale download can never be observed. Replacing the
//! slot drops the previous buffer — that is the whole resource-release
//! story.
//!
//! # Errors
//!
//! Every failing operation returns its [`ConvertError`] *and* records the
//! human-readable message in a transient banner that expires after five
//! seconds (or when the next error replaces it). Errors are terminal for
//! the current step only; the session always remains usable.

use crate::codec::{CodecError, Dimensions, EncodeParams, ImageCodec, Quality};
use crate::error::{ConvertError, Result};
use crate::format::{self, TargetFormat};
use crate::naming;
use image::RgbaImage;
use std::path::Path;
use std::time::{Duration, Instant};

/// How long an error banner stays visible.
const BANNER_TTL: Duration = Duration::from_secs(5);

/// The user-supplied original image and its metadata.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

/// Encoded output of a conversion.
#[derive(Debug, Clone)]
pub struct ConvertedArtifact {
    pub bytes: Vec<u8>,
    pub mime: &'static str,
    /// Pixel dimensions of the bitmap the artifact was derived from.
    pub dimensions: Dimensions,
}

impl ConvertedArtifact {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Borrowed view of a completed conversion, ready to save.
#[derive(Debug)]
pub struct Download<'a> {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: &'a [u8],
}

/// Derived snapshot of what a frontend should show. Not authoritative —
/// recompute after every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub busy: bool,
    pub error: Option<String>,
    pub has_source: bool,
    pub can_download: bool,
    pub quality_visible: bool,
    pub convert_label: &'static str,
}

struct Banner {
    message: String,
    raised: Instant,
}

/// Orchestrates the five-step flow: intake, decode, selection, convert,
/// download/reset. Generic over the codec so tests can swap in a mock.
pub struct ConversionSession<C: ImageCodec> {
    codec: C,
    source: Option<SourceFile>,
    decoded: Option<RgbaImage>,
    target: TargetFormat,
    quality: Quality,
    artifact: Option<ConvertedArtifact>,
    has_converted: bool,
    busy: bool,
    banner: Option<Banner>,
}

impl<C: ImageCodec> ConversionSession<C> {
    pub fn new(codec: C) -> Self {
        Self {
            codec,
            source: None,
            decoded: None,
            target: TargetFormat::Jpeg,
            quality: Quality::default(),
            artifact: None,
            has_converted: false,
            busy: false,
            banner: None,
        }
    }

    // ------------------------------------------------------------------
    // Intake
    // ------------------------------------------------------------------

    /// Select a new source file from raw bytes plus declared metadata.
    ///
    /// Validates the MIME type against the image allow-list, decodes the
    /// bytes, and on success replaces the previous selection wholesale:
    /// new default target format, cleared artifact, reset affordances.
    /// On failure the previous selection is left untouched.
    pub fn select_file(
        &mut self,
        bytes: Vec<u8>,
        mime: &str,
        name: &str,
        size: u64,
    ) -> Result<&SourceFile> {
        if !format::is_accepted_source(mime) {
            return Err(self.fail(ConvertError::InvalidType));
        }

        let decoded = match self.codec.decode(&bytes) {
            Ok(bitmap) => bitmap,
            Err(e) => return Err(self.fail(ConvertError::Decode(e.to_string()))),
        };

        self.decoded = Some(decoded);
        self.target = format::default_target_for(mime);
        self.artifact = None;
        self.has_converted = false;
        Ok(&*self.source.insert(SourceFile {
            name: name.to_string(),
            mime: mime.to_string(),
            size,
            bytes,
        }))
    }

    /// Select a source file from disk (CLI intake path).
    ///
    /// The declared MIME type is guessed from the extension; a failed read
    /// surfaces as [`ConvertError::Read`]. Picker and drop payloads go
    /// through [`select_file`](Self::select_file) identically.
    pub fn select_path(&mut self, path: &Path) -> Result<&SourceFile> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => return Err(self.fail(ConvertError::Read(e))),
        };
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        let mime = format::mime_from_extension(&name);
        let size = bytes.len() as u64;
        self.select_file(bytes, mime, &name, size)
    }

    // ------------------------------------------------------------------
    // Format & quality selection
    // ------------------------------------------------------------------

    pub fn target_format(&self) -> TargetFormat {
        self.target
    }

    /// Change the target format. An actual change invalidates the current
    /// artifact and reverts the convert affordance; re-selecting the same
    /// format is a no-op.
    pub fn set_target_format(&mut self, target: TargetFormat) {
        if target != self.target {
            self.target = target;
            self.artifact = None;
            self.has_converted = false;
        }
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Set encode quality as an integer percent; values above 100 clamp.
    /// Quality changes do not invalidate an existing artifact.
    pub fn set_quality(&mut self, percent: u8) {
        self.quality = Quality::new(percent);
    }

    /// Whether the quality control should be exposed for the current target.
    pub fn quality_applies(&self) -> bool {
        self.target.uses_quality()
    }

    // ------------------------------------------------------------------
    // Convert
    // ------------------------------------------------------------------

    /// Re-encode the decoded image as the current target format.
    ///
    /// Replaces any existing artifact atomically on success. The busy flag
    /// is restored on both success and failure paths.
    pub fn convert(&mut self) -> Result<&ConvertedArtifact> {
        self.busy = true;
        let outcome = self.encode_current();
        self.busy = false;

        match outcome {
            Ok(artifact) => {
                self.has_converted = true;
                Ok(&*self.artifact.insert(artifact))
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    fn encode_current(&self) -> Result<ConvertedArtifact> {
        let bitmap = self.decoded.as_ref().ok_or(ConvertError::NoSource)?;
        let params = EncodeParams::new(self.target, self.quality);
        let bytes = self.codec.encode(bitmap, &params).map_err(|e| match e {
            CodecError::Unsupported(fmt) => ConvertError::EncodeUnsupported(fmt),
            other => ConvertError::EncodeFailure(other.to_string()),
        })?;
        Ok(ConvertedArtifact {
            bytes,
            mime: self.target.mime(),
            dimensions: Dimensions::of(bitmap),
        })
    }

    // ------------------------------------------------------------------
    // Download & reset
    // ------------------------------------------------------------------

    /// The completed conversion with its derived filename.
    ///
    /// Unreachable without a valid artifact: fails with
    /// [`ConvertError::NoArtifact`] if nothing has been converted.
    pub fn download(&mut self) -> Result<Download<'_>> {
        if self.artifact.is_none() || self.source.is_none() {
            return Err(self.fail(ConvertError::NoArtifact));
        }
        // Both checked just above
        let (artifact, source) = match (&self.artifact, &self.source) {
            (Some(a), Some(s)) => (a, s),
            _ => return Err(ConvertError::NoArtifact),
        };
        Ok(Download {
            filename: naming::download_filename(&source.name, artifact.mime),
            mime: artifact.mime,
            bytes: &artifact.bytes,
        })
    }

    /// Clear everything back to initial defaults. Idempotent.
    pub fn reset(&mut self) {
        self.source = None;
        self.decoded = None;
        self.artifact = None;
        self.target = TargetFormat::Jpeg;
        self.quality = Quality::default();
        self.has_converted = false;
        self.busy = false;
        self.banner = None;
    }

    // ------------------------------------------------------------------
    // Derived state
    // ------------------------------------------------------------------

    pub fn source(&self) -> Option<&SourceFile> {
        self.source.as_ref()
    }

    pub fn artifact(&self) -> Option<&ConvertedArtifact> {
        self.artifact.as_ref()
    }

    /// Pixel dimensions of the decoded image, if a file is selected.
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.decoded.as_ref().map(Dimensions::of)
    }

    /// Current error banner text, if one was raised within the last five
    /// seconds.
    pub fn error_banner(&self) -> Option<&str> {
        self.banner_at(Instant::now())
    }

    fn banner_at(&self, now: Instant) -> Option<&str> {
        self.banner
            .as_ref()
            .filter(|b| now.duration_since(b.raised) < BANNER_TTL)
            .map(|b| b.message.as_str())
    }

    /// Snapshot of what a frontend should display right now.
    pub fn ui_state(&self) -> UiState {
        UiState {
            busy: self.busy,
            error: self.error_banner().map(str::to_string),
            has_source: self.source.is_some(),
            can_download: self.artifact.is_some(),
            quality_visible: self.quality_applies(),
            convert_label: if self.has_converted { "Convert Again" } else { "Convert" },
        }
    }

    /// Record the banner for an error and hand it back for propagation.
    fn fail(&mut self, err: ConvertError) -> ConvertError {
        self.banner = Some(Banner {
            message: err.to_string(),
            raised: Instant::now(),
        });
        err
    }
}
