//! # imgshift
//!
//! A single-image format converter: select an image, decode it, re-encode
//! it into a chosen target format (JPEG, PNG, WebP, GIF, BMP) at an
//! optional quality, and save the result under a derived filename. One
//! image at a time — no batch mode, no server, no job queue.
//!
//! # Architecture: One Session, One Slot
//!
//! All mutable state lives in a [`session::ConversionSession`] with an
//! explicit lifecycle: created per flow, cleared by `reset()`. The five
//! steps run as plain `Result`-returning operations composed sequentially:
//!
//! ```text
//! select_file → (decode) → set_target_format / set_quality → convert → download
//! ```
//!
//! Exactly one converted artifact may exist at a time. Selecting a new
//! file or changing the target format clears the slot immediately, so the
//! artifact on offer always corresponds to the current inputs — a stale
//! download is unrepresentable.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | The conversion controller: intake, selection, convert, download, reset, derived UI state |
//! | [`codec`] | Decode/encode seam: [`codec::ImageCodec`] trait + pure-Rust [`codec::RustCodec`] |
//! | [`format`] | Target format enum, MIME tables, intake allow-list, default-target heuristic |
//! | [`naming`] | Output filename derivation from source name + artifact MIME |
//! | [`prefs`] | Persisted theme preference (`~/.imgshift.toml`) |
//! | [`output`] | CLI display formatting — pure `format_*` functions |
//! | [`error`] | [`error::ConvertError`] — one variant per failure class |
//!
//! # Design Decisions
//!
//! ## Pure-Rust Imaging
//!
//! Decode and encode go through the `image` crate exclusively — no
//! ImageMagick, no system libraries. The binary is fully self-contained.
//! One consequence: the pure-Rust WebP encoder is lossless-only, so the
//! quality setting is accepted for WebP but does not change its output.
//!
//! ## White Flattening
//!
//! JPEG and BMP cannot carry an alpha channel. Before encoding to either,
//! the bitmap is composited over an opaque white canvas of the same size.
//! Without this, transparent source pixels would come out undefined or
//! black. This is a correctness requirement, not a cosmetic choice.
//!
//! ## Errors Stay in the Session
//!
//! Every failure is terminal for its step only. The session records each
//! error's user-facing message in a transient banner (auto-expiring after
//! five seconds) and remains fully usable — re-select a file or re-choose
//! a format and try again. Nothing panics, nothing is logged elsewhere.

pub mod codec;
pub mod error;
pub mod format;
pub mod naming;
pub mod output;
pub mod prefs;
pub mod session;

pub use codec::{ImageCodec, Quality, RustCodec};
pub use error::ConvertError;
pub use format::TargetFormat;
pub use session::ConversionSession;

#[cfg(test)]
pub(crate) mod test_helpers;
