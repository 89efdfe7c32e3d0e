//! Error types for the conversion flow.
//!
//! One variant per failure class, following the rule that every error is
//! terminal for the current step only: the session survives, the user
//! re-selects a file or re-chooses a format and tries again. The `#[error]`
//! strings are the human-readable messages shown in the transient banner,
//! so they are written for end users, not for logs.

use crate::format::TargetFormat;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// The declared MIME type is not on the image allow-list.
    #[error("Please select a valid image file (JPG, PNG, WebP, GIF, BMP, or TIFF).")]
    InvalidType,

    /// The file could not be read at all (filesystem intake).
    #[error("Failed to read file. Please try again.")]
    Read(#[from] std::io::Error),

    /// The bytes were read but are not a decodable image.
    #[error("Failed to load image. The file might be corrupted.")]
    Decode(String),

    /// Convert was invoked before any file was selected.
    #[error("Please select an image first.")]
    NoSource,

    /// The runtime has no encoder for the requested format.
    #[error("Conversion failed. The {0} format might not be supported. Try a different format.")]
    EncodeUnsupported(TargetFormat),

    /// The encoder itself failed partway through.
    #[error("Conversion error: {0}")]
    EncodeFailure(String),

    /// Download was requested with no completed conversion.
    #[error("Please convert the image first.")]
    NoArtifact,
}

/// Convenience result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            ConvertError::NoArtifact.to_string(),
            "Please convert the image first."
        );
        assert_eq!(
            ConvertError::NoSource.to_string(),
            "Please select an image first."
        );
        assert!(
            ConvertError::EncodeUnsupported(TargetFormat::WebP)
                .to_string()
                .contains("WebP")
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ConvertError = io.into();
        assert!(matches!(err, ConvertError::Read(_)));
    }
}
