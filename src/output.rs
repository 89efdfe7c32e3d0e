//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Convert
//!
//! ```text
//! photo.png (2 KB) → photo.jpg (1.4 KB)
//!     Format: JPEG (image/jpeg), quality 90
//!     Dimensions: 100 × 50
//! ```
//!
//! ## Info
//!
//! ```text
//! photo.png (2 KB)
//!     Type: image/png
//!     Dimensions: 100 × 50
//! ```
//!
//! ## Formats
//!
//! ```text
//! JPEG   image/jpeg  .jpg   quality, no alpha
//! PNG    image/png   .png   alpha
//! ...
//! ```
//!
//! # Architecture
//!
//! Each display has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::codec::Dimensions;
use crate::format::TargetFormat;
use crate::session::{ConvertedArtifact, SourceFile};

/// Human-readable byte count: `0 Bytes`, `2 KB`, `1.5 MB`.
///
/// Base-1024 with two-decimal rounding, trailing zeros dropped.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exp = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exp = exp.min(UNITS.len() - 1);
    let value = (bytes as f64 / 1024f64.powi(exp as i32) * 100.0).round() / 100.0;
    format!("{} {}", value, UNITS[exp])
}

/// Pixel dimensions as displayed: `100 × 50`.
pub fn format_dimensions(dims: Dimensions) -> String {
    format!("{} × {}", dims.width, dims.height)
}

/// Summary of a completed conversion.
pub fn format_convert_summary(
    source: &SourceFile,
    artifact: &ConvertedArtifact,
    format: TargetFormat,
    quality_percent: u8,
    saved_as: &str,
) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({}) → {} ({})",
        source.name,
        format_file_size(source.size),
        saved_as,
        format_file_size(artifact.size()),
    )];
    if format.uses_quality() {
        lines.push(format!(
            "    Format: {} ({}), quality {}",
            format,
            artifact.mime,
            quality_percent
        ));
    } else {
        lines.push(format!("    Format: {} ({})", format, artifact.mime));
    }
    lines.push(format!(
        "    Dimensions: {}",
        format_dimensions(artifact.dimensions)
    ));
    lines
}

/// Metadata display for a selected source file.
pub fn format_info(source: &SourceFile, dims: Dimensions) -> Vec<String> {
    vec![
        format!("{} ({})", source.name, format_file_size(source.size)),
        format!("    Type: {}", source.mime),
        format!("    Dimensions: {}", format_dimensions(dims)),
    ]
}

/// One line per supported target format.
pub fn format_formats_list() -> Vec<String> {
    TargetFormat::all()
        .iter()
        .map(|fmt| {
            let traits = match (fmt.uses_quality(), fmt.supports_alpha()) {
                (true, true) => "quality, alpha",
                (true, false) => "quality, no alpha",
                (false, true) => "alpha",
                (false, false) => "no alpha",
            };
            format!(
                "{:<6} {:<11} .{:<5} {}",
                fmt.to_string(),
                fmt.mime(),
                fmt.extension(),
                traits
            )
        })
        .collect()
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_size_zero() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn file_size_sub_kilobyte() {
        assert_eq!(format_file_size(512), "512 Bytes");
    }

    #[test]
    fn file_size_whole_units_drop_decimals() {
        assert_eq!(format_file_size(2048), "2 KB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
    }

    #[test]
    fn file_size_rounds_to_two_decimals() {
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 + 256), "1.25 KB");
        // 2047 / 1024 = 1.9990... → 2
        assert_eq!(format_file_size(2047), "2 KB");
    }

    #[test]
    fn dimensions_use_multiplication_sign() {
        let dims = Dimensions { width: 100, height: 50 };
        assert_eq!(format_dimensions(dims), "100 × 50");
    }

    #[test]
    fn convert_summary_shows_quality_for_lossy_targets() {
        let source = SourceFile {
            name: "photo.png".into(),
            mime: "image/png".into(),
            size: 2048,
            bytes: vec![],
        };
        let artifact = ConvertedArtifact {
            bytes: vec![0u8; 1024],
            mime: "image/jpeg",
            dimensions: Dimensions { width: 100, height: 50 },
        };

        let lines =
            format_convert_summary(&source, &artifact, TargetFormat::Jpeg, 90, "photo.jpg");
        assert_eq!(lines[0], "photo.png (2 KB) → photo.jpg (1 KB)");
        assert_eq!(lines[1], "    Format: JPEG (image/jpeg), quality 90");
        assert_eq!(lines[2], "    Dimensions: 100 × 50");
    }

    #[test]
    fn convert_summary_omits_quality_for_lossless_targets() {
        let source = SourceFile {
            name: "a.jpg".into(),
            mime: "image/jpeg".into(),
            size: 100,
            bytes: vec![],
        };
        let artifact = ConvertedArtifact {
            bytes: vec![0u8; 10],
            mime: "image/png",
            dimensions: Dimensions { width: 1, height: 1 },
        };

        let lines = format_convert_summary(&source, &artifact, TargetFormat::Png, 90, "a.png");
        assert_eq!(lines[1], "    Format: PNG (image/png)");
    }

    #[test]
    fn formats_list_covers_all_targets() {
        let lines = format_formats_list();
        assert_eq!(lines.len(), TargetFormat::all().len());
        assert!(lines[0].contains("image/jpeg"));
        assert!(lines[0].contains("quality, no alpha"));
        assert!(lines[1].contains("alpha"));
    }
}
