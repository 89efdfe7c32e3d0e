//! Output filename derivation.
//!
//! The saved file keeps the source's base name: the source extension is
//! stripped (final `.suffix` only) and replaced with the extension mapped
//! from the artifact's MIME type. Unknown MIME types fall back to `jpg`,
//! matching the fixed mapping:
//!
//! - `photo.png` + `image/jpeg` → `photo.jpg`
//! - `archive.tar.gz` + `image/png` → `archive.tar.png`
//! - `noext` + `image/webp` → `noext.webp`

/// Map an artifact MIME type to its save extension. Unknown → `jpg`.
pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        "image/gif" => "gif",
        "image/bmp" => "bmp",
        _ => "jpg",
    }
}

/// Strip the final extension from a filename, if any.
///
/// Dotfiles (`.hidden`) and extensionless names are returned unchanged.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(0) | None => name,
        Some(pos) => &name[..pos],
    }
}

/// Derive the download filename for an artifact produced from `source_name`.
pub fn download_filename(source_name: &str, artifact_mime: &str) -> String {
    format!(
        "{}.{}",
        strip_extension(source_name),
        extension_for_mime(artifact_mime)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_single_extension() {
        assert_eq!(download_filename("photo.png", "image/jpeg"), "photo.jpg");
        assert_eq!(download_filename("photo.jpeg", "image/png"), "photo.png");
    }

    #[test]
    fn strips_only_final_extension() {
        assert_eq!(
            download_filename("archive.tar.gz", "image/png"),
            "archive.tar.png"
        );
    }

    #[test]
    fn extensionless_source_gets_extension_appended() {
        assert_eq!(download_filename("noext", "image/webp"), "noext.webp");
    }

    #[test]
    fn dotfile_name_is_preserved() {
        assert_eq!(download_filename(".hidden", "image/gif"), ".hidden.gif");
    }

    #[test]
    fn unknown_mime_defaults_to_jpg() {
        assert_eq!(download_filename("photo.png", "image/x-exotic"), "photo.jpg");
        assert_eq!(extension_for_mime(""), "jpg");
    }

    #[test]
    fn full_mapping_table() {
        assert_eq!(extension_for_mime("image/jpeg"), "jpg");
        assert_eq!(extension_for_mime("image/jpg"), "jpg");
        assert_eq!(extension_for_mime("image/png"), "png");
        assert_eq!(extension_for_mime("image/webp"), "webp");
        assert_eq!(extension_for_mime("image/gif"), "gif");
        assert_eq!(extension_for_mime("image/bmp"), "bmp");
    }
}
