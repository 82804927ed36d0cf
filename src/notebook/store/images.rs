use super::{remove_if_exists, timestamp_file_name};
use crate::error::{NotebookError, Result};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

static DATA_URL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^data:image/\w+;base64,").expect("valid regex"));

// `![alt](path)`, non-greedy on both parts.
static MARKDOWN_IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[.*?\]\((.*?)\)").expect("valid regex"));

// Clipboard payloads are not always padded.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a base64 image, with or without a `data:image/<type>;base64,` prefix.
///
/// Whitespace inside the payload is ignored.
pub fn decode_image(data: &str) -> Result<Vec<u8>> {
    let payload = DATA_URL_PREFIX.replace(data, "");
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(LENIENT_BASE64.decode(compact)?)
}

/// Decode `data` and write it to a new timestamp-named file in `images_dir`.
pub fn save_image(images_dir: &Path, data: &str, ext: &str) -> Result<PathBuf> {
    let bytes = decode_image(data).inspect_err(|e| {
        tracing::error!(error = %e, "failed to save image");
    })?;

    let path = images_dir.join(timestamp_file_name(Local::now(), ext));
    fs::write(&path, &bytes).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to save image");
        NotebookError::Io(e)
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "saved image");
    Ok(path)
}

/// Paths of locally stored images referenced from Markdown `content`.
///
/// A reference counts as local when it contains one of `markers` or starts
/// with `images_dir`. Anything else (remote URLs, mostly) is skipped. This is
/// a pattern match, not a Markdown parse: nested brackets and code spans are
/// not understood.
pub fn extract_image_paths(content: &str, images_dir: &Path, markers: &[String]) -> Vec<String> {
    let images_prefix = images_dir.to_string_lossy();
    MARKDOWN_IMAGE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|path| {
            markers.iter().any(|marker| path.contains(marker.as_str()))
                || (!images_prefix.is_empty() && path.starts_with(&*images_prefix))
        })
        .map(String::from)
        .collect()
}

/// Whether `content` references at least one locally stored image.
pub fn has_images(content: &str, images_dir: &Path, markers: &[String]) -> bool {
    !extract_image_paths(content, images_dir, markers).is_empty()
}

/// Delete an image file. `false` means there was nothing to delete.
pub fn delete_image(path: &Path) -> bool {
    remove_if_exists(path, "image")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NotebookConfig;
    use tempfile::TempDir;

    // 1x1 transparent PNG
    const PNG_B64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    fn markers() -> Vec<String> {
        NotebookConfig::default().image_markers
    }

    #[test]
    fn saved_image_holds_decoded_bytes() {
        let temp = TempDir::new().unwrap();
        let expected = LENIENT_BASE64.decode(PNG_B64).unwrap();

        let plain = save_image(temp.path(), PNG_B64, ".png").unwrap();
        assert_eq!(fs::read(&plain).unwrap(), expected);
        assert_eq!(plain.extension().unwrap(), "png");

        let with_prefix = format!("data:image/png;base64,{}", PNG_B64);
        let prefixed = save_image(temp.path(), &with_prefix, ".png").unwrap();
        assert_eq!(fs::read(&prefixed).unwrap(), expected);
    }

    #[test]
    fn decode_tolerates_missing_padding_and_whitespace() {
        assert_eq!(decode_image("aGk").unwrap(), b"hi");
        assert_eq!(decode_image("aG\nk=").unwrap(), b"hi");
        assert_eq!(decode_image("data:image/jpeg;base64,aGk=").unwrap(), b"hi");
    }

    #[test]
    fn invalid_base64_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = save_image(temp.path(), "not*base64!", ".png");
        assert!(matches!(result, Err(NotebookError::Decode(_))));
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn extract_keeps_only_local_references() {
        let content = "![x](notebook/images/a.png) ![y](http://ext/b.png)";
        let paths = extract_image_paths(content, Path::new("/data/notebook/images"), &markers());
        assert_eq!(paths, vec!["notebook/images/a.png"]);
    }

    #[test]
    fn extract_matches_images_dir_prefix_and_windows_paths() {
        let images_dir = Path::new("/srv/pics");
        let content = "intro\n![](/srv/pics/one.png)\ntext ![alt text](C:\\Users\\me\\images\\two.png) \
                       ![remote](https://cdn.example.com/three.png)";
        let paths = extract_image_paths(content, images_dir, &markers());
        assert_eq!(
            paths,
            vec!["/srv/pics/one.png", "C:\\Users\\me\\images\\two.png"]
        );
    }

    #[test]
    fn extract_ignores_plain_links() {
        let content = "[not an image](notebook/images/a.png)";
        assert!(extract_image_paths(content, Path::new("/x"), &markers()).is_empty());
    }

    #[test]
    fn has_images_agrees_with_extract() {
        let images_dir = Path::new("/data/notebook/images");
        for content in [
            "",
            "no images here",
            "![y](http://ext/b.png)",
            "![x](notebook/images/a.png)",
            "![a](b) ![c](/images/d.png)",
            "![broken(notebook/images/a.png)",
        ] {
            assert_eq!(
                has_images(content, images_dir, &markers()),
                !extract_image_paths(content, images_dir, &markers()).is_empty(),
                "disagreement for {:?}",
                content
            );
        }
    }

    #[test]
    fn delete_image_reports_whether_removed() {
        let temp = TempDir::new().unwrap();
        let path = save_image(temp.path(), PNG_B64, ".png").unwrap();
        assert!(delete_image(&path));
        assert!(!delete_image(&path));
        assert!(!delete_image(&temp.path().join("never.png")));
    }
}
