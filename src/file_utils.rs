use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{AppError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_str.to_lowercase().as_str()))
        .unwrap_or(false)
}

pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported_image(path))
        .collect();

    image_files.sort();
    Ok(image_files)
}

/// Resolves an image reference from the site file against the site's directory.
///
/// Only local files are supported: URLs are rejected and absolute paths are
/// returned unchanged.
pub fn resolve_image_ref(base_dir: &Path, image: &str) -> Result<String> {
    if image.contains("://") {
        return Err(AppError::SiteConfig(format!(
            "remote image {} is not supported, use a local file",
            image
        )));
    }
    if Path::new(image).is_absolute() {
        return Ok(image.to_string());
    }
    Ok(base_dir.join(image).to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn scan_directory_keeps_sorted_images_only() {
        let dir = tempdir().expect("failed to create temp dir");
        for name in ["b.PNG", "a.jpg", "notes.txt", "c.webp"] {
            fs::write(dir.path().join(name), b"fake").expect("failed to write file");
        }
        fs::create_dir(dir.path().join("nested.jpg")).expect("failed to create dir");

        let files = scan_directory(dir.path()).expect("scan failed");
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.PNG", "c.webp"]);
    }

    #[test]
    fn scan_missing_directory_fails() {
        let dir = tempdir().expect("failed to create temp dir");
        assert!(scan_directory(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn resolve_relative_and_absolute_refs() {
        let base = Path::new("/srv/site");
        let absolute = base.join("img/salon.jpg").to_string_lossy().into_owned();
        assert_eq!(
            resolve_image_ref(base, "img/salon.jpg").expect("relative ref"),
            absolute
        );
        assert_eq!(
            resolve_image_ref(base, &absolute).expect("absolute ref"),
            absolute
        );
    }

    #[test]
    fn remote_refs_are_rejected() {
        let err = resolve_image_ref(Path::new("."), "https://cdn.example.com/a.jpg")
            .expect_err("remote ref");
        assert!(matches!(err, AppError::SiteConfig(_)));
    }
}
