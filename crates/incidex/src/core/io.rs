//! Corpus enumeration.
//!
//! Lists the candidate image files of a corpus directory. Enumeration order
//! is unspecified; the coordinator's output is order-insensitive anyway.

use crate::{IncidexError, Result};
use std::path::{Path, PathBuf};

/// Image extensions accepted as corpus candidates.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tiff"];

/// Validate that a corpus path exists and is a directory.
///
/// # Errors
///
/// Returns `IncidexError::Validation` otherwise. A missing corpus is fatal to
/// the run: no images means no output is possible.
pub fn validate_dir_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Err(IncidexError::validation(format!(
            "Corpus path is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

/// List candidate image files in a corpus directory.
///
/// Non-recursive scan filtered to [`IMAGE_EXTENSIONS`] (ASCII
/// case-insensitive). Order is unspecified.
///
/// # Errors
///
/// Returns `IncidexError::Validation` if the path is not a directory, and
/// `IncidexError::Io` for read failures (these always bubble up).
pub fn list_images(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    validate_dir_exists(dir)?;

    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(IncidexError::Io)? {
        let entry = entry.map_err(IncidexError::Io)?;
        let path = entry.path();

        if path.is_file() && has_image_extension(&path) {
            images.push(path);
        }
    }

    Ok(images)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lowered = e.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&lowered.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_list_images_filters_extensions() {
        let dir = tempdir().unwrap();

        File::create(dir.path().join("page1.png")).unwrap();
        File::create(dir.path().join("page2.jpg")).unwrap();
        File::create(dir.path().join("page3.jpeg")).unwrap();
        File::create(dir.path().join("page4.tiff")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        File::create(dir.path().join("index.pdf")).unwrap();

        let images = list_images(dir.path()).unwrap();
        assert_eq!(images.len(), 4);
    }

    #[test]
    fn test_list_images_extension_case_insensitive() {
        let dir = tempdir().unwrap();

        File::create(dir.path().join("scan.PNG")).unwrap();
        File::create(dir.path().join("scan2.Tiff")).unwrap();

        let images = list_images(dir.path()).unwrap();
        assert_eq!(images.len(), 2);
    }

    #[test]
    fn test_list_images_ignores_subdirectories() {
        let dir = tempdir().unwrap();

        File::create(dir.path().join("page.png")).unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        File::create(dir.path().join("nested").join("deep.png")).unwrap();

        let images = list_images(dir.path()).unwrap();
        assert_eq!(images.len(), 1);
    }

    #[test]
    fn test_list_images_empty_directory() {
        let dir = tempdir().unwrap();
        let images = list_images(dir.path()).unwrap();
        assert!(images.is_empty());
    }

    #[test]
    fn test_list_images_missing_directory_is_fatal() {
        let result = list_images("/nonexistent/corpus");
        assert!(matches!(result.unwrap_err(), IncidexError::Validation { .. }));
    }

    #[test]
    fn test_validate_dir_exists_rejects_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("not_a_dir.png");
        File::create(&file_path).unwrap();

        assert!(validate_dir_exists(&file_path).is_err());
        assert!(validate_dir_exists(dir.path()).is_ok());
    }
}
