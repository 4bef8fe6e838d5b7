//! Shared test helpers.
//!
//! Scripted OCR backends so pipeline tests run without a tesseract
//! installation, plus corpus fixture builders.
#![allow(dead_code)]

use async_trait::async_trait;
use incidex::core::config::OcrConfig;
use incidex::ocr::OcrBackend;
use incidex::{IncidexError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// OCR backend scripted by file name.
///
/// Unknown names yield an `Ocr` error, which the coordinator must absorb.
pub struct ScriptedBackend {
    pages: HashMap<String, String>,
}

impl ScriptedBackend {
    pub fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(name, text)| (name.to_string(), text.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl OcrBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn recognize_file(&self, path: &Path, _config: &OcrConfig) -> Result<String> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.pages
            .get(&name)
            .cloned()
            .ok_or_else(|| IncidexError::ocr(format!("no script for {}", name)))
    }
}

/// Backend that fails every recognition with an I/O error.
pub struct IoFailingBackend;

#[async_trait]
impl OcrBackend for IoFailingBackend {
    fn name(&self) -> &str {
        "io-failing"
    }

    async fn recognize_file(&self, _path: &Path, _config: &OcrConfig) -> Result<String> {
        Err(IncidexError::Io(std::io::Error::other("disk unplugged")))
    }
}

/// Create a corpus directory containing empty image files with the given
/// names. The scripted backends never read the files, only the names matter.
pub fn corpus_with_pages(names: &[&str]) -> (TempDir, Vec<PathBuf>) {
    let dir = tempfile::tempdir().expect("create corpus tempdir");
    let mut paths = Vec::new();
    for name in names {
        let path = dir.path().join(name);
        File::create(&path).expect("create corpus page");
        paths.push(path);
    }
    (dir, paths)
}
