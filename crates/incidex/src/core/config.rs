//! Configuration loading and management.
//!
//! [`IngestConfig`] covers one run of the pipeline: worker-pool sizing, OCR
//! engine settings, and the per-image recognition timeout. It can be loaded
//! from a TOML file, discovered upward from the working directory
//! (`incidex.toml`), or created programmatically.

use crate::{IncidexError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for one ingest run.
///
/// # Example
///
/// ```rust
/// use incidex::core::config::IngestConfig;
///
/// // Create with defaults
/// let config = IngestConfig::default();
///
/// // Load from TOML file
/// // let config = IngestConfig::from_toml_file("incidex.toml")?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Worker count for batch processing (None = detected parallelism).
    ///
    /// The corpus is split into this many contiguous shards. A fixed, small
    /// value keeps the coordinator deterministic to schedule in tests.
    #[serde(default)]
    pub workers: Option<usize>,

    /// OCR engine settings.
    #[serde(default)]
    pub ocr: OcrConfig,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            workers: None,
            ocr: OcrConfig::default(),
        }
    }
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Language code passed to the engine (e.g. "eng", "deu").
    #[serde(default = "default_language")]
    pub language: String,

    /// Page segmentation mode. 3 = fully automatic, suited to newspaper
    /// layouts.
    #[serde(default = "default_psm")]
    pub psm: u8,

    /// Per-image recognition timeout in seconds (None = no timeout).
    ///
    /// Recognition can hang on malformed scans; a timed-out image degrades to
    /// empty text like any other OCR failure.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: Option<u64>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            psm: default_psm(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_language() -> String {
    "eng".to_string()
}

fn default_psm() -> u8 {
    3
}

fn default_timeout() -> Option<u64> {
    Some(120)
}

impl IngestConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `IncidexError::Validation` if the file is unreadable or is not
    /// valid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            IncidexError::validation(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            IncidexError::validation(format!("Invalid TOML in {}: {}", path.as_ref().display(), e))
        })
    }

    /// Discover a configuration file in parent directories.
    ///
    /// Searches for `incidex.toml` in the current directory and each parent.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file found
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir().map_err(IncidexError::Io)?;

        loop {
            let candidate = current.join("incidex.toml");
            if candidate.exists() {
                return Ok(Some(Self::from_toml_file(candidate)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Effective worker count: the configured value, else detected hardware
    /// parallelism, never less than 1.
    pub fn effective_workers(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get).max(1)
    }
}
