//! Error types for incidex.
//!
//! All fallible operations in the library return [`Result`]. The error
//! taxonomy mirrors how failures propagate through a run:
//!
//! **System errors MUST always bubble up unchanged:**
//! - `IncidexError::Io` (from `std::io::Error`) - file system errors,
//!   permission errors. These indicate real system problems that operators
//!   need to know about; never wrap or suppress them.
//!
//! **Application errors are wrapped with context:**
//! - `Ocr` - recognition failures for a single image. These are absorbed by
//!   the batch coordinator (the image degrades to empty text) and never
//!   terminate a run.
//! - `Validation` - invalid corpus directory, invalid configuration.
//! - `Serialization` - sink serialization failures.
//!
//! # Example
//!
//! ```rust
//! use incidex::{IncidexError, Result};
//!
//! fn check_corpus(path: &str) -> Result<()> {
//!     if !std::path::Path::new(path).is_dir() {
//!         return Err(IncidexError::validation(
//!             format!("Corpus path is not a directory: {}", path)
//!         ));
//!     }
//!     Ok(())
//! }
//! ```
use thiserror::Error;

/// Result type alias using `IncidexError`.
///
/// This is the standard return type for all fallible operations in incidex.
pub type Result<T> = std::result::Result<T, IncidexError>;

/// Main error type for all incidex operations.
///
/// # Variants
///
/// - `Io` - File system and I/O errors (always bubble up)
/// - `Ocr` - Text recognition errors (absorbed per-image by the coordinator)
/// - `Validation` - Input validation errors (corpus path, config values)
/// - `Serialization` - JSON serialization errors from the record sink
/// - `Other` - Catch-all for uncommon errors (e.g. worker panics)
#[derive(Debug, Error)]
pub enum IncidexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OCR error: {message}")]
    Ocr {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for IncidexError {
    fn from(err: serde_json::Error) -> Self {
        IncidexError::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl IncidexError {
    /// Create an Ocr error.
    pub fn ocr<S: Into<String>>(message: S) -> Self {
        Self::Ocr {
            message: message.into(),
            source: None,
        }
    }

    /// Create an Ocr error with source.
    pub fn ocr_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Ocr {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a Validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Validation error with source.
    pub fn validation_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Validation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a Serialization error.
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
            source: None,
        }
    }
}
