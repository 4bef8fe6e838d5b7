//! OCR backend abstraction.
//!
//! [`OcrBackend`] is the seam between the batch coordinator and the
//! recognition engine. The default implementation shells out to the
//! `tesseract` binary ([`TesseractOcr`]); tests substitute scripted backends
//! so orchestration can be exercised without an OCR installation.
//!
//! # Thread Safety
//!
//! Backends must be `Send + Sync`: one backend instance is shared by every
//! worker in a batch run.

pub mod tesseract;

pub use tesseract::TesseractOcr;

use crate::Result;
use crate::core::config::OcrConfig;
use async_trait::async_trait;
use std::path::Path;

/// Trait for text-recognition backends.
///
/// # Example
///
/// ```rust
/// use incidex::ocr::OcrBackend;
/// use incidex::core::config::OcrConfig;
/// use incidex::Result;
/// use async_trait::async_trait;
/// use std::path::Path;
///
/// struct FixedText;
///
/// #[async_trait]
/// impl OcrBackend for FixedText {
///     fn name(&self) -> &str {
///         "fixed-text"
///     }
///
///     async fn recognize_file(&self, _path: &Path, _config: &OcrConfig) -> Result<String> {
///         Ok("recognized text".to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait OcrBackend: Send + Sync {
    /// Short identifier for logs and diagnostics.
    fn name(&self) -> &str;

    /// Recognize the text of a single image file.
    ///
    /// # Errors
    ///
    /// - `IncidexError::Ocr` - recognition failed or timed out. The caller
    ///   (the batch coordinator) absorbs this per image.
    /// - `IncidexError::Io` - the engine could not be spawned or the file
    ///   could not be read (these always bubble up).
    async fn recognize_file(&self, path: &Path, config: &OcrConfig) -> Result<String>;
}
