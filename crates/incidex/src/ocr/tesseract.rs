//! Tesseract subprocess backend.
//!
//! Recognition runs the `tesseract` binary per image rather than linking the
//! library: `tesseract <image> stdout -l <lang> --psm <psm>`. The engine's
//! crashes and hangs stay inside the child process, and the per-image timeout
//! from [`OcrConfig`] bounds how long a malformed scan can stall a worker.

use crate::core::config::OcrConfig;
use crate::ocr::OcrBackend;
use crate::{IncidexError, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tokio::sync::OnceCell;
use tokio::time::{Duration, timeout};
use tracing::debug;

static TESSERACT_VERSION: OnceCell<String> = OnceCell::const_new();

/// OCR backend that shells out to the `tesseract` binary.
///
/// # Example
///
/// ```rust,no_run
/// use incidex::ocr::{OcrBackend, TesseractOcr};
/// use incidex::core::config::OcrConfig;
/// use std::path::Path;
///
/// # async fn run() -> incidex::Result<()> {
/// let backend = TesseractOcr::new();
/// let text = backend
///     .recognize_file(Path::new("page_001.png"), &OcrConfig::default())
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TesseractOcr;

impl TesseractOcr {
    pub fn new() -> Self {
        Self
    }

    /// Probe the installed tesseract version, caching the result.
    ///
    /// # Errors
    ///
    /// Returns `IncidexError::MissingDependency` if the binary is not on
    /// `PATH`, and `IncidexError::Ocr` if the version output is unreadable.
    pub async fn version() -> Result<String> {
        TESSERACT_VERSION
            .get_or_try_init(|| async {
                let output = Command::new("tesseract")
                    .arg("--version")
                    .output()
                    .await
                    .map_err(|e| {
                        if e.kind() == std::io::ErrorKind::NotFound {
                            IncidexError::MissingDependency(
                                "tesseract not found in PATH. Install it from \
                                 https://github.com/tesseract-ocr/tesseract"
                                    .to_string(),
                            )
                        } else {
                            IncidexError::Io(e)
                        }
                    })?;

                // Tesseract prints its version banner to stderr on some
                // builds and stdout on others.
                let banner = if output.stdout.is_empty() {
                    String::from_utf8_lossy(&output.stderr).to_string()
                } else {
                    String::from_utf8_lossy(&output.stdout).to_string()
                };

                banner
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .map(|v| v.to_string())
                    .ok_or_else(|| {
                        IncidexError::ocr(format!(
                            "Could not parse tesseract version from: {}",
                            banner
                        ))
                    })
            })
            .await
            .cloned()
    }
}

#[async_trait]
impl OcrBackend for TesseractOcr {
    fn name(&self) -> &str {
        "tesseract"
    }

    async fn recognize_file(&self, path: &Path, config: &OcrConfig) -> Result<String> {
        debug!(image = %path.display(), language = %config.language, "spawning tesseract");

        let child = Command::new("tesseract")
            .arg(path)
            .arg("stdout")
            .arg("-l")
            .arg(&config.language)
            .arg("--psm")
            .arg(config.psm.to_string())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                // Failed to execute tesseract - this is an IO error (command not found, etc.)
                std::io::Error::other(format!("Failed to execute tesseract: {}", e))
            })?;

        let wait = child.wait_with_output();
        let output = match config.timeout_seconds {
            Some(secs) => match timeout(Duration::from_secs(secs), wait).await {
                Ok(Ok(output)) => output,
                Ok(Err(e)) => {
                    return Err(
                        std::io::Error::other(format!("Failed to wait for tesseract: {}", e))
                            .into(),
                    );
                }
                Err(_) => {
                    // Timeout - the child was consumed by wait_with_output(),
                    // kill_on_drop reaps it.
                    return Err(IncidexError::ocr(format!(
                        "Recognition of {} timed out after {} seconds",
                        path.display(),
                        secs
                    )));
                }
            },
            None => wait.await.map_err(|e| {
                std::io::Error::other(format!("Failed to wait for tesseract: {}", e))
            })?,
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);

            // Subprocess error analysis - wrap only if a recognition error is
            // detected; true system errors bubble up as IO.
            let stderr_lower = stderr.to_lowercase();
            if stderr_lower.contains("error")
                || stderr_lower.contains("failed")
                || stderr_lower.contains("could not")
                || stderr_lower.contains("unsupported")
            {
                return Err(IncidexError::ocr(format!(
                    "Tesseract failed on {}: {}",
                    path.display(),
                    stderr.trim()
                )));
            }

            return Err(std::io::Error::other(format!(
                "Tesseract system error on {}: {}",
                path.display(),
                stderr.trim()
            ))
            .into());
        }

        String::from_utf8(output.stdout).map_err(|e| {
            IncidexError::ocr_with_source(
                format!("Failed to decode tesseract output for {}", path.display()),
                e,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn tesseract_available() -> bool {
        TesseractOcr::version().await.is_ok()
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(TesseractOcr::new().name(), "tesseract");
    }

    #[tokio::test]
    async fn test_recognize_missing_file_fails() {
        if !tesseract_available().await {
            return;
        }

        let backend = TesseractOcr::new();
        let result = backend
            .recognize_file(Path::new("/nonexistent/page.png"), &OcrConfig::default())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_version_probe_is_cached() {
        if !tesseract_available().await {
            return;
        }

        let first = TesseractOcr::version().await.unwrap();
        let second = TesseractOcr::version().await.unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
