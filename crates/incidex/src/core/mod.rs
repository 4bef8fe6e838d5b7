//! Core ingest orchestration module.
//!
//! This module contains the orchestration layer for incidex: configuration
//! loading, corpus enumeration, and the batch coordinator, tied together by
//! the [`run_ingest`] entry point.
//!
//! # Architecture
//!
//! - **Entry Point**: [`run_ingest`] drives one full corpus pass
//! - **Coordinator**: sharded fork-join over the worker pool
//! - **Configuration**: TOML loading and discovery
//! - **I/O**: corpus directory validation and image enumeration
//!
//! # Example
//!
//! ```rust,no_run
//! use incidex::core::{run_ingest, config::IngestConfig};
//! use incidex::ocr::TesseractOcr;
//! use std::sync::Arc;
//!
//! # async fn example() -> incidex::Result<()> {
//! let config = IngestConfig::default();
//! let summary = run_ingest(
//!     "scans/",
//!     "incidents.json",
//!     Arc::new(TesseractOcr::new()),
//!     &config,
//! )
//! .await?;
//! println!("Accepted {} records", summary.records_accepted);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod coordinator;
pub mod io;

pub use config::{IngestConfig, OcrConfig};
pub use coordinator::process_corpus;

use crate::Result;
use crate::ocr::OcrBackend;
use crate::sink::write_records;
use crate::types::RunSummary;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Run one full ingest pass: enumerate, recognize, classify, extract, persist.
///
/// The output file is written exactly once, after every worker has joined,
/// even when no records are accepted.
///
/// # Errors
///
/// - `IncidexError::Validation` - `corpus_dir` is not a directory.
/// - `IncidexError::Io` - enumeration, recognition spawn, or output write
///   failures (always bubble up).
/// - `IncidexError::Other` - a worker panicked.
pub async fn run_ingest(
    corpus_dir: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    backend: Arc<dyn OcrBackend>,
    config: &IngestConfig,
) -> Result<RunSummary> {
    let started = Instant::now();

    let images = io::list_images(corpus_dir.as_ref())?;
    info!(
        corpus = %corpus_dir.as_ref().display(),
        images = images.len(),
        "corpus enumerated"
    );

    let images_scanned = images.len();
    let records = process_corpus(images, backend, config).await?;
    write_records(output_path.as_ref(), &records)?;

    let summary = RunSummary {
        images_scanned,
        records_accepted: records.len(),
        elapsed_ms: started.elapsed().as_millis() as u64,
    };
    info!(
        images = summary.images_scanned,
        accepted = summary.records_accepted,
        elapsed_ms = summary.elapsed_ms,
        "ingest run finished"
    );

    Ok(summary)
}
