//! Incidex - Incident Index Extraction from Scanned Newspapers
//!
//! Incidex sweeps a directory of scanned newspaper page images, recognizes
//! their text with OCR, keeps the pages that mention shooting incidents, and
//! distills each kept page into a structured incident record persisted as
//! JSON.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use incidex::{IngestConfig, run_ingest};
//! use incidex::ocr::TesseractOcr;
//! use std::sync::Arc;
//!
//! # async fn main_example() -> incidex::Result<()> {
//! let config = IngestConfig::default();
//! let summary = run_ingest(
//!     "scans/",
//!     "incidents.json",
//!     Arc::new(TesseractOcr::new()),
//!     &config,
//! )
//! .await?;
//! println!("Accepted {} of {} pages", summary.records_accepted, summary.images_scanned);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Core Module** (`core`): batch coordination, corpus enumeration, config
//! - **OCR** (`ocr`): pluggable recognition backends (Tesseract subprocess)
//! - **Classification** (`classify`): relevance vocabulary matching
//! - **Extraction** (`extract`): field heuristics producing incident records
//! - **Sink** (`sink`): atomic JSON persistence
//!
//! # Pipeline
//!
//! Each image passes through recognize -> classify -> extract -> retain.
//! Recognition failures degrade the image to empty text and are skipped;
//! I/O failures abort the run.

#![deny(unsafe_code)]

pub mod classify;
pub mod core;
pub mod error;
pub mod extract;
pub mod ocr;
pub mod sink;
pub mod types;

pub use error::{IncidexError, Result};
pub use types::{IncidentRecord, RunSummary};

pub use core::config::{IngestConfig, OcrConfig};
pub use core::coordinator::process_corpus;
pub use core::run_ingest;

pub use classify::is_relevant;
pub use extract::extract_record;
pub use sink::write_records;
