//! Concurrent batch coordination.
//!
//! [`process_corpus`] fans a corpus out over a fixed worker pool and joins the
//! results. The corpus is split into contiguous shards, one per worker; each
//! worker accumulates accepted records into its own private vector, and the
//! shard vectors are merged only after every worker has finished. No shared
//! mutable state exists while workers run, so output aggregation cannot
//! contend or interleave.
//!
//! Per-image failures degrade, system failures abort:
//!
//! - `Ocr` errors (including timeouts) degrade the image to empty text, which
//!   never classifies as relevant. The image is logged and skipped.
//! - `Io` errors fail the whole run. A disappearing corpus or a dead disk is
//!   not a per-image condition.

use crate::classify::is_relevant;
use crate::core::config::IngestConfig;
use crate::extract::extract_record;
use crate::ocr::OcrBackend;
use crate::types::IncidentRecord;
use crate::{IncidexError, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Run the recognize-classify-extract pipeline over a corpus.
///
/// Workers process disjoint contiguous shards of `images`. The merged output
/// preserves shard order (worker 0's records first), but callers should treat
/// it as a set: relative order across shards carries no meaning.
///
/// # Errors
///
/// - `IncidexError::Io` - a system error from recognition; aborts the run.
/// - `IncidexError::Other` - a worker panicked.
pub async fn process_corpus(
    images: Vec<PathBuf>,
    backend: Arc<dyn OcrBackend>,
    config: &IngestConfig,
) -> Result<Vec<IncidentRecord>> {
    if images.is_empty() {
        return Ok(vec![]);
    }

    let workers = config.effective_workers().min(images.len());
    let shard_size = images.len().div_ceil(workers);
    debug!(
        images = images.len(),
        workers,
        shard_size,
        backend = backend.name(),
        "starting batch run"
    );

    let ocr_config = Arc::new(config.ocr.clone());
    let mut tasks = JoinSet::new();

    for (shard_index, shard) in images.chunks(shard_size).enumerate() {
        let shard: Vec<PathBuf> = shard.to_vec();
        let backend = Arc::clone(&backend);
        let ocr_config = Arc::clone(&ocr_config);

        tasks.spawn(async move {
            let mut records = Vec::new();

            for path in &shard {
                let source_id = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());

                let text = match backend.recognize_file(path, &ocr_config).await {
                    Ok(text) => text,
                    Err(IncidexError::Io(e)) => return Err(IncidexError::Io(e)),
                    Err(e) => {
                        // Recognition failure degrades to empty text, which
                        // never classifies as relevant.
                        warn!(image = %path.display(), error = %e, "recognition failed, skipping image");
                        String::new()
                    }
                };

                if !is_relevant(&text) {
                    debug!(image = %path.display(), "not relevant, skipping");
                    continue;
                }

                let record = extract_record(&text, &source_id);
                if record.is_retainable() {
                    records.push(record);
                } else {
                    debug!(image = %path.display(), "relevant but not retainable, skipping");
                }
            }

            Ok((shard_index, records))
        });
    }

    let mut shards: Vec<Option<Vec<IncidentRecord>>> = vec![None; workers];

    while let Some(task_result) = tasks.join_next().await {
        match task_result {
            Ok(Ok((shard_index, records))) => {
                shards[shard_index] = Some(records);
            }
            Ok(Err(e)) => return Err(e),
            Err(join_err) => {
                return Err(IncidexError::Other(format!(
                    "Worker panicked: {}",
                    join_err
                )));
            }
        }
    }

    Ok(shards.into_iter().flatten().flatten().collect())
}
