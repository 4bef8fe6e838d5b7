//! Batch coordination integration tests.
//!
//! Validates sharded fork-join behavior of `process_corpus`: worker-count
//! invariance of the output set, per-image failure absorption, and system
//! error propagation.

use incidex::core::config::IngestConfig;
use incidex::core::coordinator::process_corpus;
use incidex::{IncidentRecord, IncidexError};
use std::path::PathBuf;
use std::sync::Arc;

mod helpers;
use helpers::{IoFailingBackend, ScriptedBackend};

fn config_with_workers(workers: usize) -> IngestConfig {
    IngestConfig {
        workers: Some(workers),
        ..Default::default()
    }
}

fn synthetic_corpus(pages: usize) -> Vec<(String, String)> {
    (0..pages)
        .map(|i| {
            (
                format!("page{:03}.png", i),
                format!(
                    "A shooting in Springfield, IL on March {}, 2021 left {} people dead.",
                    (i % 28) + 1,
                    i + 1
                ),
            )
        })
        .collect()
}

fn sorted_by_source(mut records: Vec<IncidentRecord>) -> Vec<IncidentRecord> {
    records.sort_by(|a, b| a.source.cmp(&b.source));
    records
}

#[tokio::test]
async fn test_output_set_identical_across_worker_counts() {
    let pages = synthetic_corpus(25);
    let page_refs: Vec<(&str, &str)> = pages
        .iter()
        .map(|(n, t)| (n.as_str(), t.as_str()))
        .collect();
    let paths: Vec<PathBuf> = pages.iter().map(|(n, _)| PathBuf::from(n)).collect();

    let mut baseline: Option<Vec<IncidentRecord>> = None;
    for workers in [1, 2, 3, 8, 32] {
        let backend = Arc::new(ScriptedBackend::new(&page_refs));
        let records = process_corpus(paths.clone(), backend, &config_with_workers(workers))
            .await
            .unwrap();
        let records = sorted_by_source(records);

        match &baseline {
            None => baseline = Some(records),
            Some(expected) => assert_eq!(
                &records, expected,
                "output set diverged at workers = {}",
                workers
            ),
        }
    }

    assert_eq!(baseline.unwrap().len(), 25);
}

#[tokio::test]
async fn test_failed_recognitions_do_not_poison_other_shards() {
    // Odd pages fail recognition entirely; even pages must all survive.
    let pages = synthetic_corpus(10);
    let page_refs: Vec<(&str, &str)> = pages
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 2 == 0)
        .map(|(_, (n, t))| (n.as_str(), t.as_str()))
        .collect();
    let paths: Vec<PathBuf> = pages.iter().map(|(n, _)| PathBuf::from(n)).collect();

    let backend = Arc::new(ScriptedBackend::new(&page_refs));
    let records = process_corpus(paths, backend, &config_with_workers(4))
        .await
        .unwrap();

    assert_eq!(records.len(), 5);
    for record in &records {
        let index: usize = record.source["page".len()..record.source.len() - ".png".len()]
            .parse()
            .unwrap();
        assert_eq!(index % 2, 0, "odd page leaked through: {}", record.source);
    }
}

#[tokio::test]
async fn test_io_error_in_any_shard_fails_the_run() {
    let paths: Vec<PathBuf> = (0..4).map(|i| PathBuf::from(format!("page{}.png", i))).collect();

    let backend = Arc::new(IoFailingBackend);
    let result = process_corpus(paths, backend, &config_with_workers(2)).await;

    assert!(matches!(result.unwrap_err(), IncidexError::Io(_)));
}

#[tokio::test]
async fn test_single_image_corpus_with_large_worker_pool() {
    let backend = Arc::new(ScriptedBackend::new(&[(
        "lone.png",
        "A shooting in Dallas on July 7, 2016 left 5 people dead.",
    )]));

    let records = process_corpus(
        vec![PathBuf::from("lone.png")],
        backend,
        &config_with_workers(64),
    )
    .await
    .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].location, "Dallas");
    assert_eq!(records[0].victim_count, 5);
}

#[tokio::test]
async fn test_duplicate_page_text_yields_duplicate_records() {
    // Two distinct images with identical text are two records; dedup is out
    // of scope for the coordinator.
    let text = "A shooting in Chicago on January 15, 2019 left 3 people dead.";
    let backend = Arc::new(ScriptedBackend::new(&[("a.png", text), ("b.png", text)]));

    let records = process_corpus(
        vec![PathBuf::from("a.png"), PathBuf::from("b.png")],
        backend,
        &config_with_workers(2),
    )
    .await
    .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].description, records[1].description);
    assert_ne!(records[0].source, records[1].source);
}
