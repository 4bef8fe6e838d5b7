//! Core data types.
//!
//! [`IncidentRecord`] is the sole persisted entity: one record per accepted
//! newspaper page, fully populated in a single pass by the field extractor and
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A structured shooting-incident record extracted from one scanned page.
///
/// Every field has a documented fallback, so construction always succeeds;
/// whether the record is *retained* is a separate decision made by the batch
/// coordinator (see [`IncidentRecord::is_retainable`]).
///
/// Serialized field names match the sink contract exactly: `date`, `victims`,
/// `location`, `description`, `source`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IncidentRecord {
    /// First date-like substring in "Month D, YYYY" form, or empty.
    ///
    /// Kept as free text; no normalization to a calendar type.
    #[serde(default)]
    pub date: String,

    /// Victim count from the first count-like phrase, 0 if undetermined.
    #[serde(rename = "victims")]
    pub victim_count: u32,

    /// Capitalized place-name phrase, optionally suffixed with a two-letter
    /// region code (e.g. "Springfield, IL"), or empty.
    #[serde(default)]
    pub location: String,

    /// Matched incident sentence, or the first 500 characters of the source
    /// text when no sentence anchor was found.
    #[serde(default)]
    pub description: String,

    /// Filename of the originating image. Provenance only; not unique.
    #[serde(default)]
    pub source: String,
}

impl IncidentRecord {
    /// Retention filter: a record enters the final collection iff it has a
    /// determined victim count and a non-empty location.
    pub fn is_retainable(&self) -> bool {
        self.victim_count > 0 && !self.location.is_empty()
    }
}

/// Summary of one completed ingest run, reported to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of candidate images enumerated in the corpus directory.
    pub images_scanned: usize,
    /// Number of records that passed classification and the retention filter.
    pub records_accepted: usize,
    /// Wall-clock duration of the run in milliseconds.
    pub elapsed_ms: u64,
}
