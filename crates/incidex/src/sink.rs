//! Record persistence.
//!
//! Accepted records are written once, after the batch joins, as a single
//! pretty-printed JSON array. The write goes to a sibling temp file first and
//! is renamed into place, so readers never observe a half-written index.

use crate::types::IncidentRecord;
use crate::{IncidexError, Result};
use std::path::Path;
use tracing::info;

/// Write records to `path` as a JSON array.
///
/// An empty run still writes a file (containing `[]`), so downstream tooling
/// can distinguish "ran and found nothing" from "never ran".
///
/// # Errors
///
/// - `IncidexError::Serialization` - a record failed to serialize.
/// - `IncidexError::Io` - the temp write or rename failed (always bubbles up).
pub fn write_records(path: impl AsRef<Path>, records: &[IncidentRecord]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(records)?;

    let tmp_path = match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            parent.join(format!(".{}.tmp", name.to_string_lossy()))
        }
        _ => {
            return Err(IncidexError::validation(format!(
                "Output path has no file name: {}",
                path.display()
            )));
        }
    };

    std::fs::write(&tmp_path, json.as_bytes()).map_err(IncidexError::Io)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Leave no temp file behind on a failed rename.
        let _ = std::fs::remove_file(&tmp_path);
        return Err(IncidexError::Io(e));
    }

    info!(records = records.len(), output = %path.display(), "wrote record index");
    Ok(())
}
