//! Flat annotation file parsing.
//!
//! Parses the three-column tab-separated files written next to each
//! generated clip: `onset<TAB>offset<TAB>event_label`, no header. Uses the
//! `csv` crate for robust parsing.

use std::path::Path;

use serde::Deserialize;

use crate::Error;
use crate::annotation::{ClipRecord, EventInterval};

/// Internal record for TSV deserialization.
#[derive(Debug, Deserialize)]
struct FlatRow {
    onset: f64,
    offset: f64,
    label: String,
}

/// Parse a flat three-column annotation file into a [`ClipRecord`].
///
/// The flat format carries no role information and no clip duration; the
/// returned record has `duration: None` and all rows are taken as events.
/// Degenerate rows (offset not past onset) are kept as-is for the
/// reconciler to fix.
///
/// # Errors
///
/// Returns [`Error::FlatParse`] when a row has the wrong number of columns
/// or a time field is not a number.
pub fn load_flat(path: &Path) -> Result<ClipRecord, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::FlatParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut events = Vec::new();

    for (line_num, result) in reader.deserialize::<FlatRow>().enumerate() {
        let row = result.map_err(|e| Error::FlatParse {
            path: path.to_path_buf(),
            message: format!("line {}: {e}", line_num + 1),
        })?;
        events.push(EventInterval::new(row.onset, row.offset, row.label));
    }

    events.sort_by(|a, b| a.onset.total_cmp(&b.onset));

    Ok(ClipRecord {
        clip_id: clip_id_for(path),
        duration: None,
        events,
    })
}

/// Clip identifier for an annotation file (the file stem).
pub(crate) fn clip_id_for(path: &Path) -> String {
    path.file_stem().map_or_else(
        || path.display().to_string(),
        |stem| stem.to_string_lossy().into_owned(),
    )
}
