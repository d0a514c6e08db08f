//! Consolidated annotation table writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::annotation::EventInterval;
use crate::constants::{TIME_DECIMAL_PLACES, table};
use crate::error::{Error, Result};

/// One row of the consolidated table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Audio file name the event belongs to.
    pub filename: String,
    /// The event itself.
    pub event: EventInterval,
}

impl TableRow {
    /// Build a row from a filename and event.
    pub const fn new(filename: String, event: EventInterval) -> Self {
        Self { filename, event }
    }
}

/// Sort rows the way the consolidated table is emitted.
pub fn sort_rows(rows: &mut [TableRow]) {
    rows.sort_by(|a, b| {
        a.filename
            .cmp(&b.filename)
            .then_with(|| a.event.onset.total_cmp(&b.event.onset))
            .then_with(|| a.event.label.cmp(&b.event.label))
    });
}

/// Write the consolidated tab-separated table.
///
/// Columns are `filename`, `onset`, `offset`, `event_label`; times carry
/// three decimal places. Rows are written in the order given — callers
/// sort with [`sort_rows`] first.
pub fn write_table(path: &Path, rows: &[TableRow]) -> Result<()> {
    let wrap = |e: std::io::Error| Error::TableWrite {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(wrap)?;
        }
    }

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", table::HEADER).map_err(wrap)?;
    for row in rows {
        writeln!(
            writer,
            "{}\t{:.places$}\t{:.places$}\t{}",
            row.filename,
            row.event.onset,
            row.event.offset,
            row.event.label,
            places = TIME_DECIMAL_PLACES,
        )
        .map_err(wrap)?;
    }
    writer.flush().map_err(wrap)
}
