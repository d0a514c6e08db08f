//! Per-clip cleaned annotation writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::annotation::EventInterval;
use crate::constants::TIME_DECIMAL_PLACES;
use crate::error::{Error, Result};

/// Write one clip's cleaned events as a flat three-column file.
///
/// Same shape the loaders read back: `onset<TAB>offset<TAB>event_label`,
/// no header, three decimal places.
pub fn write_clip_annotation(path: &Path, events: &[EventInterval]) -> Result<()> {
    let wrap = |e: std::io::Error| Error::TableWrite {
        path: path.to_path_buf(),
        source: e,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    for event in events {
        writeln!(
            writer,
            "{:.places$}\t{:.places$}\t{}",
            event.onset,
            event.offset,
            event.label,
            places = TIME_DECIMAL_PLACES,
        )
        .map_err(wrap)?;
    }
    writer.flush().map_err(wrap)
}
