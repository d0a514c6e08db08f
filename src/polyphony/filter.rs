//! Polyphony-based clip retention.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::annotation::{JamsClip, Role, read_jams};
use crate::constants::{annotation_extensions, manifest};
use crate::error::{Error, Result};
use crate::polyphony::ClipStore;

/// Options for a polyphony filtering pass.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    /// Clips whose declared maximum polyphony reaches this value are
    /// discarded.
    pub max_polyphony: u32,
    /// Optional path for the kept-clip manifest.
    pub manifest: Option<PathBuf>,
    /// Plan only: log what would be removed without touching the store.
    pub dry_run: bool,
}

/// Outcome of a polyphony filtering pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterReport {
    /// Clips kept.
    pub kept: usize,
    /// Clips removed (or, in a dry run, slated for removal).
    pub removed: usize,
    /// Annotation files that could not be read and were left untouched.
    pub skipped: usize,
}

/// One kept clip's manifest row.
#[derive(Debug, Clone)]
struct KeptClip {
    annotation_file: String,
    background_source: String,
    foreground_sources: Vec<String>,
}

/// Filter a directory of structured annotations by declared polyphony.
///
/// A clip survives iff its declared maximum polyphony is strictly below
/// `max_polyphony`; a clip at or above the budget is discarded, and every
/// file sharing the clip's base name is removed through `store`. A missing
/// polyphony declaration discards the clip as well — the budget cannot be
/// verified, so the clip does not get the benefit of the doubt. Unreadable
/// annotation files are logged and left on disk.
///
/// # Errors
///
/// Returns an error when the directory cannot be scanned, a removal fails,
/// or the manifest cannot be written.
pub fn filter_polyphony(
    folder: &Path,
    options: &FilterOptions,
    store: &dyn ClipStore,
) -> Result<FilterReport> {
    let annotations = collect_structured_annotations(folder)?;
    if annotations.is_empty() {
        return Err(Error::NoAnnotationFiles {
            path: folder.to_path_buf(),
        });
    }

    let mut report = FilterReport::default();
    let mut kept_rows = Vec::new();
    let mut to_remove = Vec::new();

    for annotation in &annotations {
        let clip = match read_jams(annotation) {
            Ok(clip) => clip,
            Err(e) => {
                warn!("skipping unreadable annotation {}: {e}", annotation.display());
                report.skipped += 1;
                continue;
            }
        };

        match clip.polyphony_max {
            Some(polyphony) if polyphony < options.max_polyphony => {
                kept_rows.push(manifest_row(annotation, &clip));
                report.kept += 1;
            }
            Some(polyphony) => {
                info!(
                    "discarding {}: polyphony {polyphony} >= budget {}",
                    annotation.display(),
                    options.max_polyphony
                );
                to_remove.push(annotation.clone());
            }
            None => {
                warn!(
                    "discarding {}: no declared maximum polyphony",
                    annotation.display()
                );
                to_remove.push(annotation.clone());
            }
        }
    }

    info!(
        "{} clip(s) within polyphony budget {}, removing {} clip(s)",
        report.kept,
        options.max_polyphony,
        to_remove.len()
    );

    for annotation in &to_remove {
        if options.dry_run {
            let files = store.files_for_clip(annotation)?;
            for file in files {
                info!("dry run: would remove {}", file.display());
            }
        } else {
            warn!("removing clip files for {}", annotation.display());
            store.remove_clip(annotation)?;
        }
        report.removed += 1;
    }

    if let Some(manifest_path) = &options.manifest {
        write_manifest(manifest_path, &kept_rows)?;
    }

    Ok(report)
}

/// All `.jams` files in a directory, sorted by name.
fn collect_structured_annotations(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(annotation_extensions::JAMS))
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn manifest_row(annotation: &Path, clip: &JamsClip) -> KeptClip {
    let background_source = clip
        .events
        .iter()
        .find(|ev| ev.role == Role::Background)
        .and_then(|ev| ev.source_file.as_deref())
        .map(basename)
        .unwrap_or_default();

    let foreground_sources = clip
        .events
        .iter()
        .filter(|ev| ev.role == Role::Foreground)
        .filter_map(|ev| ev.source_file.as_deref())
        .map(basename)
        .collect();

    KeptClip {
        annotation_file: basename(&annotation.to_string_lossy()),
        background_source,
        foreground_sources,
    }
}

fn basename(path: &str) -> String {
    Path::new(path).file_name().map_or_else(
        || path.to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

fn write_manifest(path: &Path, rows: &[KeptClip]) -> Result<()> {
    let wrap = |e: std::io::Error| Error::ManifestWrite {
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
    writeln!(writer, "{}", manifest::HEADER).map_err(wrap)?;
    for row in rows {
        writeln!(
            writer,
            "{}\t{}\t{}",
            row.annotation_file,
            row.background_source,
            row.foreground_sources.join(manifest::SOURCE_SEPARATOR)
        )
        .map_err(wrap)?;
    }
    writer.flush().map_err(wrap)
}
