//! Per-clip processing and batch drivers.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::annotation::{load_annotation, load_jams, wav_duration};
use crate::error::{Error, Result};
use crate::output::{self, TableRow, progress};
use crate::pipeline::coordinator::{
    collect_annotation_files, collect_jams_inputs, output_clip_path, wav_path_for,
};
use crate::reconcile::{Thresholds, reconcile};

/// Options for cleaning a directory of annotation files.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Directory holding the annotation files.
    pub folder: PathBuf,
    /// Directory holding the associated audio (default: `folder`).
    pub wav_dir: Option<PathBuf>,
    /// Directory receiving per-clip cleaned annotation files.
    pub output_dir: Option<PathBuf>,
    /// Path of the consolidated annotation table.
    pub output_tsv: Option<PathBuf>,
    /// Reconciliation thresholds.
    pub thresholds: Thresholds,
    /// Extract background events as labels (structured sources only).
    pub include_background: bool,
    /// Show a progress bar.
    pub progress: bool,
}

/// Outcome of a batch cleaning pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanReport {
    /// Annotation files cleaned.
    pub files_processed: usize,
    /// Annotation files skipped because they could not be loaded.
    pub files_skipped: usize,
    /// Corrective extensions, merges and drops applied across all clips.
    pub fix_count: usize,
}

/// Clean every annotation file of a directory.
///
/// Each clip is loaded, reconciled against its audio duration and written
/// back; a file that fails to load is logged and skipped without aborting
/// the batch. The consolidated table is sorted by `(filename, onset)`.
pub fn clean_directory(options: &CleanOptions) -> Result<CleanReport> {
    let wav_dir = options.wav_dir.as_deref().unwrap_or(&options.folder);
    let files = collect_annotation_files(&options.folder, options.include_background)?;
    if files.is_empty() {
        return Err(Error::NoAnnotationFiles {
            path: options.folder.clone(),
        });
    }

    if let Some(output_dir) = &options.output_dir {
        std::fs::create_dir_all(output_dir).map_err(|e| Error::OutputDirCreateFailed {
            path: output_dir.clone(),
            source: e,
        })?;
    }

    info!(
        "Correcting {} annotation file(s): negative durations removed, events shorter than {:.3}s extended",
        files.len(),
        options.thresholds.min_event_duration
    );

    let file_progress = progress::create_file_progress(files.len(), options.progress);

    let mut report = CleanReport::default();
    let mut rows: Vec<TableRow> = Vec::new();

    for file in &files {
        match process_clip(file, wav_dir, options) {
            Ok(outcome) => {
                report.files_processed += 1;
                report.fix_count += outcome.fix_count;
                rows.extend(outcome.rows);
            }
            Err(e) => {
                error!("skipping {}: {e}", file.display());
                report.files_skipped += 1;
            }
        }
        progress::inc_progress(file_progress.as_ref());
    }

    progress::finish_progress(file_progress, "Complete");

    if let Some(output_tsv) = &options.output_tsv {
        output::sort_rows(&mut rows);
        output::write_table(output_tsv, &rows)?;
    }

    Ok(report)
}

/// Result of cleaning one clip.
struct ClipOutcome {
    rows: Vec<TableRow>,
    fix_count: usize,
}

fn process_clip(file: &Path, wav_dir: &Path, options: &CleanOptions) -> Result<ClipOutcome> {
    debug!("processing {}", file.display());
    let record = load_annotation(file, options.include_background)?;

    let wav_path = wav_path_for(wav_dir, &record.clip_id);
    let duration = match wav_duration(&wav_path) {
        Ok(duration) => Some(duration),
        Err(e) => {
            debug!(
                "no audio duration for {}: {e}; falling back to declared duration",
                record.clip_id
            );
            record.duration
        }
    };

    let clip_id = record.clip_id;
    let result = reconcile(record.events, duration, &options.thresholds);

    if let Some(output_dir) = &options.output_dir {
        output::write_clip_annotation(&output_clip_path(output_dir, &clip_id), &result.events)?;
    }

    let filename = format!("{clip_id}.wav");
    let rows = result
        .events
        .into_iter()
        .map(|event| TableRow::new(filename.clone(), event))
        .collect();

    Ok(ClipOutcome {
        rows,
        fix_count: result.fix_count,
    })
}

/// Options for building a consolidated table straight from structured
/// annotations.
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Structured annotation files or directories containing them.
    pub inputs: Vec<PathBuf>,
    /// Path of the consolidated annotation table.
    pub output: PathBuf,
    /// Reconcile each clip before tabulating (clip duration taken from the
    /// annotation's own declaration).
    pub post_process: bool,
    /// Reconciliation thresholds.
    pub thresholds: Thresholds,
    /// Extract background events as labels.
    pub include_background: bool,
}

/// Build a consolidated table from structured annotation files.
///
/// The generator writes one annotation per clip; this gathers them into
/// the single table downstream training consumes, optionally running the
/// same reconciliation pass as directory cleaning.
pub fn table_from_jams(options: &TableOptions) -> Result<CleanReport> {
    let files = collect_jams_inputs(&options.inputs)?;
    if files.is_empty() {
        let shown = options
            .inputs
            .first()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("."));
        return Err(Error::NoAnnotationFiles { path: shown });
    }

    let mut report = CleanReport::default();
    let mut rows: Vec<TableRow> = Vec::new();

    for file in &files {
        let record = match load_jams(file, options.include_background) {
            Ok(record) => record,
            Err(e) => {
                error!("skipping {}: {e}", file.display());
                report.files_skipped += 1;
                continue;
            }
        };

        let filename = format!("{}.wav", record.clip_id);
        let events = if options.post_process {
            let result = reconcile(record.events, record.duration, &options.thresholds);
            report.fix_count += result.fix_count;
            result.events
        } else {
            record.events
        };

        rows.extend(
            events
                .into_iter()
                .map(|event| TableRow::new(filename.clone(), event)),
        );
        report.files_processed += 1;
    }

    output::sort_rows(&mut rows);
    output::write_table(&options.output, &rows)?;

    Ok(report)
}
