//! Batch coordination for annotation processing.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::constants::annotation_extensions;
use crate::error::Result;

/// Collect the annotation files of a directory, sorted by name.
///
/// Background extraction needs role data, so with `include_background` only
/// structured `.jams` files are considered. Otherwise flat `.txt` files are
/// preferred, falling back to `.jams` when a directory carries none — the
/// generator does not always write both.
pub fn collect_annotation_files(folder: &Path, include_background: bool) -> Result<Vec<PathBuf>> {
    if include_background {
        return files_with_extension(folder, annotation_extensions::JAMS);
    }

    let flat = files_with_extension(folder, annotation_extensions::FLAT)?;
    if flat.is_empty() {
        return files_with_extension(folder, annotation_extensions::JAMS);
    }
    Ok(flat)
}

/// Collect structured annotation files from a mix of file and directory
/// paths, sorted by name.
pub fn collect_jams_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in inputs {
        if path.is_file() {
            if has_extension(path, annotation_extensions::JAMS) {
                files.push(path.clone());
            } else {
                warn!("skipping non-annotation input: {}", path.display());
            }
        } else if path.is_dir() {
            files.extend(files_with_extension(path, annotation_extensions::JAMS)?);
        } else {
            warn!("skipping non-existent path: {}", path.display());
        }
    }
    files.sort();
    Ok(files)
}

/// Path of the audio file associated with a clip.
pub fn wav_path_for(wav_dir: &Path, clip_id: &str) -> PathBuf {
    wav_dir.join(format!("{clip_id}.{}", annotation_extensions::AUDIO))
}

/// Path of a clip's cleaned annotation file inside an output directory.
pub fn output_clip_path(output_dir: &Path, clip_id: &str) -> PathBuf {
    output_dir.join(format!("{clip_id}.{}", annotation_extensions::FLAT))
}

fn files_with_extension(folder: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
