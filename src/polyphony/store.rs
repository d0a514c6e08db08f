//! Clip file storage capability.
//!
//! The polyphony filter removes whole clips — audio, annotations and any
//! side files sharing the clip's base name. That destructive side effect
//! lives behind [`ClipStore`] so the decision logic stays testable without
//! touching a real filesystem.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Capability to enumerate and remove the files belonging to a clip.
///
/// A clip is addressed by its annotation file path; its files are all
/// entries in the same directory sharing the annotation's stem.
pub trait ClipStore {
    /// List every file belonging to the clip.
    fn files_for_clip(&self, annotation: &Path) -> Result<Vec<PathBuf>>;

    /// Remove every file belonging to the clip, returning how many were
    /// removed.
    fn remove_clip(&self, annotation: &Path) -> Result<usize>;
}

/// Filesystem-backed clip store.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsClipStore;

impl ClipStore for FsClipStore {
    fn files_for_clip(&self, annotation: &Path) -> Result<Vec<PathBuf>> {
        let parent = annotation.parent().unwrap_or_else(|| Path::new("."));
        let stem = annotation.file_stem().map(std::ffi::OsStr::to_os_string);

        let entries = std::fs::read_dir(parent).map_err(|e| Error::ClipList {
            path: annotation.to_path_buf(),
            source: e,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::ClipList {
                path: annotation.to_path_buf(),
                source: e,
            })?;
            let path = entry.path();
            if path.is_file() && path.file_stem().map(std::ffi::OsStr::to_os_string) == stem {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn remove_clip(&self, annotation: &Path) -> Result<usize> {
        let files = self.files_for_clip(annotation)?;
        for file in &files {
            debug!("removing {}", file.display());
            std::fs::remove_file(file).map_err(|e| Error::ClipRemove {
                path: file.clone(),
                source: e,
            })?;
        }
        Ok(files.len())
    }
}
