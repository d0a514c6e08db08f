//! Annotation loading.
//!
//! Two on-disk formats describe the events of a clip: a flat three-column
//! tab-separated file (`onset`, `offset`, `event_label`) and a structured
//! JAMS document carrying per-event roles and provenance. The loader
//! produces a uniform [`ClipRecord`] from either.

mod audio;
mod flat;
mod jams;
mod types;

use std::path::Path;

use crate::Error;
use crate::constants::annotation_extensions;

pub use audio::wav_duration;
pub use flat::load_flat;
pub use jams::{JamsClip, load_jams, read_jams};
pub use types::{ClipRecord, EventInterval, Role, SourceEvent};

/// Load an annotation file, dispatching on its extension.
///
/// `include_background` opts in to background events; only the structured
/// format records roles, so requesting it on a flat file fails with
/// [`Error::BackgroundUnavailable`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedAnnotationFormat`] for extensions no loader
/// understands, plus the per-format parse errors.
pub fn load_annotation(path: &Path, include_background: bool) -> Result<ClipRecord, Error> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    match extension.as_deref() {
        Some(annotation_extensions::FLAT) => {
            if include_background {
                return Err(Error::BackgroundUnavailable {
                    path: path.to_path_buf(),
                });
            }
            load_flat(path)
        }
        Some(annotation_extensions::JAMS) => load_jams(path, include_background),
        _ => Err(Error::UnsupportedAnnotationFormat {
            path: path.to_path_buf(),
        }),
    }
}
