//! Structured (JAMS) annotation file parsing.
//!
//! Soundscape generators write one JAMS document per clip: a JSON file
//! whose first annotation lists timed observations tagged with a role
//! (`foreground`/`background`), a label and the source audio file the event
//! was cut from, plus generator metadata such as the clip's maximum
//! polyphony. Only the fields sedcure consumes are deserialized; everything
//! else in the document is ignored.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::Error;
use crate::annotation::flat::clip_id_for;
use crate::annotation::{ClipRecord, Role, SourceEvent};

#[derive(Debug, Deserialize)]
struct JamsDocument {
    #[serde(default)]
    annotations: Vec<JamsAnnotation>,
}

#[derive(Debug, Deserialize)]
struct JamsAnnotation {
    #[serde(default)]
    data: Vec<JamsObservation>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    sandbox: JamsSandbox,
}

#[derive(Debug, Default, Deserialize)]
struct JamsSandbox {
    #[serde(default)]
    scaper: Option<ScaperSandbox>,
}

#[derive(Debug, Deserialize)]
struct ScaperSandbox {
    #[serde(default)]
    polyphony_max: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct JamsObservation {
    time: f64,
    duration: f64,
    value: ObservationValue,
}

#[derive(Debug, Deserialize)]
struct ObservationValue {
    label: String,
    role: String,
    #[serde(default)]
    source_file: Option<String>,
}

/// Everything sedcure reads from one structured annotation file.
#[derive(Debug, Clone)]
pub struct JamsClip {
    /// Clip identifier (annotation file stem).
    pub clip_id: String,
    /// Clip duration declared by the annotation, when present.
    pub duration: Option<f64>,
    /// Maximum number of simultaneous events declared by the generator.
    pub polyphony_max: Option<u32>,
    /// All observations with a recognized role, ordered by onset.
    pub events: Vec<SourceEvent>,
}

/// Read a structured annotation file in full.
///
/// Observations whose role is neither `foreground` nor `background` are
/// skipped with a debug log.
///
/// # Errors
///
/// Returns [`Error::JamsRead`] / [`Error::JamsParse`] on I/O or JSON
/// failures and [`Error::NoAnnotationRecords`] when the document has no
/// annotation entry at all.
pub fn read_jams(path: &Path) -> Result<JamsClip, Error> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::JamsRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let document: JamsDocument =
        serde_json::from_str(&contents).map_err(|e| Error::JamsParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let annotation = document
        .annotations
        .into_iter()
        .next()
        .ok_or_else(|| Error::NoAnnotationRecords {
            path: path.to_path_buf(),
        })?;

    let mut events = Vec::with_capacity(annotation.data.len());
    for obs in annotation.data {
        let Ok(role) = obs.value.role.parse::<Role>() else {
            debug!(
                "skipping observation with unknown role '{}' in {}",
                obs.value.role,
                path.display()
            );
            continue;
        };
        events.push(SourceEvent {
            role,
            onset: obs.time,
            offset: obs.time + obs.duration,
            label: obs.value.label,
            source_file: obs.value.source_file,
        });
    }
    events.sort_by(|a, b| a.onset.total_cmp(&b.onset));

    Ok(JamsClip {
        clip_id: clip_id_for(path),
        duration: annotation.duration,
        polyphony_max: annotation.sandbox.scaper.and_then(|s| s.polyphony_max),
        events,
    })
}

/// Load a structured annotation file into a [`ClipRecord`].
///
/// Foreground events are always extracted; background events only when
/// `include_background` is set.
pub fn load_jams(path: &Path, include_background: bool) -> Result<ClipRecord, Error> {
    let clip = read_jams(path)?;
    Ok(clip.into_record(include_background))
}

impl JamsClip {
    /// Flatten into a [`ClipRecord`], keeping foreground events and,
    /// optionally, background events.
    pub fn into_record(self, include_background: bool) -> ClipRecord {
        let events = self
            .events
            .into_iter()
            .filter(|ev| ev.role == Role::Foreground || (include_background && ev.role == Role::Background))
            .map(|ev| crate::annotation::EventInterval::new(ev.onset, ev.offset, ev.label))
            .collect();

        ClipRecord {
            clip_id: self.clip_id,
            duration: self.duration,
            events,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_jams(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".jams").unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const SAMPLE: &str = r#"{
        "annotations": [{
            "namespace": "scaper",
            "duration": 10.0,
            "sandbox": {"scaper": {"polyphony_max": 2}},
            "data": [
                {"time": 0.0, "duration": 10.0,
                 "value": {"label": "park", "role": "background",
                           "source_file": "/bank/background/park/amb1.wav"}},
                {"time": 2.5, "duration": 1.0,
                 "value": {"label": "Dog", "role": "foreground",
                           "source_file": "/bank/foreground/Dog/bark.wav"}},
                {"time": 6.0, "duration": 0.5,
                 "value": {"label": "Cat", "role": "foreground",
                           "source_file": "/bank/foreground/Cat/meow.wav"}}
            ]
        }]
    }"#;

    #[test]
    fn test_read_jams_full() {
        let file = write_jams(SAMPLE);
        let clip = read_jams(file.path()).unwrap();
        assert_eq!(clip.duration, Some(10.0));
        assert_eq!(clip.polyphony_max, Some(2));
        assert_eq!(clip.events.len(), 3);
        assert_eq!(clip.events[0].role, Role::Background);
        assert_eq!(clip.events[1].label, "Dog");
        assert_eq!(clip.events[1].offset, 3.5);
    }

    #[test]
    fn test_load_jams_foreground_only() {
        let file = write_jams(SAMPLE);
        let record = load_jams(file.path(), false).unwrap();
        assert_eq!(record.events.len(), 2);
        assert_eq!(record.events[0].label, "Dog");
        assert_eq!(record.events[1].label, "Cat");
    }

    #[test]
    fn test_load_jams_with_background() {
        let file = write_jams(SAMPLE);
        let record = load_jams(file.path(), true).unwrap();
        assert_eq!(record.events.len(), 3);
        assert_eq!(record.events[0].label, "park");
        assert_eq!(record.events[0].offset, 10.0);
    }

    #[test]
    fn test_read_jams_missing_polyphony() {
        let file = write_jams(
            r#"{"annotations": [{"duration": 5.0, "data": []}]}"#,
        );
        let clip = read_jams(file.path()).unwrap();
        assert_eq!(clip.polyphony_max, None);
        assert!(clip.events.is_empty());
    }

    #[test]
    fn test_read_jams_unknown_role_skipped() {
        let file = write_jams(
            r#"{"annotations": [{"data": [
                {"time": 0.0, "duration": 1.0,
                 "value": {"label": "Dog", "role": "narration"}}
            ]}]}"#,
        );
        let clip = read_jams(file.path()).unwrap();
        assert!(clip.events.is_empty());
    }

    #[test]
    fn test_read_jams_no_annotations() {
        let file = write_jams(r#"{"annotations": []}"#);
        let result = read_jams(file.path());
        assert!(matches!(result, Err(Error::NoAnnotationRecords { .. })));
    }

    #[test]
    fn test_read_jams_invalid_json() {
        let file = write_jams("not json {");
        let result = read_jams(file.path());
        assert!(matches!(result, Err(Error::JamsParse { .. })));
    }
}
