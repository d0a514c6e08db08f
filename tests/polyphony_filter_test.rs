//! End-to-end tests for polyphony filtering against a real directory.

#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use sedcure::polyphony::{FilterOptions, FsClipStore, filter_polyphony};
use tempfile::tempdir;

fn write_clip(dir: &Path, name: &str, polyphony: u32) -> PathBuf {
    let contents = format!(
        r#"{{"annotations": [{{
            "sandbox": {{"scaper": {{"polyphony_max": {polyphony}}}}},
            "duration": 10.0,
            "data": [
                {{"time": 0.0, "duration": 10.0,
                  "value": {{"label": "park", "role": "background",
                            "source_file": "/bank/bg/park/amb_{name}.wav"}}}},
                {{"time": 1.0, "duration": 2.0,
                  "value": {{"label": "Dog", "role": "foreground",
                            "source_file": "/bank/fg/Dog/bark_{name}.wav"}}}},
                {{"time": 2.0, "duration": 1.5,
                  "value": {{"label": "Cat", "role": "foreground",
                            "source_file": "/bank/fg/Cat/meow_{name}.wav"}}}}
            ]
        }}]}}"#
    );
    let jams = dir.join(format!("{name}.jams"));
    std::fs::write(&jams, contents).unwrap();
    std::fs::write(dir.join(format!("{name}.txt")), "1.0\t3.0\tDog\n").unwrap();
    std::fs::write(dir.join(format!("{name}.wav")), b"RIFF").unwrap();
    jams
}

fn options(max_polyphony: u32) -> FilterOptions {
    FilterOptions {
        max_polyphony,
        manifest: None,
        dry_run: false,
    }
}

#[test]
fn test_threshold_three_removes_clip_at_three() {
    let dir = tempdir().unwrap();
    write_clip(dir.path(), "busy", 3);
    write_clip(dir.path(), "calm", 1);

    let report = filter_polyphony(dir.path(), &options(3), &FsClipStore).unwrap();

    assert_eq!(report.kept, 1);
    assert_eq!(report.removed, 1);

    // Every file of the discarded clip is gone, audio and side files included.
    assert!(!dir.path().join("busy.jams").exists());
    assert!(!dir.path().join("busy.txt").exists());
    assert!(!dir.path().join("busy.wav").exists());

    assert!(dir.path().join("calm.jams").exists());
    assert!(dir.path().join("calm.txt").exists());
    assert!(dir.path().join("calm.wav").exists());
}

#[test]
fn test_threshold_two_keeps_single_event_clip() {
    let dir = tempdir().unwrap();
    write_clip(dir.path(), "busy", 2);
    write_clip(dir.path(), "calm", 1);

    let report = filter_polyphony(dir.path(), &options(2), &FsClipStore).unwrap();

    assert_eq!(report.kept, 1);
    assert_eq!(report.removed, 1);
    assert!(dir.path().join("calm.jams").exists());
    assert!(!dir.path().join("busy.jams").exists());
}

#[test]
fn test_manifest_records_kept_sources() {
    let dir = tempdir().unwrap();
    write_clip(dir.path(), "calm", 1);
    let manifest = dir.path().join("generated").join("final.tsv");

    let opts = FilterOptions {
        max_polyphony: 3,
        manifest: Some(manifest.clone()),
        dry_run: false,
    };
    filter_polyphony(dir.path(), &opts, &FsClipStore).unwrap();

    let contents = std::fs::read_to_string(&manifest).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines[0],
        "annotation_file\tbackground_source\tforeground_sources"
    );
    assert_eq!(
        lines[1],
        "calm.jams\tamb_calm.wav\tbark_calm.wav,meow_calm.wav"
    );
}

#[test]
fn test_dry_run_leaves_directory_untouched() {
    let dir = tempdir().unwrap();
    write_clip(dir.path(), "busy", 9);

    let opts = FilterOptions {
        max_polyphony: 2,
        manifest: None,
        dry_run: true,
    };
    let report = filter_polyphony(dir.path(), &opts, &FsClipStore).unwrap();

    assert_eq!(report.removed, 1);
    assert!(dir.path().join("busy.jams").exists());
    assert!(dir.path().join("busy.wav").exists());
}
