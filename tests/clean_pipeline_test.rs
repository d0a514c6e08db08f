//! End-to-end tests for the directory cleaning pipeline.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use sedcure::pipeline::{CleanOptions, clean_directory};
use sedcure::reconcile::Thresholds;
use tempfile::tempdir;

fn write_wav(path: &Path, seconds: f64) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 1000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let samples = (seconds * 1000.0).round() as usize;
    for _ in 0..samples {
        writer.write_sample(0_i16).unwrap();
    }
    writer.finalize().unwrap();
}

/// Two 10-second clips with the defects the cleaner exists for: a split
/// Cat event (0.1s pause), a split Speech event (0.03s pause), a Dishes
/// event fully contained in another, and a Frying event running past the
/// end of the audio.
fn write_material(dir: &Path) {
    std::fs::write(
        dir.join("5.txt"),
        "0.008\t3.200\tCat\n\
         3.300\t5.546\tCat\n\
         4.969\t9.609\tSpeech\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("7.txt"),
        "2.183\t2.488\tDishes\n\
         2.406\t2.750\tSpeech\n\
         2.780\t5.200\tSpeech\n\
         3.099\t3.360\tDishes\n\
         3.406\t6.200\tCat\n\
         3.684\t5.624\tDishes\n\
         3.700\t5.000\tDishes\n\
         6.406\t10.300\tFrying\n",
    )
    .unwrap();
    write_wav(&dir.join("5.wav"), 10.0);
    write_wav(&dir.join("7.wav"), 10.0);
}

const EXPECTED_TABLE: &str = "\
filename\tonset\toffset\tevent_label
5.wav\t0.008\t5.546\tCat
5.wav\t4.969\t9.609\tSpeech
7.wav\t2.183\t2.488\tDishes
7.wav\t2.406\t5.200\tSpeech
7.wav\t3.099\t3.360\tDishes
7.wav\t3.406\t6.200\tCat
7.wav\t3.684\t5.624\tDishes
7.wav\t6.406\t10.000\tFrying
";

fn clean_options(folder: &Path, wav_dir: &Path, generated: &Path) -> CleanOptions {
    CleanOptions {
        folder: folder.to_path_buf(),
        wav_dir: Some(wav_dir.to_path_buf()),
        output_dir: Some(generated.join("post_processing")),
        output_tsv: Some(generated.join("post.tsv")),
        thresholds: Thresholds::default(),
        include_background: false,
        progress: false,
    }
}

#[test]
fn test_cleaning_fixture_matches_expected_table() {
    let dir = tempdir().unwrap();
    let material = dir.path().join("material");
    let generated = dir.path().join("generated");
    std::fs::create_dir_all(&material).unwrap();
    write_material(&material);

    let options = clean_options(&material, &material, &generated);
    let report = clean_directory(&options).unwrap();

    assert_eq!(report.files_processed, 2);
    assert_eq!(report.files_skipped, 0);
    assert_eq!(report.fix_count, 3);

    let table = std::fs::read_to_string(generated.join("post.tsv")).unwrap();
    assert_eq!(table, EXPECTED_TABLE);
}

#[test]
fn test_cleaning_writes_per_clip_files() {
    let dir = tempdir().unwrap();
    let material = dir.path().join("material");
    let generated = dir.path().join("generated");
    std::fs::create_dir_all(&material).unwrap();
    write_material(&material);

    clean_directory(&clean_options(&material, &material, &generated)).unwrap();

    let checked = generated.join("post_processing");
    let five = std::fs::read_to_string(checked.join("5.txt")).unwrap();
    assert_eq!(five, "0.008\t5.546\tCat\n4.969\t9.609\tSpeech\n");

    let seven = std::fs::read_to_string(checked.join("7.txt")).unwrap();
    assert_eq!(seven.lines().count(), 6);
    assert!(seven.contains("6.406\t10.000\tFrying"));
}

#[test]
fn test_cleaning_is_idempotent_on_cleaned_output() {
    let dir = tempdir().unwrap();
    let material = dir.path().join("material");
    let first_gen = dir.path().join("first");
    let second_gen = dir.path().join("second");
    std::fs::create_dir_all(&material).unwrap();
    write_material(&material);

    clean_directory(&clean_options(&material, &material, &first_gen)).unwrap();

    // Re-clean the cleaned annotations against the same audio.
    let report = clean_directory(&clean_options(
        &first_gen.join("post_processing"),
        &material,
        &second_gen,
    ))
    .unwrap();

    assert_eq!(report.fix_count, 0);
    let first = std::fs::read_to_string(first_gen.join("post.tsv")).unwrap();
    let second = std::fs::read_to_string(second_gen.join("post.tsv")).unwrap();
    assert_eq!(first, second);
}
