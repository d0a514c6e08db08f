//! Audio duration lookup for annotated clips.

use std::path::Path;

use crate::Error;

/// Duration of a WAV file in seconds, computed from its sample count and
/// sample rate.
///
/// # Errors
///
/// Returns [`Error::AudioOpen`] when the file is missing or not a readable
/// WAV file.
pub fn wav_duration(path: &Path) -> Result<f64, Error> {
    let reader = hound::WavReader::open(path).map_err(|e| Error::AudioOpen {
        path: path.to_path_buf(),
        source: e,
    })?;
    let spec = reader.spec();
    Ok(f64::from(reader.duration()) / f64::from(spec.sample_rate))
}
