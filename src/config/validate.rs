//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate a configuration, rejecting values the pipeline cannot work
/// with.
pub fn validate_config(config: &Config) -> Result<()> {
    let defaults = &config.defaults;

    if !defaults.min_event_duration.is_finite() || defaults.min_event_duration <= 0.0 {
        return Err(Error::ConfigValidation {
            message: format!(
                "min_event_duration must be a positive number, got {}",
                defaults.min_event_duration
            ),
        });
    }

    if !defaults.min_gap_between_events.is_finite() || defaults.min_gap_between_events < 0.0 {
        return Err(Error::ConfigValidation {
            message: format!(
                "min_gap_between_events must be zero or positive, got {}",
                defaults.min_gap_between_events
            ),
        });
    }

    if defaults.max_polyphony == 0 {
        return Err(Error::ConfigValidation {
            message: "max_polyphony must be at least 1 (a budget of 0 discards every clip)"
                .to_string(),
        });
    }

    Ok(())
}
