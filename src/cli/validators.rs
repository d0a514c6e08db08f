//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing.

/// Parse and validate a bounded float value.
///
/// # Arguments
///
/// * `s` - The string to parse
/// * `min` - Minimum allowed value (inclusive)
/// * `max` - Maximum allowed value (inclusive)
/// * `name` - Name of the parameter for error messages
pub fn parse_bounded_float(s: &str, min: f64, max: f64, name: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(min..=max).contains(&value) {
        return Err(format!(
            "{name} must be between {min} and {max}, got {value}"
        ));
    }

    Ok(value)
}

/// Parse and validate a minimum event duration (0.001 to 60 seconds).
pub fn parse_event_duration(s: &str) -> Result<f64, String> {
    parse_bounded_float(s, 0.001, 60.0, "minimum event duration")
}

/// Parse and validate a minimum event gap (0 to 60 seconds).
pub fn parse_event_gap(s: &str) -> Result<f64, String> {
    parse_bounded_float(s, 0.0, 60.0, "minimum gap between events")
}
