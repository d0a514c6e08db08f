//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "sedcure";

/// Default minimum duration of a sound event in seconds.
///
/// Events shorter than this are extended on the offset side during
/// reconciliation, matching the annotation conventions of the real
/// recordings the synthetic data imitates.
pub const DEFAULT_MIN_EVENT_DURATION: f64 = 0.250;

/// Default minimum silence between two same-class events in seconds.
///
/// Consecutive events of one class separated by less than this are merged
/// into a single event.
pub const DEFAULT_MIN_GAP_BETWEEN_EVENTS: f64 = 0.150;

/// Default polyphony budget.
///
/// Clips whose declared maximum polyphony reaches this value are discarded
/// by the polyphony filter.
pub const DEFAULT_MAX_POLYPHONY: u32 = 3;

/// Decimal places for onset/offset formatting in output tables.
pub const TIME_DECIMAL_PLACES: usize = 3;

/// Annotation file extensions by format.
pub mod annotation_extensions {
    /// Flat tab-separated annotation extension.
    pub const FLAT: &str = "txt";
    /// Structured (JAMS) annotation extension.
    pub const JAMS: &str = "jams";
    /// Audio file extension associated with annotation files.
    pub const AUDIO: &str = "wav";
}

/// Consolidated table format constants.
pub mod table {
    /// Header line of the consolidated annotation table.
    pub const HEADER: &str = "filename\tonset\toffset\tevent_label";
}

/// Kept-clip manifest format constants.
pub mod manifest {
    /// Header line of the kept-clip manifest.
    pub const HEADER: &str = "annotation_file\tbackground_source\tforeground_sources";
    /// Separator between foreground source entries.
    pub const SOURCE_SEPARATOR: &str = ",";
}

/// Event role labels as they appear in structured annotation files.
pub mod roles {
    /// Foreground (target) event role.
    pub const FOREGROUND: &str = "foreground";
    /// Background (ambient) event role.
    pub const BACKGROUND: &str = "background";
}
