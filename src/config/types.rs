//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_POLYPHONY, DEFAULT_MIN_EVENT_DURATION, DEFAULT_MIN_GAP_BETWEEN_EVENTS,
};
use crate::reconcile::Thresholds;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Default curation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Minimum duration of a sound event in seconds.
    pub min_event_duration: f64,

    /// Minimum silence between two same-class events in seconds.
    pub min_gap_between_events: f64,

    /// Polyphony budget: clips at or above this are discarded.
    pub max_polyphony: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            min_event_duration: DEFAULT_MIN_EVENT_DURATION,
            min_gap_between_events: DEFAULT_MIN_GAP_BETWEEN_EVENTS,
            max_polyphony: DEFAULT_MAX_POLYPHONY,
        }
    }
}

impl DefaultsConfig {
    /// Reconciliation thresholds carried by the configuration.
    pub const fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.min_event_duration, self.min_gap_between_events)
    }
}
