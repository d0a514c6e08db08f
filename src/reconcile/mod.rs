//! Interval reconciliation.
//!
//! Turns the raw, possibly inconsistent event list of one clip into a clean
//! annotation: times clamped to the clip bounds, events shorter than the
//! minimum duration extended, and same-class events that overlap or sit too
//! close together merged into one. The pass rebuilds a fresh interval list
//! per class instead of editing in place, so no index bookkeeping survives
//! across merges.

mod merge;

use crate::annotation::EventInterval;
use crate::constants::{DEFAULT_MIN_EVENT_DURATION, DEFAULT_MIN_GAP_BETWEEN_EVENTS};

/// Duration and spacing thresholds driving reconciliation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Minimum duration of a surviving event in seconds.
    pub min_event_duration: f64,
    /// Minimum silence between two same-class events in seconds.
    pub min_gap_between_events: f64,
}

impl Thresholds {
    /// Create thresholds from explicit values.
    pub const fn new(min_event_duration: f64, min_gap_between_events: f64) -> Self {
        Self {
            min_event_duration,
            min_gap_between_events,
        }
    }

    /// Composite onset window: two same-class events whose onsets are closer
    /// than this are merged even when the plain gap test does not trigger.
    pub fn onset_window(&self) -> f64 {
        self.min_event_duration + self.min_gap_between_events
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_EVENT_DURATION, DEFAULT_MIN_GAP_BETWEEN_EVENTS)
    }
}

/// Outcome of reconciling one clip.
#[derive(Debug, Clone)]
pub struct ReconcileResult {
    /// Cleaned events, sorted by onset.
    pub events: Vec<EventInterval>,
    /// Number of corrective extensions, merges and drops applied.
    pub fix_count: usize,
}

/// Reconcile the raw event list of one clip.
///
/// `duration` is the clip length in seconds when known; without it, offset
/// clamping and the cannot-extend drop policy are skipped. Each label class
/// is processed independently and the results are concatenated and
/// re-sorted by onset.
pub fn reconcile(
    events: Vec<EventInterval>,
    duration: Option<f64>,
    thresholds: &Thresholds,
) -> ReconcileResult {
    let mut events = events;
    merge::sanity_pass(&mut events, duration);
    events.sort_by(|a, b| a.onset.total_cmp(&b.onset));

    let mut out = Vec::with_capacity(events.len());
    let mut fix_count = 0;
    for (label, group) in merge::group_by_label(events) {
        let (merged, fixes) = merge::merge_class(&label, &group, duration, thresholds);
        fix_count += fixes;
        out.extend(merged);
    }

    out.sort_by(|a, b| {
        a.onset
            .total_cmp(&b.onset)
            .then_with(|| a.label.cmp(&b.label))
    });

    ReconcileResult {
        events: out,
        fix_count,
    }
}
