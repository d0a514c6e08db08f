//! Per-class interval merging.

use tracing::debug;

use crate::annotation::EventInterval;
use crate::reconcile::Thresholds;

/// Round a time to millisecond precision.
pub(crate) fn round_ms(t: f64) -> f64 {
    (t * 1000.0).round() / 1000.0
}

/// Clamp every interval to the clip bounds and round to milliseconds.
///
/// Offsets are clamped to the clip duration only when the duration is
/// known; onsets are always clamped to zero. Clamping is a normalization,
/// not a fix, so it is not counted.
pub(crate) fn sanity_pass(events: &mut [EventInterval], duration: Option<f64>) {
    for event in events.iter_mut() {
        if let Some(length) = duration {
            if event.offset > length {
                event.offset = length;
            }
        }
        if event.onset < 0.0 {
            event.onset = 0.0;
        }
        event.onset = round_ms(event.onset);
        event.offset = round_ms(event.offset);
    }
}

/// Split an onset-sorted event list into per-label groups, in order of each
/// label's first appearance. Each group stays onset-sorted.
pub(crate) fn group_by_label(events: Vec<EventInterval>) -> Vec<(String, Vec<EventInterval>)> {
    let mut groups: Vec<(String, Vec<EventInterval>)> = Vec::new();
    for event in events {
        match groups.iter_mut().find(|(label, _)| *label == event.label) {
            Some((_, group)) => group.push(event),
            None => groups.push((event.label.clone(), vec![event])),
        }
    }
    groups
}

/// Merge one class's onset-sorted intervals into a clean sequence.
///
/// Walks the intervals left to right keeping an accumulating reference
/// interval. A reference shorter than the minimum duration is extended on
/// the offset side; when the extension would pass the end of the clip, the
/// reference and every remaining interval of the class are dropped — they
/// are onset-sorted and already too short, so none of them can recover.
/// Subsequent intervals are folded into the reference while they are fully
/// contained, start within the minimum gap of the reference's offset, or
/// start within the composite onset window of the reference's onset.
///
/// Returns the merged intervals and the number of fixes applied
/// (extensions, merges and drops).
pub(crate) fn merge_class(
    label: &str,
    intervals: &[EventInterval],
    duration: Option<f64>,
    thresholds: &Thresholds,
) -> (Vec<EventInterval>, usize) {
    let mut merged = Vec::with_capacity(intervals.len());
    let mut fixes = 0;

    let mut i = 0;
    while i < intervals.len() {
        let onset = intervals[i].onset;
        let mut offset = intervals[i].offset;

        if offset - onset < thresholds.min_event_duration {
            let extended = onset + thresholds.min_event_duration;
            if duration.is_some_and(|length| extended > length) {
                // Too short, too near the end, and onset-sorted: everything
                // after this point in the class is in the same position.
                debug!(
                    "dropping {} too-short {label} event(s) at the end of the clip",
                    intervals.len() - i
                );
                fixes += intervals.len() - i;
                break;
            }
            debug!("extending short {label} event at {onset}");
            offset = extended;
            fixes += 1;
        }

        let mut j = i + 1;
        while j < intervals.len() {
            let next = &intervals[j];
            if next.offset <= offset {
                debug!("dropping {label} event contained in [{onset}, {offset}]");
                fixes += 1;
            } else if next.onset - offset < thresholds.min_gap_between_events {
                debug!("merging {label} events separated by a short gap");
                offset = next.offset;
                fixes += 1;
            } else if next.onset - onset < thresholds.onset_window() {
                debug!("merging {label} events with close onsets");
                offset = next.offset;
                fixes += 1;
            } else {
                break;
            }
            j += 1;
        }

        merged.push(EventInterval::new(onset, offset, label));
        i = j;
    }

    (merged, fixes)
}
