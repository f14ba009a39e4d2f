//! Sparse event list from the dense per-frame event sequences.

use crate::models::{PossessionEvent, TeamEvent};

/// Collect pass and interception frames into one list, ascending by frame.
///
/// Both inputs are expected to be aligned detector outputs. If a frame carries
/// both kinds the pass is listed first.
pub fn collect_events(passes: &[TeamEvent], interceptions: &[TeamEvent]) -> Vec<PossessionEvent> {
    let frame_count = passes.len().max(interceptions.len());
    let mut events = Vec::new();

    for frame in 0..frame_count {
        if let Some(team) = passes.get(frame).copied().flatten() {
            events.push(PossessionEvent::pass(frame, team));
        }
        if let Some(team) = interceptions.get(frame).copied().flatten() {
            events.push(PossessionEvent::interception(frame, team));
        }
    }

    events
}
