//! # Pass Detector
//!
//! Flags frames where ball control moves to a different player of the same
//! team.
//!
//! ## Algorithm
//! 1. Before evaluating frame `f`, remember `holder[f-1]` (and `f-1`) if set.
//!    Only the immediately preceding frame is inspected; across a gap the
//!    memory simply keeps the last holder seen before it.
//! 2. If the remembered holder and `holder[f]` are both set and differ,
//!    look up the remembered holder's team at the remembered frame and the
//!    current holder's team at `f`.
//! 3. Both known and equal: pass for that team at `f`.

use super::alignment::ensure_aligned;
use crate::error::Result;
use crate::models::{FrameAssignment, Holder, TeamEvent, TrackId};
use tracing::debug;

/// Most recent holder seen before the frame under evaluation.
#[derive(Debug, Clone, Copy)]
struct LastKnownHolder {
    track: TrackId,
    frame: usize,
}

/// Detect completed passes.
///
/// Returns one entry per frame; `Some(team)` marks the frame where the
/// receiving teammate is first seen with the ball. Frame 0 never carries an
/// event.
pub fn detect_passes(
    possession: &[Holder],
    assignment: &[FrameAssignment],
) -> Result<Vec<TeamEvent>> {
    let frame_count = ensure_aligned(possession, assignment)?;
    let mut passes: Vec<TeamEvent> = vec![None; frame_count];
    let mut last_known: Option<LastKnownHolder> = None;

    for frame in 1..frame_count {
        if let Some(track) = possession[frame - 1] {
            last_known = Some(LastKnownHolder {
                track,
                frame: frame - 1,
            });
        }

        let (Some(last), Some(current)) = (last_known, possession[frame]) else {
            continue;
        };
        if last.track == current {
            continue;
        }

        let prev_team = assignment[last.frame].team_of(last.track);
        let current_team = assignment[frame].team_of(current);

        if let (Some(prev_team), Some(current_team)) = (prev_team, current_team) {
            if prev_team == current_team {
                debug!(frame, from = %last.track, to = %current, team = %current_team, "pass");
                passes[frame] = Some(current_team);
            }
        }
    }

    Ok(passes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EventError;
    use crate::models::TeamLabel::{TeamA, TeamB};
    use crate::models::{FrameAssignment, TeamLabel};

    const A: TrackId = TrackId(1);
    const B: TrackId = TrackId(2);
    const C: TrackId = TrackId(3);

    /// Same roster on every frame.
    fn roster(frames: usize, players: &[(TrackId, TeamLabel)]) -> Vec<FrameAssignment> {
        let frame: FrameAssignment = players.iter().copied().collect();
        vec![frame; frames]
    }

    #[test]
    fn test_teammate_handover_is_pass() {
        let possession = vec![Some(A), Some(A), Some(B), Some(B)];
        let assignment = roster(4, &[(A, TeamA), (B, TeamA)]);

        let passes = detect_passes(&possession, &assignment).unwrap();
        assert_eq!(passes, vec![None, None, Some(TeamA), None]);
    }

    #[test]
    fn test_opponent_handover_is_not_pass() {
        let possession = vec![Some(A), Some(B)];
        let assignment = roster(2, &[(A, TeamA), (B, TeamB)]);

        let passes = detect_passes(&possession, &assignment).unwrap();
        assert_eq!(passes, vec![None, None]);
    }

    #[test]
    fn test_pass_across_gap_credited_on_arrival() {
        // A ... gap ... B: last known holder survives the gap
        let possession = vec![Some(A), None, None, None, Some(B)];
        let assignment = roster(5, &[(A, TeamB), (B, TeamB)]);

        let passes = detect_passes(&possession, &assignment).unwrap();
        assert_eq!(passes, vec![None, None, None, None, Some(TeamB)]);
    }

    #[test]
    fn test_prev_team_looked_up_at_remembered_frame() {
        // A is only assigned on frame 0; the lookup must use frame 0, not frame 3
        let possession = vec![Some(A), None, None, Some(B)];
        let mut assignment = vec![FrameAssignment::new(); 4];
        assignment[0].insert(A, TeamA);
        assignment[3].insert(B, TeamA);

        let passes = detect_passes(&possession, &assignment).unwrap();
        assert_eq!(passes[3], Some(TeamA));
    }

    #[test]
    fn test_unknown_team_suppresses_pass() {
        let possession = vec![Some(A), Some(B)];
        let assignment = roster(2, &[(A, TeamA)]);

        let passes = detect_passes(&possession, &assignment).unwrap();
        assert_eq!(passes, vec![None, None]);
    }

    #[test]
    fn test_regained_by_same_player_is_not_pass() {
        let possession = vec![Some(A), None, Some(A)];
        let assignment = roster(3, &[(A, TeamA)]);

        let passes = detect_passes(&possession, &assignment).unwrap();
        assert_eq!(passes, vec![None, None, None]);
    }

    #[test]
    fn test_pass_chain() {
        let possession = vec![Some(A), Some(B), None, Some(C), Some(A)];
        let assignment = roster(5, &[(A, TeamA), (B, TeamA), (C, TeamA)]);

        let passes = detect_passes(&possession, &assignment).unwrap();
        assert_eq!(
            passes,
            vec![None, Some(TeamA), None, Some(TeamA), Some(TeamA)]
        );
    }

    #[test]
    fn test_empty_and_single_frame() {
        assert!(detect_passes(&[], &[]).unwrap().is_empty());

        let passes = detect_passes(&[Some(A)], &roster(1, &[(A, TeamA)])).unwrap();
        assert_eq!(passes, vec![None]);
    }

    #[test]
    fn test_length_mismatch() {
        let result = detect_passes(&[Some(A), Some(B)], &roster(1, &[(A, TeamA)]));
        assert!(matches!(result, Err(EventError::InvalidInput { .. })));
    }
}
