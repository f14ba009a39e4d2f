//! # Interception Detector
//!
//! Flags frames where the opposing team gains the ball after a possession
//! gap.
//!
//! ## Algorithm
//! 1. On every gap frame `f` (no holder), store `holder[f-1]` and `f-1`.
//!    On consecutive gap frames the stored holder is itself empty.
//! 2. On the first frame with a holder after the gap, the stored gap is
//!    resolved: the memory is consumed whether or not an event fires.
//! 3. If the `InterceptionGapPolicy` admits the transition, compare the
//!    stored holder's team (at the stored frame) with the current holder's
//!    team (at `f`). Both known and different: interception for the
//!    current team.
//!
//! Consuming the gap on resolution means an interception can only fire on
//! `f` when `f-1` has no holder and the holder before it is the same one the
//! pass detector remembers, so pass and interception never share a frame.

use super::alignment::ensure_aligned;
use crate::engine::config::InterceptionGapPolicy;
use crate::error::Result;
use crate::models::{FrameAssignment, Holder, TeamEvent};
use tracing::debug;

/// Holder seen just before the most recent gap frame.
#[derive(Debug, Clone, Copy)]
struct GapMemory {
    holder: Holder,
    frame: usize,
}

/// Detect interceptions with the default policy.
pub fn detect_interceptions(
    possession: &[Holder],
    assignment: &[FrameAssignment],
) -> Result<Vec<TeamEvent>> {
    detect_interceptions_with_policy(possession, assignment, InterceptionGapPolicy::default())
}

/// Detect interceptions.
///
/// Returns one entry per frame; `Some(team)` names the team that won the
/// ball. Frame 0 never carries an event.
pub fn detect_interceptions_with_policy(
    possession: &[Holder],
    assignment: &[FrameAssignment],
    policy: InterceptionGapPolicy,
) -> Result<Vec<TeamEvent>> {
    let frame_count = ensure_aligned(possession, assignment)?;
    let mut interceptions: Vec<TeamEvent> = vec![None; frame_count];
    let mut gap: Option<GapMemory> = None;

    for frame in 1..frame_count {
        let Some(current) = possession[frame] else {
            gap = Some(GapMemory {
                holder: possession[frame - 1],
                frame: frame - 1,
            });
            continue;
        };

        let Some(memory) = gap.take() else {
            continue;
        };
        if !policy.admits(memory.frame, memory.holder, current) {
            continue;
        }

        let prev_team = assignment[memory.frame].team_of_holder(memory.holder);
        let current_team = assignment[frame].team_of(current);

        if let (Some(prev_team), Some(current_team)) = (prev_team, current_team) {
            if prev_team != current_team {
                debug!(frame, gap_frame = memory.frame, to = %current, team = %current_team, "interception");
                interceptions[frame] = Some(current_team);
            }
        }
    }

    Ok(interceptions)
}
