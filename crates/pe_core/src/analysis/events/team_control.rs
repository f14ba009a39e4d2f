//! # Team Control Aggregator
//!
//! Per-frame projection of the holder onto its team. Stateless: each frame
//! is classified from its own holder and assignment only.

use super::alignment::{ensure_aligned, frames};
use crate::error::Result;
use crate::models::{FrameAssignment, Holder, TeamControl};

/// Classify one frame.
pub fn control_for_frame(holder: Holder, assignment: &FrameAssignment) -> TeamControl {
    assignment.team_of_holder(holder).into()
}

/// Team in control for every frame.
///
/// `Undetermined` when the frame has no holder or the holder is missing from
/// that frame's assignment.
pub fn aggregate(possession: &[Holder], assignment: &[FrameAssignment]) -> Result<Vec<TeamControl>> {
    ensure_aligned(possession, assignment)?;
    Ok(frames(possession, assignment)
        .map(|(_, holder, teams)| control_for_frame(holder, teams))
        .collect())
}
