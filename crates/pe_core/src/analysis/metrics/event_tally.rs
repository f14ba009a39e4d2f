//! # Event Tally
//!
//! Running pass and interception counts per team, plus per-team totals.

use crate::models::{PossessionEvent, TeamControl, TeamEvent, TeamLabel};
use serde::{Deserialize, Serialize};

/// Counts up to and including one frame. Index 0 = Team A, 1 = Team B.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTally {
    pub passes: [u32; 2],
    pub interceptions: [u32; 2],
}

impl EventTally {
    pub fn passes_for(&self, team: TeamLabel) -> u32 {
        self.passes[team.index()]
    }

    pub fn interceptions_for(&self, team: TeamLabel) -> u32 {
        self.interceptions[team.index()]
    }
}

/// Aggregated event statistics for a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamEventStats {
    pub team: TeamLabel,
    /// Completed passes
    pub passes: u32,
    /// Balls won from the opponent
    pub interceptions: u32,
    /// Balls lost to the opponent (the opponent's interceptions)
    pub turnovers: u32,
    /// Frames this team controlled the ball
    pub controlled_frames: u32,
    /// Controlled frames / determined frames
    pub control_share: f64,
}

/// Running tally for every frame.
pub fn cumulative_event_tally(passes: &[TeamEvent], interceptions: &[TeamEvent]) -> Vec<EventTally> {
    let frame_count = passes.len().max(interceptions.len());
    let mut tally = EventTally::default();
    let mut out = Vec::with_capacity(frame_count);

    for frame in 0..frame_count {
        if let Some(team) = passes.get(frame).copied().flatten() {
            tally.passes[team.index()] += 1;
        }
        if let Some(team) = interceptions.get(frame).copied().flatten() {
            tally.interceptions[team.index()] += 1;
        }
        out.push(tally);
    }

    out
}

/// Calculate team statistics from the sparse events and team control.
pub fn calculate_team_event_stats(
    events: &[PossessionEvent],
    team_control: &[TeamControl],
    team: TeamLabel,
) -> TeamEventStats {
    let passes = events
        .iter()
        .filter(|e| e.is_pass() && e.team == team)
        .count() as u32;
    let interceptions = events
        .iter()
        .filter(|e| e.is_interception() && e.team == team)
        .count() as u32;
    let turnovers = events
        .iter()
        .filter(|e| e.is_interception() && e.team == team.opponent())
        .count() as u32;

    let determined = team_control.iter().filter(|c| c.is_determined()).count() as u32;
    let controlled_frames = team_control
        .iter()
        .filter(|c| c.team() == Some(team))
        .count() as u32;
    let control_share = if determined > 0 {
        controlled_frames as f64 / determined as f64
    } else {
        0.0
    };

    TeamEventStats {
        team,
        passes,
        interceptions,
        turnovers,
        controlled_frames,
        control_share,
    }
}
