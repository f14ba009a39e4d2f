//! # Ball Control Share
//!
//! Fraction of frames each team controlled the ball, counting only frames
//! where control is determined.
//!
//! share(team, f) = controlled(team, 0..=f) / determined(0..=f)
//!
//! Before the first determined frame both shares are 0.0.

use crate::models::{TeamControl, TeamLabel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlShare {
    /// Share for Team A in [0.0, 1.0]
    pub team_a: f64,
    /// Share for Team B in [0.0, 1.0]
    pub team_b: f64,
}

impl ControlShare {
    fn from_counts(counts: [u64; 2]) -> Self {
        let total = counts[0] + counts[1];
        if total == 0 {
            return Self::default();
        }
        Self {
            team_a: counts[0] as f64 / total as f64,
            team_b: counts[1] as f64 / total as f64,
        }
    }

    pub fn share_of(&self, team: TeamLabel) -> f64 {
        match team {
            TeamLabel::TeamA => self.team_a,
            TeamLabel::TeamB => self.team_b,
        }
    }

    /// Share as a percentage in [0.0, 100.0].
    pub fn percent_of(&self, team: TeamLabel) -> f64 {
        self.share_of(team) * 100.0
    }
}

/// Control share over frames `0..=f` for every frame `f`.
pub fn cumulative_control_share(team_control: &[TeamControl]) -> Vec<ControlShare> {
    let mut counts = [0u64; 2];
    team_control
        .iter()
        .map(|control| {
            if let Some(team) = control.team() {
                counts[team.index()] += 1;
            }
            ControlShare::from_counts(counts)
        })
        .collect()
}

/// Control share over the whole sequence.
pub fn overall_control_share(team_control: &[TeamControl]) -> ControlShare {
    let mut counts = [0u64; 2];
    for team in team_control.iter().filter_map(|c| c.team()) {
        counts[team.index()] += 1;
    }
    ControlShare::from_counts(counts)
}
