//! # Team Assignment
//!
//! Team labels and the per-frame `TrackId -> TeamLabel` mapping produced by
//! the upstream team classifier. A track missing from a frame's mapping has
//! an unknown team for that frame.

use super::signal::{Holder, TrackId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One of the two teams on the pitch.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamLabel {
    TeamA,
    TeamB,
}

impl TeamLabel {
    pub const ALL: [TeamLabel; 2] = [TeamLabel::TeamA, TeamLabel::TeamB];

    /// Integer code used by the upstream classifier (1 or 2).
    pub fn code(self) -> u8 {
        match self {
            TeamLabel::TeamA => 1,
            TeamLabel::TeamB => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(TeamLabel::TeamA),
            2 => Some(TeamLabel::TeamB),
            _ => None,
        }
    }

    /// Array slot (0 or 1) for per-team counters.
    pub fn index(self) -> usize {
        match self {
            TeamLabel::TeamA => 0,
            TeamLabel::TeamB => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            TeamLabel::TeamA => TeamLabel::TeamB,
            TeamLabel::TeamB => TeamLabel::TeamA,
        }
    }
}

impl fmt::Display for TeamLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TeamLabel::TeamA => write!(f, "Team A"),
            TeamLabel::TeamB => write!(f, "Team B"),
        }
    }
}

/// Pass or interception outcome for one frame. `None` means no event.
pub type TeamEvent = Option<TeamLabel>;

/// Team membership of the players visible in one frame.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FrameAssignment {
    teams: HashMap<TrackId, TeamLabel>,
}

impl FrameAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_player(mut self, track: TrackId, team: TeamLabel) -> Self {
        self.teams.insert(track, team);
        self
    }

    pub fn insert(&mut self, track: TrackId, team: TeamLabel) -> Option<TeamLabel> {
        self.teams.insert(track, team)
    }

    pub fn team_of(&self, track: TrackId) -> Option<TeamLabel> {
        self.teams.get(&track).copied()
    }

    /// Team of an optional holder; `None` for no holder or unknown team.
    pub fn team_of_holder(&self, holder: Holder) -> Option<TeamLabel> {
        holder.and_then(|track| self.team_of(track))
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TrackId, TeamLabel)> + '_ {
        self.teams.iter().map(|(track, team)| (*track, *team))
    }
}

impl FromIterator<(TrackId, TeamLabel)> for FrameAssignment {
    fn from_iter<I: IntoIterator<Item = (TrackId, TeamLabel)>>(iter: I) -> Self {
        Self {
            teams: iter.into_iter().collect(),
        }
    }
}

/// Which team controls the ball in a frame.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TeamControl {
    Controlled(TeamLabel),
    Undetermined,
}

impl TeamControl {
    pub fn team(self) -> Option<TeamLabel> {
        match self {
            TeamControl::Controlled(team) => Some(team),
            TeamControl::Undetermined => None,
        }
    }

    pub fn is_determined(self) -> bool {
        matches!(self, TeamControl::Controlled(_))
    }
}

impl From<Option<TeamLabel>> for TeamControl {
    fn from(team: Option<TeamLabel>) -> Self {
        match team {
            Some(team) => TeamControl::Controlled(team),
            None => TeamControl::Undetermined,
        }
    }
}
