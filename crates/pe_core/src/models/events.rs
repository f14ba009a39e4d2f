use super::team::TeamLabel;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Ball received by a teammate of the previous holder
    Pass,
    /// Ball won by the opposing team after a possession gap
    Interception,
}

/// A single classified possession change.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PossessionEvent {
    /// Frame at which the new holder is first seen
    pub frame: usize,
    pub kind: EventKind,
    /// Team credited with the event (receiving team for passes, winning
    /// team for interceptions)
    pub team: TeamLabel,
}

impl PossessionEvent {
    pub fn pass(frame: usize, team: TeamLabel) -> Self {
        Self {
            frame,
            kind: EventKind::Pass,
            team,
        }
    }

    pub fn interception(frame: usize, team: TeamLabel) -> Self {
        Self {
            frame,
            kind: EventKind::Interception,
            team,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.kind == EventKind::Pass
    }

    pub fn is_interception(&self) -> bool {
        self.kind == EventKind::Interception
    }
}
