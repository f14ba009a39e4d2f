//! # Possession Signal
//!
//! One `Holder` per video frame: the track holding the ball, or nobody.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of one tracked player, assigned by the upstream tracker.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TrackId(pub u32);

impl TrackId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for TrackId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Ball holder for one frame. `None` means no determined holder.
pub type Holder = Option<TrackId>;

/// Number of frames with a determined holder.
pub fn held_frame_count(possession: &[Holder]) -> usize {
    possession.iter().filter(|h| h.is_some()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_id_display() {
        assert_eq!(TrackId(7).to_string(), "#7");
        assert_eq!(TrackId::from(3).value(), 3);
    }

    #[test]
    fn test_held_frame_count() {
        let possession = vec![Some(TrackId(1)), None, None, Some(TrackId(2))];
        assert_eq!(held_frame_count(&possession), 2);
        assert_eq!(held_frame_count(&[]), 0);
    }
}
