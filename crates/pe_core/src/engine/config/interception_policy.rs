//! Interception gap policy
//!
//! Decides whether the first holder seen after a possession gap is eligible
//! for interception classification at all. The team comparison runs only
//! when the policy admits the transition.
//!
//! | Policy | Admits when |
//! |--------|-------------|
//! | `frame_index_vs_track_id` | stored gap frame index != current track id |
//! | `holder_changed` | stored gap holder != current holder |
//!
//! `frame_index_vs_track_id` is the default and reproduces the behavior of
//! the upstream analysis scripts, which compare a frame index with a track
//! id. `holder_changed` is the corrected comparison.

use crate::models::{Holder, TrackId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InterceptionGapPolicy {
    #[default]
    FrameIndexVsTrackId,
    HolderChanged,
}

impl InterceptionGapPolicy {
    pub fn admits(self, last_gap_frame: usize, last_gap_holder: Holder, current: TrackId) -> bool {
        match self {
            InterceptionGapPolicy::FrameIndexVsTrackId => {
                last_gap_frame as u64 != u64::from(current.value())
            }
            InterceptionGapPolicy::HolderChanged => last_gap_holder != Some(current),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InterceptionGapPolicy::FrameIndexVsTrackId => "frame_index_vs_track_id",
            InterceptionGapPolicy::HolderChanged => "holder_changed",
        }
    }
}

impl fmt::Display for InterceptionGapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InterceptionGapPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "frame_index_vs_track_id" | "literal" => Ok(InterceptionGapPolicy::FrameIndexVsTrackId),
            "holder_changed" | "corrected" => Ok(InterceptionGapPolicy::HolderChanged),
            other => Err(format!(
                "unknown interception policy '{other}' (expected frame_index_vs_track_id or holder_changed)"
            )),
        }
    }
}
