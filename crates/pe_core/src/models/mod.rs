//! Data models shared by the detectors, the engine and the JSON API.
//!
//! - `signal` - track identities and the per-frame possession signal
//! - `team` - team labels, per-frame team assignment, team control
//! - `events` - sparse possession event records

pub mod events;
pub mod signal;
pub mod team;

pub use events::{EventKind, PossessionEvent};
pub use signal::{Holder, TrackId};
pub use team::{FrameAssignment, TeamControl, TeamEvent, TeamLabel};
