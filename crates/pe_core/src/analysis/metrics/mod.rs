//! # Possession Metrics
//!
//! Running and aggregate statistics over the engine outputs, as shown by the
//! ball-control overlay.
//!
//! - `control_share` - share of determined frames controlled by each team
//! - `event_tally` - running and total pass/interception counts

pub mod control_share;
pub mod event_tally;

pub use control_share::{cumulative_control_share, overall_control_share, ControlShare};
pub use event_tally::{calculate_team_event_stats, cumulative_event_tally, EventTally, TeamEventStats};
