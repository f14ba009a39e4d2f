//! # Possession Event Extraction
//!
//! Turns the per-frame possession and team-assignment signals into
//! classified events.
//!
//! - `pass_detector` - same-team ball transfers
//! - `interception_detector` - cross-team transfers after a possession gap
//! - `team_control` - stateless per-frame team in control
//! - `timeline` - dense per-frame outputs to a sparse event list
//! - `alignment` - input length validation shared by all passes

pub mod alignment;
pub mod interception_detector;
pub mod pass_detector;
pub mod team_control;
pub mod timeline;

#[cfg(test)]
pub mod proptest_gen;

pub use alignment::ensure_aligned;
pub use interception_detector::{detect_interceptions, detect_interceptions_with_policy};
pub use pass_detector::detect_passes;
pub use team_control::{aggregate, control_for_frame};
pub use timeline::collect_events;
