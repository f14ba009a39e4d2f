//! # Analysis Module
//!
//! Post-match possession analysis over per-frame tracking output.
//!
//! ## Submodules
//!
//! - `events` - Event extraction (pass, interception, team control)
//! - `metrics` - Statistical metrics (control share, event tally)

pub mod events;
pub mod metrics;
