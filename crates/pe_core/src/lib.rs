//! # pe_core - Possession Event Detection Engine
//!
//! Post-processes per-frame tracking output from a sports video into
//! possession events.
//!
//! ## Features
//! - Pass detection (ball moves to a teammate)
//! - Interception detection (ball won by the opponent after a gap)
//! - Per-frame team ball control and control share
//! - JSON API using the upstream integer conventions
//!
//! ```rust
//! use pe_core::{FrameAssignment, PossessionEngine, TeamLabel, TrackId};
//!
//! let frame = FrameAssignment::new()
//!     .with_player(TrackId(1), TeamLabel::TeamA)
//!     .with_player(TrackId(2), TeamLabel::TeamA);
//! let possession = vec![Some(TrackId(1)), Some(TrackId(1)), Some(TrackId(2))];
//! let assignment = vec![frame; 3];
//!
//! let report = PossessionEngine::default().analyze(&possession, &assignment).unwrap();
//! assert_eq!(report.pass_events[2], Some(TeamLabel::TeamA));
//! ```

// Loop style - frame-indexed scans read clearer with explicit indices
#![allow(clippy::needless_range_loop)]

pub mod analysis;
pub mod api;
pub mod engine;
pub mod error;
pub mod models;

pub use analysis::events::{
    aggregate, collect_events, detect_interceptions, detect_interceptions_with_policy,
    detect_passes, ensure_aligned,
};
pub use analysis::metrics::{
    calculate_team_event_stats, cumulative_control_share, cumulative_event_tally,
    overall_control_share, ControlShare, EventTally, TeamEventStats,
};
pub use api::{analyze_possession_json, analyze_request, AnalysisRequest, AnalysisResponse};
pub use engine::config::{EngineConfig, InterceptionGapPolicy};
pub use engine::{PossessionEngine, PossessionReport};
pub use error::{EventError, Result};
pub use models::{
    EventKind, FrameAssignment, Holder, PossessionEvent, TeamControl, TeamEvent, TeamLabel,
    TrackId,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
