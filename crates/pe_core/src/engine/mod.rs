//! # Possession Engine
//!
//! Runs the pass detector, the interception detector and the team control
//! aggregator over one analyzed video and bundles their outputs.
//!
//! The three passes read the same immutable inputs and keep only
//! scan-local state, so they run concurrently on the rayon pool.

pub mod config;


use crate::analysis::events::{
    aggregate, collect_events, detect_interceptions_with_policy, detect_passes, ensure_aligned,
};
use crate::analysis::metrics::{
    calculate_team_event_stats, cumulative_control_share, overall_control_share, ControlShare,
    TeamEventStats,
};
use crate::error::Result;
use crate::models::signal::held_frame_count;
use crate::models::{FrameAssignment, Holder, PossessionEvent, TeamControl, TeamEvent, TeamLabel};
use config::{EngineConfig, InterceptionGapPolicy};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything derived from one possession/assignment pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PossessionReport {
    pub frame_count: usize,
    pub interception_policy: InterceptionGapPolicy,
    pub pass_events: Vec<TeamEvent>,
    pub interception_events: Vec<TeamEvent>,
    pub team_control: Vec<TeamControl>,
    /// Sparse view of `pass_events` and `interception_events`
    pub events: Vec<PossessionEvent>,
    pub control_share: ControlShare,
    /// Team A first
    pub team_stats: Vec<TeamEventStats>,
}

impl PossessionReport {
    pub fn pass_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_pass()).count()
    }

    pub fn interception_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_interception()).count()
    }

    pub fn stats_for(&self, team: TeamLabel) -> Option<&TeamEventStats> {
        self.team_stats.iter().find(|s| s.team == team)
    }

    /// Running control share, one entry per frame.
    pub fn cumulative_control_share(&self) -> Vec<ControlShare> {
        cumulative_control_share(&self.team_control)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PossessionEngine {
    config: EngineConfig,
}

impl PossessionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn analyze(
        &self,
        possession: &[Holder],
        assignment: &[FrameAssignment],
    ) -> Result<PossessionReport> {
        let frame_count = ensure_aligned(possession, assignment)?;
        let policy = self.config.interception_policy;

        let (passes, (interceptions, team_control)) = rayon::join(
            || detect_passes(possession, assignment),
            || {
                rayon::join(
                    || detect_interceptions_with_policy(possession, assignment, policy),
                    || aggregate(possession, assignment),
                )
            },
        );
        let pass_events = passes?;
        let interception_events = interceptions?;
        let team_control = team_control?;

        let events = collect_events(&pass_events, &interception_events);
        let team_stats = TeamLabel::ALL
            .iter()
            .map(|team| calculate_team_event_stats(&events, &team_control, *team))
            .collect();
        let control_share = overall_control_share(&team_control);

        let report = PossessionReport {
            frame_count,
            interception_policy: policy,
            pass_events,
            interception_events,
            team_control,
            events,
            control_share,
            team_stats,
        };

        info!(
            frames = frame_count,
            held_frames = held_frame_count(possession),
            passes = report.pass_count(),
            interceptions = report.interception_count(),
            policy = %policy,
            "possession analysis complete"
        );

        Ok(report)
    }
}
