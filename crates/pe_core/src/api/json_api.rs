//! # Possession Analysis JSON API
//!
//! String-in, string-out entry point. The wire format keeps the integer
//! conventions of the upstream tracking scripts: track ids are non-negative
//! integers, `-1` means "no holder", "no event" or "undetermined", and teams
//! are `1` / `2`.
//!
//! ## Request
//! ```json
//! {
//!   "schema_version": 1,
//!   "possession": [4, 4, -1, 9],
//!   "player_assignment": [{"4": 1, "9": 2}, {"4": 1}, {}, {"9": 2}],
//!   "config": { "interception_policy": "holder_changed" }
//! }
//! ```
//! `config` is optional; without it the engine reads `PE_INTERCEPTION_POLICY`.

use crate::analysis::metrics::{ControlShare, TeamEventStats};
use crate::engine::config::{EngineConfig, InterceptionGapPolicy};
use crate::engine::{PossessionEngine, PossessionReport};
use crate::error::{EventError, Result};
use crate::models::{
    FrameAssignment, Holder, PossessionEvent, TeamControl, TeamEvent, TeamLabel, TrackId,
};
use crate::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Wire code for "no holder" / "no event" / "undetermined".
pub const NO_HOLDER_CODE: i64 = -1;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisRequest {
    pub schema_version: u8,
    /// Holder track id per frame, `-1` for no holder
    pub possession: Vec<i64>,
    /// Per-frame `track id -> team code` maps
    pub player_assignment: Vec<HashMap<String, i64>>,
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

impl AnalysisRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        let request: AnalysisRequest = serde_json::from_str(json)?;
        if request.schema_version != SCHEMA_VERSION {
            return Err(EventError::UnsupportedSchema {
                found: request.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        Ok(request)
    }

    /// Decode the wire signals into engine inputs.
    pub fn to_signals(&self) -> Result<(Vec<Holder>, Vec<FrameAssignment>)> {
        let possession = self
            .possession
            .iter()
            .enumerate()
            .map(|(frame, &code)| decode_holder(frame, code))
            .collect::<Result<Vec<_>>>()?;

        let assignment = self
            .player_assignment
            .iter()
            .enumerate()
            .map(|(frame, teams)| decode_assignment(frame, teams))
            .collect::<Result<Vec<_>>>()?;

        Ok((possession, assignment))
    }
}

fn decode_holder(frame: usize, code: i64) -> Result<Holder> {
    if code == NO_HOLDER_CODE {
        return Ok(None);
    }
    u32::try_from(code)
        .map(|id| Some(TrackId(id)))
        .map_err(|_| EventError::InvalidTrackId {
            frame,
            value: code.to_string(),
        })
}

fn decode_assignment(frame: usize, teams: &HashMap<String, i64>) -> Result<FrameAssignment> {
    teams
        .iter()
        .map(|(key, &code)| -> Result<(TrackId, TeamLabel)> {
            let track = key
                .trim()
                .parse::<u32>()
                .map(TrackId)
                .map_err(|_| EventError::InvalidTrackId {
                    frame,
                    value: key.clone(),
                })?;
            let team = TeamLabel::from_code(code).ok_or(EventError::InvalidTeamCode { frame, code })?;
            Ok((track, team))
        })
        .collect()
}

fn event_code(event: TeamEvent) -> i8 {
    event.map_or(NO_HOLDER_CODE as i8, |team| team.code() as i8)
}

fn control_code(control: TeamControl) -> i8 {
    event_code(control.team())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResponse {
    pub schema_version: u8,
    pub frame_count: usize,
    pub interception_policy: InterceptionGapPolicy,
    /// Receiving team code per frame, `-1` for none
    pub pass_events: Vec<i8>,
    /// Winning team code per frame, `-1` for none
    pub interception_events: Vec<i8>,
    /// Team in control per frame, `-1` for undetermined
    pub team_ball_control: Vec<i8>,
    pub events: Vec<PossessionEvent>,
    pub control_share: ControlShare,
    pub team_stats: Vec<TeamEventStats>,
}

impl From<&PossessionReport> for AnalysisResponse {
    fn from(report: &PossessionReport) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            frame_count: report.frame_count,
            interception_policy: report.interception_policy,
            pass_events: report.pass_events.iter().copied().map(event_code).collect(),
            interception_events: report
                .interception_events
                .iter()
                .copied()
                .map(event_code)
                .collect(),
            team_ball_control: report.team_control.iter().copied().map(control_code).collect(),
            events: report.events.clone(),
            control_share: report.control_share,
            team_stats: report.team_stats.clone(),
        }
    }
}

/// Run a decoded request; the request's own `config` wins over `default_config`.
pub fn analyze_request(
    request: &AnalysisRequest,
    default_config: EngineConfig,
) -> Result<AnalysisResponse> {
    let (possession, assignment) = request.to_signals()?;
    let config = request.config.unwrap_or(default_config);
    let report = PossessionEngine::new(config).analyze(&possession, &assignment)?;
    Ok(AnalysisResponse::from(&report))
}

/// Analyze a JSON request and return the JSON response.
pub fn analyze_possession_json(request_json: &str) -> Result<String> {
    let request = AnalysisRequest::from_json(request_json).map_err(|e| {
        warn!("rejected analysis request: {e}");
        e
    })?;
    let response = analyze_request(&request, EngineConfig::from_env_or_default())?;
    Ok(serde_json::to_string(&response)?)
}
