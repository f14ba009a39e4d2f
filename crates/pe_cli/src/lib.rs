//! Possession Analysis Runner
//!
//! JSON request file → possession engine → JSON report file, with run
//! metadata (input checksum, timestamp, engine version) for provenance.

pub mod config_env;

use anyhow::{Context, Result};
use pe_core::{AnalysisRequest, AnalysisResponse, EngineConfig, InterceptionGapPolicy, TeamLabel};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

pub use config_env::{load_config_from_env, ENGINE_CONFIG_PATH_ENV};

/// Provenance of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunMetadata {
    /// Request file path as given
    pub input_path: String,
    /// SHA256 of the request file (hex)
    pub input_checksum: String,
    /// Creation time (RFC3339)
    pub created_at: String,
    pub engine_version: String,
    pub frame_count: usize,
}

/// What gets written to the output file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisOutput {
    pub metadata: RunMetadata,
    pub report: AnalysisResponse,
}

/// Engine config for a run.
///
/// Precedence: `policy_override`, then the file in `PE_ENGINE_CONFIG_PATH`,
/// then `PE_INTERCEPTION_POLICY`, then the default.
pub fn resolve_config(policy_override: Option<InterceptionGapPolicy>) -> Result<EngineConfig> {
    let base = match load_config_from_env()? {
        Some(config) => config,
        None => EngineConfig::from_env_or_default(),
    };
    Ok(match policy_override {
        Some(policy) => base.with_interception_policy(policy),
        None => base,
    })
}

/// Read and validate a request file.
pub fn load_request(input: &Path) -> Result<(AnalysisRequest, String)> {
    let json_str = fs::read_to_string(input)
        .with_context(|| format!("Failed to read request file: {}", input.display()))?;

    let mut hasher = Sha256::new();
    hasher.update(json_str.as_bytes());
    let checksum = format!("{:x}", hasher.finalize());

    let request = AnalysisRequest::from_json(&json_str)
        .with_context(|| format!("Invalid analysis request: {}", input.display()))?;

    Ok((request, checksum))
}

/// Analyze a request file.
///
/// `policy_override` replaces any config embedded in the request.
pub fn analyze_file(
    input: &Path,
    config: EngineConfig,
    policy_override: Option<InterceptionGapPolicy>,
) -> Result<AnalysisOutput> {
    let (mut request, checksum) = load_request(input)?;
    if let Some(policy) = policy_override {
        let embedded = request.config.unwrap_or(config);
        request.config = Some(embedded.with_interception_policy(policy));
    }

    let report = pe_core::analyze_request(&request, config)
        .with_context(|| format!("Analysis failed for {}", input.display()))?;

    let metadata = RunMetadata {
        input_path: input.display().to_string(),
        input_checksum: checksum,
        created_at: chrono::Utc::now().to_rfc3339(),
        engine_version: pe_core::VERSION.to_string(),
        frame_count: report.frame_count,
    };

    tracing::info!(
        input = %input.display(),
        frames = metadata.frame_count,
        events = report.events.len(),
        "analysis finished"
    );

    Ok(AnalysisOutput { metadata, report })
}

/// Write an analysis output as JSON, creating parent directories.
pub fn write_output(output: &Path, analysis: &AnalysisOutput, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(analysis)?
    } else {
        serde_json::to_string(analysis)?
    };

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
        }
    }

    fs::write(output, json)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;
    Ok(())
}

/// Human-readable per-team summary.
pub fn summarize(report: &AnalysisResponse) -> String {
    let mut lines = vec![format!(
        "Frames: {} (policy: {})",
        report.frame_count, report.interception_policy
    )];

    for team in TeamLabel::ALL {
        let share = report.control_share.percent_of(team);
        match report.team_stats.iter().find(|s| s.team == team) {
            Some(stats) => lines.push(format!(
                "{team}: ball control {share:.1}%, passes {}, interceptions {}, turnovers {}",
                stats.passes, stats.interceptions, stats.turnovers
            )),
            None => lines.push(format!("{team}: ball control {share:.1}%")),
        }
    }

    lines.join("\n")
}
