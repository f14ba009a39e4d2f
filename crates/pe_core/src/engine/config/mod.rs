//! # Engine Configuration
//!
//! Runtime knobs for the possession engine.
//!
//! ## Usage
//! ```rust
//! use pe_core::engine::config::{EngineConfig, InterceptionGapPolicy};
//!
//! let config = EngineConfig::default();
//! assert_eq!(config.interception_policy, InterceptionGapPolicy::FrameIndexVsTrackId);
//!
//! let corrected = EngineConfig::corrected();
//! assert_eq!(corrected.interception_policy, InterceptionGapPolicy::HolderChanged);
//! ```
//!
//! ## Environment Variables
//!
//! - `PE_INTERCEPTION_POLICY`: `frame_index_vs_track_id` (default) or `holder_changed`

mod interception_policy;

pub use interception_policy::InterceptionGapPolicy;

use crate::error::{EventError, Result};
use serde::{Deserialize, Serialize};
use std::env;

pub const INTERCEPTION_POLICY_ENV: &str = "PE_INTERCEPTION_POLICY";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Eligibility rule for post-gap interception candidates
    #[serde(default)]
    pub interception_policy: InterceptionGapPolicy,
}

impl EngineConfig {
    /// Upstream-compatible behavior (default)
    pub fn literal() -> Self {
        Self::default()
    }

    /// Holder-vs-holder interception eligibility
    pub fn corrected() -> Self {
        Self {
            interception_policy: InterceptionGapPolicy::HolderChanged,
        }
    }

    pub fn with_interception_policy(mut self, policy: InterceptionGapPolicy) -> Self {
        self.interception_policy = policy;
        self
    }

    /// Load from environment variable PE_INTERCEPTION_POLICY or use default
    pub fn from_env_or_default() -> Self {
        match env::var(INTERCEPTION_POLICY_ENV) {
            Ok(value) if !value.trim().is_empty() => match value.parse() {
                Ok(policy) => Self::default().with_interception_policy(policy),
                Err(e) => {
                    tracing::warn!("{INTERCEPTION_POLICY_ENV}: {e}; using default");
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| EventError::Config(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
