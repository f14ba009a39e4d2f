use anyhow::{Context, Result};
use pe_core::EngineConfig;
use std::{env, fs};

pub const ENGINE_CONFIG_PATH_ENV: &str = "PE_ENGINE_CONFIG_PATH";

/// Engine config from the JSON file named by `PE_ENGINE_CONFIG_PATH`, if set.
pub fn load_config_from_env() -> Result<Option<EngineConfig>> {
    let Ok(path) = env::var(ENGINE_CONFIG_PATH_ENV) else {
        return Ok(None);
    };

    let path = path.trim();
    if path.is_empty() {
        return Ok(None);
    }

    load_config_file(path).map(Some)
}

pub fn load_config_file(path: &str) -> Result<EngineConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read engine config file from {ENGINE_CONFIG_PATH_ENV}='{path}'"))?;

    EngineConfig::from_json(&content)
        .with_context(|| format!("Failed to parse engine config JSON from {ENGINE_CONFIG_PATH_ENV}='{path}'"))
}
