use crate::{LogFormat, PrepConfig};
use anyhow::Result;
use std::env;

pub const ENV_PREFIX: &str = "CSVPREP_";

/// Abstraction over environment-variable lookups so tests can supply
/// overrides without touching the process environment.
pub trait EnvSource {
    /// Get a variable by its name without the CSVPREP_ prefix
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, key: &str) -> Option<String> {
        env::var(format!("{}{}", ENV_PREFIX, key)).ok()
    }
}

/// Apply environment-variable overrides (highest priority) to the config.
pub fn apply_env_overrides<E: EnvSource>(config: &mut PrepConfig, env: &E) -> Result<()> {
    // Logging
    if let Some(level) = get_env_string(env, "LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(format) = get_env_string(env, "LOG_FORMAT") {
        config.logging.format = match format.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        };
    }

    // Chunker
    if let Some(dir_name) = get_env_string(env, "CHUNK_DIR") {
        config.chunk.dir_name = dir_name;
    }

    // Day extractor
    if let Some(date) = get_env_string(env, "TARGET_DATE") {
        config.extract.target_date = date;
    }

    Ok(())
}

/// Blank values count as unset
fn get_env_string<E: EnvSource>(env: &E, key: &str) -> Option<String> {
    env.get(key)
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
