// Configuration source loading.
//
// Priority order:
// 1. Environment variables (CSVPREP_* prefix)
// 2. Explicit config file (--config)
// 3. Config file path from CSVPREP_CONFIG
// 4. Default config file (./csvprep.toml)
// 5. Built-in defaults

use crate::env_overrides::{self, EnvSource};
use crate::PrepConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "./csvprep.toml";

pub fn load_config<E: EnvSource>(explicit: Option<&Path>, env: &E) -> Result<PrepConfig> {
    let mut config = match explicit {
        Some(path) => load_from_file_path(path)?,
        None => load_from_default_locations(env)?.unwrap_or_default(),
    };

    env_overrides::apply_env_overrides(&mut config, env)?;
    config.validate()?;
    Ok(config)
}

fn load_from_default_locations<E: EnvSource>(env: &E) -> Result<Option<PrepConfig>> {
    if let Some(path) = env.get("CONFIG") {
        return load_from_file_path(Path::new(&path)).map(Some);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        return load_from_file_path(default_path).map(Some);
    }

    Ok(None)
}

/// Load configuration from a specific file path.
/// Returns error if file doesn't exist or can't be parsed.
fn load_from_file_path(path: &Path) -> Result<PrepConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let mut config = PrepConfig::from_toml(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.source = Some(path.to_path_buf());
    Ok(config)
}
