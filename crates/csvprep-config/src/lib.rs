// csvprep-config - Layered configuration for chunk_csv and split_csv_by_day
//
// Supports configuration from multiple sources:
// 1. Environment variables (CSVPREP_* prefix, highest priority)
// 2. Config file passed with --config
// 3. Config file path from the CSVPREP_CONFIG env var
// 4. Default config file location (./csvprep.toml)
// 5. Built-in defaults (lowest priority)
//
// With no file and no environment variables set, the tools behave exactly
// like their defaults: `chunks/` output directory and target date 2025-06-01.

use anyhow::{Context, Result};
use csvprep_core::{TargetDate, DEFAULT_CHUNK_DIR, DEFAULT_TARGET_DATE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod env_overrides;
mod sources;
mod validation;

pub use env_overrides::{EnvSource, StdEnvSource, ENV_PREFIX};
pub use sources::DEFAULT_CONFIG_FILE;

/// Main configuration shared by both tools
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub chunk: ChunkSettings,

    #[serde(default)]
    pub extract: ExtractSettings,

    /// Config file the values were read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Chunker settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkSettings {
    /// Directory created next to the input file
    pub dir_name: String,
}

impl Default for ChunkSettings {
    fn default() -> Self {
        Self {
            dir_name: DEFAULT_CHUNK_DIR.to_string(),
        }
    }
}

/// Day extractor settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractSettings {
    /// Calendar date to extract, `YYYY-MM-DD`
    pub target_date: String,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            target_date: DEFAULT_TARGET_DATE.to_string(),
        }
    }
}

impl PrepConfig {
    /// Load configuration from all sources with priority.
    ///
    /// `explicit` is a config file named on the command line; it must exist.
    /// Only the shared logging section is validated here.
    pub fn load_with_env<E: EnvSource>(explicit: Option<&Path>, env: &E) -> Result<Self> {
        sources::load_config(explicit, env)
    }

    /// Parse configuration from TOML text, missing keys take defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse csvprep configuration")
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    /// The validated chunk directory name. Warns on hidden directories, so
    /// call it once tracing is initialized.
    pub fn chunk_dir_name(&self) -> Result<&str> {
        validation::validate_chunk_settings(&self.chunk)?;
        Ok(&self.chunk.dir_name)
    }

    /// The configured extraction date
    pub fn target_date(&self) -> Result<TargetDate> {
        validation::parse_target_date(&self.extract)
    }
}
