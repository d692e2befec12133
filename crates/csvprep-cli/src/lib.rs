//! Shared plumbing for the `chunk_csv` and `split_csv_by_day` binaries
//!
//! Argument helpers, tracing setup and the stdout reports. Errors are left
//! to `main`, which prints them to stderr and exits with status 1.

use anyhow::{Context, Result};
use clap::{Args, Parser};
use csvprep_config::{EnvSource, PrepConfig, StdEnvSource};
use std::num::NonZeroUsize;
use std::path::PathBuf;

mod init;
mod report;

pub use init::init_tracing;
pub use report::{render_chunk_report, render_extract_report};

/// Options accepted by both tools
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short = 'v', long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl CommonArgs {
    /// Resolve configuration from the process environment
    pub fn load_config(&self) -> Result<PrepConfig> {
        self.load_config_with_env(&StdEnvSource)
    }

    /// Resolve configuration, then apply CLI overrides (highest priority)
    pub fn load_config_with_env<E: EnvSource>(&self, env: &E) -> Result<PrepConfig> {
        let mut config = match &self.config {
            Some(path) => PrepConfig::load_with_env(Some(path.as_path()), env)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => PrepConfig::load_with_env(None, env).context("Failed to load configuration")?,
        };

        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }

        Ok(config)
    }
}

/// Parse process arguments. Usage errors exit with status 1; `--help`
/// and `--version` exit with status 0.
pub fn parse_args<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    }
}

/// Value parser for the chunk count: an integer of at least 1
pub fn parse_num_chunks(value: &str) -> std::result::Result<NonZeroUsize, String> {
    let parsed: i128 = value
        .trim()
        .parse()
        .map_err(|_| "num_chunks must be an integer".to_string())?;

    if parsed < 1 {
        return Err("num_chunks must be >= 1".to_string());
    }

    usize::try_from(parsed)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| format!("num_chunks must be at most {}", usize::MAX))
}
