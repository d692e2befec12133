// Configuration validation
//
// Only the logging section is shared by both tools and checked at load time.
// Tool-specific sections are checked when the tool asks for them, after
// tracing is up, so one tool never fails on the other's settings.

use crate::{ChunkSettings, ExtractSettings, LoggingConfig, PrepConfig};
use anyhow::{bail, Context, Result};
use csvprep_core::TargetDate;
use std::path::{Component, Path};
use tracing::warn;

pub fn validate_config(config: &PrepConfig) -> Result<()> {
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    if config.level.trim().is_empty() {
        bail!("logging.level must not be empty");
    }

    Ok(())
}

pub fn validate_chunk_settings(config: &ChunkSettings) -> Result<()> {
    if config.dir_name.is_empty() {
        bail!("chunk.dir_name must not be empty");
    }

    // Chunks always land next to the input, never elsewhere
    let mut components = Path::new(&config.dir_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => {}
        _ => bail!(
            "chunk.dir_name must be a single directory name, got '{}'",
            config.dir_name
        ),
    }

    if config.dir_name.starts_with('.') {
        warn!(
            dir_name = %config.dir_name,
            "chunk.dir_name is a hidden directory; \
             consumers listing the input directory may miss it"
        );
    }

    Ok(())
}

pub fn parse_target_date(config: &ExtractSettings) -> Result<TargetDate> {
    config.target_date.parse::<TargetDate>().with_context(|| {
        format!(
            "extract.target_date must be a YYYY-MM-DD date, got '{}'",
            config.target_date
        )
    })
}
