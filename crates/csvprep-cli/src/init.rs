// Logging/tracing setup
//
// Events go to stderr so stdout carries only the run summary.

use csvprep_config::{LogFormat, PrepConfig};
use tracing::debug;

/// Initialize tracing/logging from the resolved configuration
pub fn init_tracing(config: &PrepConfig) {
    install_subscriber(&config.logging.level, config.logging.format);

    if let Some(path) = &config.source {
        debug!(path = %path.display(), "Loaded config file");
    }
}

fn install_subscriber(level: &str, format: LogFormat) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Parse log level from config
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    // Try to set the global subscriber; ignore error if already set (idempotent)
    let _ = match format {
        LogFormat::Json => tracing::subscriber::set_global_default(
            registry.with(fmt::layer().json().with_writer(std::io::stderr)),
        ),
        LogFormat::Text => tracing::subscriber::set_global_default(
            registry.with(fmt::layer().with_writer(std::io::stderr)),
        ),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        let mut config = PrepConfig::default();
        config.logging.level = "not a valid ==== directive".to_string();
        config.logging.format = LogFormat::Json;
        config.source = Some("csvprep.toml".into());
        init_tracing(&config);
        init_tracing(&PrepConfig::default());
    }
}
