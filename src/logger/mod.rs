//! Tracing subscriber initialization.
//!
//! Console logging via tracing-subscriber with an env-filter level and a
//! choice of human-readable or JSON output. The `RUST_LOG` environment
//! variable overrides the configured level when set.

use tracing_subscriber::EnvFilter;

use crate::config::LoggerConfig;

/// Initializes the global tracing subscriber.
///
/// # Errors
/// Returns an error if the configured level is not a valid filter directive
/// or a global subscriber is already installed.
pub fn init_logger(config: &LoggerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| anyhow::anyhow!("invalid log level '{}': {}", config.level, e))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.format.eq_ignore_ascii_case("json") {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
    .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_level() {
        let config = LoggerConfig {
            level: "not a level ((".to_string(),
            format: "pretty".to_string(),
        };
        // Only exercised when RUST_LOG is unset; otherwise init takes the
        // env filter and the level is never parsed.
        if std::env::var("RUST_LOG").is_err() {
            assert!(init_logger(&config).is_err());
        }
    }
}
