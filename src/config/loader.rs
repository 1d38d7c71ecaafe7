//! Configuration loader for campground
//!
//! Provides the `ConfigLoader` struct that loads configuration from multiple
//! sources with proper precedence.

use std::path::PathBuf;

use config::{Config, Environment as EnvSource, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "CAMPGROUND_CONFIG_DIR";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "CAMPGROUND";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// Configuration sources, lowest to highest priority:
/// 1. `default.toml` - Base default configuration (optional)
/// 2. `{environment}.toml` - Environment-specific configuration (optional)
/// 3. `local.toml` - Local development overrides (optional)
/// 4. `CAMPGROUND_*` environment variables
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    /// Current application environment
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    ///
    /// Reads `CAMPGROUND_CONFIG_DIR` for the layered configuration directory
    /// and `CAMPGROUND_APP_ENV` for the active environment.
    pub fn new() -> Self {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        Self {
            config_dir,
            config_file: None,
            environment: AppEnvironment::from_env(),
        }
    }

    /// Override the active environment (e.g. from a CLI flag).
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Use a single configuration file instead of layered loading.
    pub fn with_config_file(mut self, path: PathBuf) -> Self {
        self.config_file = Some(path);
        self
    }

    /// Get the current application environment
    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Load and deserialize the settings.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let mut builder = Config::builder();

        if let Some(file) = &self.config_file {
            if !file.exists() {
                return Err(ConfigError::FileNotFound(file.display().to_string()));
            }
            builder = builder.add_source(File::from(file.clone()).format(FileFormat::Toml));
        } else {
            let layers = [
                "default".to_string(),
                self.environment.as_str().to_string(),
                "local".to_string(),
            ];
            for layer in layers {
                let path = self.config_dir.join(format!("{layer}.toml"));
                builder = builder.add_source(
                    File::from(path).format(FileFormat::Toml).required(false),
                );
            }
        }

        builder = builder.add_source(
            EnvSource::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_defaults_when_no_files_present() {
        let loader = ConfigLoader {
            config_dir: PathBuf::from("/nonexistent"),
            config_file: None,
            environment: AppEnvironment::Test,
        };
        let settings = loader.load().expect("defaults should load");
        assert_eq!(settings.application.name, "campground");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let loader = ConfigLoader::new().with_config_file(PathBuf::from("/nonexistent/app.toml"));
        assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn environment_override_applies() {
        let loader = ConfigLoader::new().with_environment(AppEnvironment::Production);
        assert_eq!(loader.environment(), AppEnvironment::Production);
    }
}
