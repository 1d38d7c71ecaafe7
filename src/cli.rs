//! Command line interface: `serve` and `migrate`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{ConfigLoader, Environment, Settings};
use crate::db;
use crate::error::{AppError, AppResult};
use crate::logger::init_logger;
use crate::server::Server;

/// Backend for a camping spot booking platform
#[derive(Parser, Debug)]
#[command(name = "campground")]
#[command(about = "Backend for a camping spot booking platform")]
#[command(version = crate::build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute; defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file to load instead of the layered defaults
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override environment detection
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Raise log output to debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Reduce log output to errors only
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Host address to bind to
        #[arg(long, value_name = "ADDRESS")]
        host: Option<String>,

        /// Port number to listen on
        #[arg(short, long, value_name = "PORT")]
        port: Option<u16>,

        /// Validate configuration and exit without binding
        #[arg(long)]
        dry_run: bool,
    },
    /// Apply or inspect database migrations
    Migrate {
        /// List pending migrations without applying them
        #[arg(long)]
        dry_run: bool,
    },
}

impl Cli {
    /// Loads configuration, initializes logging and dispatches the command.
    pub async fn execute(self) -> AppResult<()> {
        let settings = self.load_settings()?;

        init_logger(&settings.logger).map_err(|e| AppError::Configuration {
            key: "logger".to_string(),
            source: e,
        })?;

        match self.command.unwrap_or(Commands::Serve {
            host: None,
            port: None,
            dry_run: false,
        }) {
            Commands::Serve {
                host,
                port,
                dry_run,
            } => {
                let mut settings = settings;
                if let Some(host) = host {
                    settings.server.host = host;
                }
                if let Some(port) = port {
                    settings.server.port = port;
                }

                if dry_run {
                    settings.jwt.validate().map_err(|e| AppError::Configuration {
                        key: "jwt".to_string(),
                        source: anyhow::Error::new(e),
                    })?;
                    settings
                        .database
                        .resolved_url()
                        .map_err(|e| AppError::Configuration {
                            key: "database.url".to_string(),
                            source: anyhow::Error::new(e),
                        })?;
                    println!("Configuration is valid");
                    println!("Server would bind to {}", settings.server.address());
                    return Ok(());
                }

                Server::new(settings)
                    .run()
                    .await
                    .map_err(|e| AppError::Internal { source: e })
            }
            Commands::Migrate { dry_run } => run_migrate(&settings, dry_run).await,
        }
    }

    /// Resolves settings from the layered loader, honoring `--env` and
    /// `--config` overrides along with the global verbosity flags.
    fn load_settings(&self) -> AppResult<Settings> {
        let mut loader = ConfigLoader::new();
        if let Some(env) = self.env {
            loader = loader.with_environment(env);
        }
        if let Some(path) = &self.config {
            loader = loader.with_config_file(path.clone());
        }

        let mut settings = loader.load().map_err(|e| AppError::Configuration {
            key: "settings".to_string(),
            source: anyhow::Error::new(e),
        })?;

        if self.verbose {
            settings.logger.level = "debug".to_string();
        } else if self.quiet {
            settings.logger.level = "error".to_string();
        }

        Ok(settings)
    }
}

/// Applies pending migrations, or lists them when `dry_run` is set.
///
/// Migrations run on a blocking task because the diesel migration harness
/// is synchronous.
async fn run_migrate(settings: &Settings, dry_run: bool) -> AppResult<()> {
    let database = settings.database.clone();

    if dry_run {
        let pending =
            tokio::task::spawn_blocking(move || db::pending_migrations(&database))
                .await
                .map_err(|e| AppError::Internal {
                    source: anyhow::Error::from(e),
                })??;

        if pending.is_empty() {
            println!("No pending migrations - database is up to date");
        } else {
            println!("{} pending migration(s):", pending.len());
            for name in &pending {
                println!("  {name}");
            }
        }
        return Ok(());
    }

    let applied =
        tokio::task::spawn_blocking(move || db::run_pending_migrations(&database))
            .await
            .map_err(|e| AppError::Internal {
                source: anyhow::Error::from(e),
            })??;

    if applied.is_empty() {
        println!("No migrations to apply - database is up to date");
    } else {
        println!("Applied {} migration(s):", applied.len());
        for name in &applied {
            println!("  {name}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_no_command() {
        let cli = Cli::try_parse_from(["campground"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn serve_accepts_host_and_port() {
        let cli =
            Cli::try_parse_from(["campground", "serve", "--host", "0.0.0.0", "--port", "8080"])
                .unwrap();
        match cli.command {
            Some(Commands::Serve { host, port, .. }) => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn migrate_dry_run_parses() {
        let cli = Cli::try_parse_from(["campground", "migrate", "--dry-run"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Migrate { dry_run: true })
        ));
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["campground", "--verbose", "--quiet"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ArgumentConflict
        );
    }
}
