//! Async database connection pool implementation.
//!
//! Uses the bb8 connection pool manager with diesel_async for PostgreSQL
//! connections, plus embedded diesel migrations applied over a synchronous
//! connection at startup or via the `migrate` subcommand.

use std::time::Duration;

use diesel::{Connection, PgConnection};
use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::Pool;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::config::DatabaseConfig;
use crate::error::AppError;

/// Embedded, ordered migration list. Each migration is recorded in the
/// `__diesel_schema_migrations` table after it is applied, so re-running
/// the set is idempotent.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Async connection pool type alias.
///
/// bb8::Pool internally uses Arc, so Clone is cheap (just reference count
/// increment). Structures holding AsyncDbPool can derive Clone without
/// additional Arc wrapping.
pub type AsyncDbPool = Pool<AsyncPgConnection>;

/// Creates an async database connection pool from configuration.
///
/// # Errors
///
/// - `AppError::Configuration` - If no database URL is configured
/// - `AppError::ConnectionPool` - If connection pool creation fails
pub async fn establish_async_connection_pool(
    config: &DatabaseConfig,
) -> Result<AsyncDbPool, AppError> {
    let database_url = config.resolved_url().map_err(|e| AppError::Configuration {
        key: "database.url".to_string(),
        source: anyhow::Error::new(e),
    })?;

    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(config.max_connections)
        .min_idle(Some(config.min_connections))
        .connection_timeout(Duration::from_secs(config.connection_timeout))
        .build(manager)
        .await
        .map_err(|e| AppError::ConnectionPool {
            source: anyhow::Error::new(e),
        })?;
    Ok(pool)
}

/// Applies all pending migrations over a synchronous connection.
///
/// Returns the names of the migrations that were applied this run.
pub fn run_pending_migrations(config: &DatabaseConfig) -> Result<Vec<String>, AppError> {
    let database_url = config.resolved_url().map_err(|e| AppError::Configuration {
        key: "database.url".to_string(),
        source: anyhow::Error::new(e),
    })?;

    let mut conn = PgConnection::establish(&database_url).map_err(|e| AppError::Database {
        operation: "connect for migrations".to_string(),
        source: anyhow::Error::new(e),
    })?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| AppError::Database {
            operation: "run pending migrations".to_string(),
            source: anyhow::anyhow!(e.to_string()),
        })?;

    Ok(applied.into_iter().map(|v| v.to_string()).collect())
}

/// Lists migrations that have not yet been applied.
pub fn pending_migrations(config: &DatabaseConfig) -> Result<Vec<String>, AppError> {
    let database_url = config.resolved_url().map_err(|e| AppError::Configuration {
        key: "database.url".to_string(),
        source: anyhow::Error::new(e),
    })?;

    let mut conn = PgConnection::establish(&database_url).map_err(|e| AppError::Database {
        operation: "connect for migrations".to_string(),
        source: anyhow::Error::new(e),
    })?;

    let pending = conn
        .pending_migrations(MIGRATIONS)
        .map_err(|e| AppError::Database {
            operation: "list pending migrations".to_string(),
            source: anyhow::anyhow!(e.to_string()),
        })?;

    Ok(pending.into_iter().map(|m| m.name().to_string()).collect())
}
