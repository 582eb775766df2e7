//! # Lema DB
//!
//! Connection pool construction and schema migrations for the Lema API,
//! using SQLx with SQLite.
//!
//! # Example
//!
//! ```ignore
//! use lema_config::AppConfig;
//! use lema_db::{init_db_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = init_db_pool(&AppConfig::from_env()?.database).await?;
//!     run_migrations(&pool).await?;
//!     Ok(())
//! }
//! ```

use std::str::FromStr;

use lema_config::DatabaseConfig;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{info, instrument};

/// Migrations bundled from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Builds pool options from the configured bounds.
///
/// An in-memory database disappears with its last connection, so such pools
/// hold exactly one connection that is never reaped.
#[must_use]
pub fn pool_options(config: &DatabaseConfig) -> SqlitePoolOptions {
    if config.is_in_memory() {
        return SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    SqlitePoolOptions::new()
        .max_connections(config.max_open_conns)
        .min_connections(config.max_idle_conns)
        .max_lifetime(config.conn_max_lifetime)
}

/// Opens a SQLite connection pool.
///
/// The database file is created if it does not exist. Foreign keys are
/// enforced on every connection.
#[instrument(skip(config), fields(in_memory = config.is_in_memory()))]
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = pool_options(config).connect_with(options).await?;
    info!(
        max_connections = pool.options().get_max_connections(),
        "Database pool ready"
    );

    Ok(pool)
}

/// Applies every pending migration.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

// Re-export SqlitePool for convenience
pub use sqlx::SqlitePool;
