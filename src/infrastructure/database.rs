use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

/// Version of the schema created by [`initialize_schema`]
///
/// Stored in SQLite's `user_version` pragma. Raising it makes the next
/// start-up drop and recreate every table, discarding their rows.
pub const SCHEMA_VERSION: i64 = 1;

const CREATE_TEAMS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS teams (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )
"#;

const DROP_TEAMS_TABLE: &str = "DROP TABLE IF EXISTS teams";

/// Errors raised while preparing the schema
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Cannot downgrade schema from version {found} to {supported}")]
    UnsupportedDowngrade { found: i64, supported: i64 },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Opens a pool on the SQLite database at `database_url`
///
/// The database file is created if it does not exist yet. An in-memory
/// database lives only as long as one of its connections, so its pool keeps
/// a connection open for its whole lifetime.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
    };

    pool_options.max_connections(5).connect_with(options).await
}

/// Returns true when `database_url` names an in-memory database
pub fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Brings the schema to [`SCHEMA_VERSION`]
pub async fn initialize_schema(pool: &SqlitePool) -> Result<(), SchemaError> {
    migrate(pool, SCHEMA_VERSION).await
}

/// Brings the schema to `target` version
///
/// - version 0 (fresh database): tables are created
/// - older version: tables are dropped and recreated, losing their rows
/// - same version: missing tables are created
/// - newer version: refused
pub async fn migrate(pool: &SqlitePool, target: i64) -> Result<(), SchemaError> {
    let mut tx = pool.begin().await?;

    let current: i64 = sqlx::query_scalar("PRAGMA user_version")
        .fetch_one(&mut *tx)
        .await?;

    if current > target {
        tracing::warn!(current, target, "Refusing to downgrade schema");
        return Err(SchemaError::UnsupportedDowngrade {
            found: current,
            supported: target,
        });
    }

    if current != 0 && current < target {
        tracing::info!(current, target, "Upgrading schema, existing teams are dropped");
        sqlx::query(DROP_TEAMS_TABLE).execute(&mut *tx).await?;
    }

    sqlx::query(CREATE_TEAMS_TABLE).execute(&mut *tx).await?;

    // PRAGMA does not accept bound parameters
    let set_version = format!("PRAGMA user_version = {}", target);
    sqlx::query(&set_version).execute(&mut *tx).await?;

    tx.commit().await?;

    tracing::debug!(version = target, "Schema ready");
    Ok(())
}

/// Reads the schema version recorded in the database
pub async fn schema_version(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("PRAGMA user_version")
        .fetch_one(pool)
        .await
}
