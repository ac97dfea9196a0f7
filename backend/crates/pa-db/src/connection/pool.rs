//! SQLite pool construction and schema migration.

use crate::Result as DbErrorResult;

use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

/// Open (creating if missing) the database file at `path`
pub async fn connect(
    path: &Path,
    max_connections: u32,
    busy_timeout: Duration,
) -> DbErrorResult<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .foreign_keys(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(busy_timeout),
        )
        .await?;

    Ok(pool)
}

/// Single-connection in-memory database with the schema applied
pub async fn connect_in_memory() -> DbErrorResult<SqlitePool> {
    // In-memory needs a single connection, every connection is a fresh database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(":memory:")
                .foreign_keys(true),
        )
        .await?;

    migrate(&pool).await?;

    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
