//! Connectly Storage
//!
//! `SQLite` persistence for users, posts and login accounts.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each entity owns its own queries (`users`, `posts`, `accounts`)
//! - **Single Mutator**: All writes go through these slices; [`SqliteStorage`]
//!   exposes them behind the `connectly_core::Storage` trait
//! - **Embedded Migrations**: Schema lives in `migrations/` and is compiled in
//!
//! # Example
//!
//! ```rust,no_run
//! use connectly_storage::{create_pool, run_migrations, SqliteStorage};
//! use connectly_core::Storage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://connectly.db").await?;
//! run_migrations(&pool).await?;
//!
//! let storage = SqliteStorage::new(pool);
//! let users = storage.get_all_users().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod accounts;
pub mod posts;
pub mod users;

pub use context::SqliteStorage;
pub use error::StorageError;

use chrono::{DateTime, Utc};
use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://connectly.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true) // required for ON DELETE CASCADE
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("Pool created");

    Ok(pool)
}

/// Stored timestamps are unix milliseconds
pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub(crate) fn from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}
