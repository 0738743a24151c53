//! Login account queries

use crate::{from_millis, now_millis};
use connectly_core::{error::Result, types::Account};
use sqlx::{Row, SqlitePool};

/// Create an account
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `username` - Login name, unique across accounts
/// * `password_hash` - Hashed password (should already be hashed with bcrypt)
pub async fn create(pool: &SqlitePool, username: &str, password_hash: &str) -> Result<Account> {
    let created_at = now_millis();

    sqlx::query("INSERT INTO accounts (username, password_hash, created_at) VALUES (?, ?, ?)")
        .bind(username)
        .bind(password_hash)
        .bind(created_at)
        .execute(pool)
        .await?;

    Ok(Account {
        username: username.to_string(),
        created_at: from_millis(created_at),
    })
}

/// Get an account's password hash for authentication
///
/// Returns `None` if no account has this username
pub async fn get_password_hash(pool: &SqlitePool, username: &str) -> Result<Option<String>> {
    let row = sqlx::query("SELECT password_hash FROM accounts WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| r.get("password_hash")))
}

/// Get all accounts
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Account>> {
    let rows = sqlx::query("SELECT username, created_at FROM accounts ORDER BY username")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| Account {
            username: row.get("username"),
            created_at: from_millis(row.get("created_at")),
        })
        .collect())
}
