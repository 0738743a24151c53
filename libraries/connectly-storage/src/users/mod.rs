//! User profile queries

use crate::{from_millis, now_millis};
use connectly_core::{
    error::Result,
    types::{CreateUser, UpdateUser, User, UserId},
    CoreError,
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

fn map_row(row: &SqliteRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        created_at: from_millis(row.get("created_at")),
    }
}

/// Get all users, in creation order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, username, email, created_at FROM users ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(map_row).collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, username, email, created_at FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(map_row))
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>> {
    let row =
        sqlx::query("SELECT id, username, email, created_at FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await?;

    Ok(row.as_ref().map(map_row))
}

/// Insert a user. Fails with `CoreError::Duplicate` if the username is taken.
pub async fn create(pool: &SqlitePool, user: CreateUser) -> Result<User> {
    let created_at = now_millis();

    let id = sqlx::query("INSERT INTO users (username, email, created_at) VALUES (?, ?, ?)")
        .bind(&user.username)
        .bind(&user.email)
        .bind(created_at)
        .execute(pool)
        .await?
        .last_insert_rowid();

    tracing::debug!(user_id = id, username = %user.username, "User created");

    Ok(User {
        id,
        username: user.username,
        email: user.email,
        created_at: from_millis(created_at),
    })
}

/// Update username and/or email. `id` and `created_at` never change.
pub async fn update(pool: &SqlitePool, id: UserId, user: UpdateUser) -> Result<User> {
    let result = sqlx::query(
        "UPDATE users
         SET username = COALESCE(?, username),
             email = COALESCE(?, email)
         WHERE id = ?",
    )
    .bind(user.username)
    .bind(user.email)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(CoreError::not_found("User", id));
    }

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("User", id))
}

/// Delete a user. Their posts go with them via `ON DELETE CASCADE`.
pub async fn delete(pool: &SqlitePool, id: UserId) -> Result<()> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CoreError::not_found("User", id));
    }

    tracing::debug!(user_id = id, "User deleted");
    Ok(())
}
