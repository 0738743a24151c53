use crate::{from_millis, now_millis};
use connectly_core::{
    error::Result,
    types::{CreatePost, Post, PostId, UpdatePost},
    CoreError,
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

// author_username is always read through the join, never stored on the post
const SELECT_POSTS: &str = r#"
    SELECT p.id, p.content, p.author_id, u.username AS author_username, p.created_at
    FROM posts p
    INNER JOIN users u ON u.id = p.author_id
"#;

fn map_row(row: &SqliteRow) -> Post {
    Post {
        id: row.get("id"),
        content: row.get("content"),
        author_id: row.get("author_id"),
        author_username: row.get("author_username"),
        created_at: from_millis(row.get("created_at")),
    }
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Post>> {
    let rows = sqlx::query(&format!("{SELECT_POSTS} ORDER BY p.id"))
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(map_row).collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: PostId) -> Result<Option<Post>> {
    let row = sqlx::query(&format!("{SELECT_POSTS} WHERE p.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(map_row))
}

/// Insert a post for an existing author
pub async fn create(pool: &SqlitePool, post: CreatePost) -> Result<Post> {
    let id = sqlx::query("INSERT INTO posts (content, author_id, created_at) VALUES (?, ?, ?)")
        .bind(&post.content)
        .bind(post.author_id)
        .bind(now_millis())
        .execute(pool)
        .await?
        .last_insert_rowid();

    tracing::debug!(post_id = id, author_id = post.author_id, "Post created");

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Post", id))
}

/// Update post content. The author column is never written after insert.
pub async fn update(pool: &SqlitePool, id: PostId, post: UpdatePost) -> Result<Post> {
    let result = sqlx::query("UPDATE posts SET content = COALESCE(?, content) WHERE id = ?")
        .bind(post.content)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CoreError::not_found("Post", id));
    }

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Post", id))
}

pub async fn delete(pool: &SqlitePool, id: PostId) -> Result<()> {
    let result = sqlx::query("DELETE FROM posts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CoreError::not_found("Post", id));
    }

    Ok(())
}
