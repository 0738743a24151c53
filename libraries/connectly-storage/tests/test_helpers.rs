//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! so every pooled connection sees the same schema and data.

#![allow(dead_code)]

use connectly_core::types::{CreatePost, CreateUser, Post, User};
use connectly_core::Storage;
use connectly_storage::SqliteStorage;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub storage: SqliteStorage,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let storage = SqliteStorage::connect(&db_url)
            .await
            .expect("Failed to open test database");

        Self {
            storage,
            _temp_dir: temp_dir,
        }
    }
}

/// Test fixture: Create a test user
pub async fn create_test_user(storage: &SqliteStorage, username: &str) -> User {
    storage
        .create_user(CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
        })
        .await
        .expect("Failed to create test user")
}

/// Test fixture: Create a test post
pub async fn create_test_post(storage: &SqliteStorage, author: &User, content: &str) -> Post {
    storage
        .create_post(CreatePost {
            content: content.to_string(),
            author_id: author.id,
        })
        .await
        .expect("Failed to create test post")
}
