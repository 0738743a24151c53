//! Storage trait for users, posts and accounts

use crate::error::Result;
use crate::types::{
    Account, CreatePost, CreateUser, Post, PostId, UpdatePost, UpdateUser, User, UserId,
};
use async_trait::async_trait;

/// Repository interface over persisted entities
///
/// This trait is the only path through which users, posts and accounts are
/// mutated. Lookups by id return `Ok(None)` when nothing matches; updates and
/// deletes of a missing id fail with [`crate::CoreError::NotFound`].
#[async_trait]
pub trait Storage: Send + Sync {
    // ========================================================================
    // Users
    // ========================================================================

    /// Get all users, oldest first
    async fn get_all_users(&self) -> Result<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;

    /// Find user by exact username
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Create a new user; the id and creation time are assigned here
    async fn create_user(&self, user: CreateUser) -> Result<User>;

    /// Apply the supplied fields to an existing user
    async fn update_user(&self, id: UserId, user: UpdateUser) -> Result<User>;

    /// Delete a user and every post they authored
    async fn delete_user(&self, id: UserId) -> Result<()>;

    // ========================================================================
    // Posts
    // ========================================================================

    /// Get all posts, oldest first
    async fn get_all_posts(&self) -> Result<Vec<Post>>;

    /// Get post by ID
    async fn get_post(&self, id: PostId) -> Result<Option<Post>>;

    /// Create a new post
    async fn create_post(&self, post: CreatePost) -> Result<Post>;

    /// Apply the supplied fields to an existing post
    async fn update_post(&self, id: PostId, post: UpdatePost) -> Result<Post>;

    /// Delete a post
    async fn delete_post(&self, id: PostId) -> Result<()>;

    // ========================================================================
    // Accounts
    // ========================================================================

    /// Create a login account with an already-hashed password
    async fn create_account(&self, username: &str, password_hash: &str) -> Result<Account>;

    /// Password hash for an account, or `None` if the account does not exist
    async fn get_password_hash(&self, username: &str) -> Result<Option<String>>;

    /// Round-trip to the backing store without touching any rows
    async fn ping(&self) -> Result<()>;
}
