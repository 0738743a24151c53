use crate::{accounts, posts, users, StorageError};
use async_trait::async_trait;
use connectly_core::{error::Result, storage::Storage, types::*};
use sqlx::SqlitePool;

/// `SQLite`-backed implementation of [`Storage`]
#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) the database at `database_url` and bring
    /// its schema up to date
    pub async fn connect(database_url: &str) -> std::result::Result<Self, StorageError> {
        let pool = crate::create_pool(database_url).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    // Users
    async fn get_all_users(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        users::find_by_username(&self.pool, username).await
    }

    async fn create_user(&self, user: CreateUser) -> Result<User> {
        users::create(&self.pool, user).await
    }

    async fn update_user(&self, id: UserId, user: UpdateUser) -> Result<User> {
        users::update(&self.pool, id, user).await
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        users::delete(&self.pool, id).await
    }

    // Posts
    async fn get_all_posts(&self) -> Result<Vec<Post>> {
        posts::get_all(&self.pool).await
    }

    async fn get_post(&self, id: PostId) -> Result<Option<Post>> {
        posts::get_by_id(&self.pool, id).await
    }

    async fn create_post(&self, post: CreatePost) -> Result<Post> {
        posts::create(&self.pool, post).await
    }

    async fn update_post(&self, id: PostId, post: UpdatePost) -> Result<Post> {
        posts::update(&self.pool, id, post).await
    }

    async fn delete_post(&self, id: PostId) -> Result<()> {
        posts::delete(&self.pool, id).await
    }

    // Accounts
    async fn create_account(&self, username: &str, password_hash: &str) -> Result<Account> {
        accounts::create(&self.pool, username, password_hash).await
    }

    async fn get_password_hash(&self, username: &str) -> Result<Option<String>> {
        accounts::get_password_hash(&self.pool, username).await
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
