//! Post types

use super::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row id of a post
pub type PostId = i64;

/// A post, as exposed to clients.
///
/// `author_username` is a read-only projection of the author's current
/// username. The author id is kept for storage joins and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Assigned by storage on insert
    pub id: PostId,
    /// Post body
    pub content: String,
    /// Id of the authoring user
    #[serde(skip_serializing, default)]
    pub author_id: UserId,
    /// Current username of the author
    pub author_username: String,
    /// Set once on insert
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Build a post stamped with the current time
    pub fn new(
        id: PostId,
        content: impl Into<String>,
        author_id: UserId,
        author_username: impl Into<String>,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            author_id,
            author_username: author_username.into(),
            created_at: Utc::now(),
        }
    }
}

/// Data for creating a new post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    /// Post body, already validated as non-blank
    pub content: String,
    /// Resolved from the caller, never from client input
    pub author_id: UserId,
}

/// Partial update of a post. The author is not updatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePost {
    /// New body, if changing
    pub content: Option<String>,
}
