//! User types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row id of a user profile
pub type UserId = i64;

/// A user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by storage on insert
    pub id: UserId,
    /// Unique across users; links the profile to a login account
    pub username: String,
    /// Contact address
    pub email: String,
    /// Set once on insert
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Requested username, trimmed and non-blank
    pub username: String,
    /// Contact address, trimmed and non-blank
    pub email: String,
}

/// Partial update of a user; `None` leaves the column untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New username, if changing
    pub username: Option<String>,
    /// New email, if changing
    pub email: Option<String>,
}
