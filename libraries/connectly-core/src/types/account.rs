//! Account types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Login identity. Separate from [`super::User`]; the two are linked only by
/// username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Login name, also the `sub` of issued tokens
    pub username: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}
