//! The authenticated caller

use serde::{Deserialize, Serialize};

/// Identity of the caller making a request, as established by a verified
/// access token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal {
    username: String,
}

impl Principal {
    /// Create a principal for the given account username
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// Account username of the caller
    pub fn username(&self) -> &str {
        &self.username
    }
}
