//! Process-wide settings store
//!
//! A string-keyed map of JSON values seeded with fixed defaults. One shared
//! instance exists per process; it is built under a [`OnceLock`] on first
//! access and handed to request handlers through application state. Nothing
//! is persisted across restarts.
//!
//! ```rust
//! use connectly_core::settings::{SettingsStore, RATE_LIMIT};
//!
//! let store = SettingsStore::shared();
//! assert_eq!(store.get(RATE_LIMIT), Some(serde_json::json!(50)));
//! ```

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Default priority assigned to new tasks
pub const DEFAULT_TASK_PRIORITY: &str = "DEFAULT_TASK_PRIORITY";

/// Whether notifications are sent
pub const ENABLE_NOTIFICATIONS: &str = "ENABLE_NOTIFICATIONS";

/// Requests allowed per window
pub const RATE_LIMIT: &str = "RATE_LIMIT";

static SHARED: OnceLock<Arc<SettingsStore>> = OnceLock::new();

/// In-memory settings map
#[derive(Debug)]
pub struct SettingsStore {
    values: RwLock<HashMap<String, Value>>,
}

impl SettingsStore {
    /// Create a store seeded with the default settings
    pub fn with_defaults() -> Self {
        let values = HashMap::from([
            (DEFAULT_TASK_PRIORITY.to_string(), Value::from("Medium")),
            (ENABLE_NOTIFICATIONS.to_string(), Value::from(true)),
            (RATE_LIMIT.to_string(), Value::from(50)),
        ]);
        Self {
            values: RwLock::new(values),
        }
    }

    /// The process-wide instance. Every call returns the same `Arc`.
    pub fn shared() -> Arc<Self> {
        Arc::clone(SHARED.get_or_init(|| Arc::new(Self::with_defaults())))
    }

    /// Value for `key`, if set
    pub fn get(&self, key: &str) -> Option<Value> {
        self.read().get(key).cloned()
    }

    /// Insert or overwrite `key`
    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.write().insert(key.into(), value);
    }

    /// Snapshot of every setting. Changes to the returned map do not reach
    /// the store.
    pub fn get_all(&self) -> HashMap<String, Value> {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Value>> {
        self.values.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Value>> {
        self.values.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}
