//! Connectly Core
//!
//! Domain types, traits, and error handling shared by the Connectly storage
//! layer and HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Post`, `Principal`
//! - **Core Traits**: `Storage` (repository interface for users, posts, accounts)
//! - **Business Rules**: field validation and the post authorship check
//! - **Process State**: the shared `SettingsStore`
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use connectly_core::permissions::is_post_author;
//! use connectly_core::types::{Post, Principal};
//!
//! let post = Post::new(1, "hello", 7, "alice");
//! assert!(is_post_author(&Principal::new("alice"), &post));
//! assert!(!is_post_author(&Principal::new("bob"), &post));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod permissions;
pub mod settings;
pub mod storage;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use settings::SettingsStore;
pub use storage::Storage;

pub use types::{
    Account, CreatePost, CreateUser, Post, PostId, Principal, UpdatePost, UpdateUser, User,
    UserId,
};
