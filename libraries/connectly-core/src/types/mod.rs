//! Domain types

mod account;
mod post;
mod principal;
mod user;

pub use account::Account;
pub use post::{CreatePost, Post, PostId, UpdatePost};
pub use principal::Principal;
pub use user::{CreateUser, UpdateUser, User, UserId};
