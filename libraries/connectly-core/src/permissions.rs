//! Authorization rules

use crate::types::{Post, Principal};

/// Whether `principal` may modify or delete `post`.
///
/// The caller's account and the post's author are different identity models
/// that share only a username, so the check is an exact username comparison.
/// Two identities with the same username are treated as the same author.
pub fn is_post_author(principal: &Principal, post: &Post) -> bool {
    post.author_username == principal.username()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_username_is_author() {
        let post = Post::new(1, "hi", 10, "alice");
        assert!(is_post_author(&Principal::new("alice"), &post));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let post = Post::new(1, "hi", 10, "alice");
        assert!(!is_post_author(&Principal::new("Alice"), &post));
    }

    #[test]
    fn test_author_id_is_not_consulted() {
        // Same username, different author row: still the author.
        let post = Post::new(1, "hi", 99, "alice");
        assert!(is_post_author(&Principal::new("alice"), &post));
    }
}
