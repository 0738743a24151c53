//! Property-based tests for the authorization rule and settings store
//!
//! Uses proptest to verify invariants across many random inputs.

use connectly_core::permissions::is_post_author;
use connectly_core::settings::SettingsStore;
use connectly_core::types::{Post, Principal};
use proptest::prelude::*;
use serde_json::json;

// ===== Helpers =====

fn arbitrary_username() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.@+-]{1,150}"
}

fn arbitrary_post(author: String) -> impl Strategy<Value = Post> {
    ("[ -~]{1,200}", 1i64..10_000, 1i64..10_000).prop_map(move |(content, id, author_id)| {
        Post::new(id, content, author_id, author.clone())
    })
}

// ===== Property Tests =====

proptest! {
    /// Property: a caller sharing the author's username always passes
    #[test]
    fn same_username_always_passes(
        (username, post) in arbitrary_username()
            .prop_flat_map(|u| (Just(u.clone()), arbitrary_post(u)))
    ) {
        prop_assert!(is_post_author(&Principal::new(username), &post));
    }

    /// Property: a caller with any other username always fails
    #[test]
    fn different_username_always_fails(
        author in arbitrary_username(),
        caller in arbitrary_username(),
        content in "[ -~]{1,50}",
    ) {
        prop_assume!(author != caller);
        let post = Post::new(1, content, 1, author);
        prop_assert!(!is_post_author(&Principal::new(caller), &post));
    }

    /// Property: snapshots never leak writes back into the store
    #[test]
    fn snapshot_mutation_never_reaches_store(
        key in "[A-Z_]{1,20}",
        stored in any::<i64>(),
        scribbled in any::<i64>(),
    ) {
        let store = SettingsStore::with_defaults();
        store.set(key.clone(), json!(stored));

        let mut snapshot = store.get_all();
        snapshot.insert(key.clone(), json!(scribbled));

        prop_assert_eq!(store.get(&key), Some(json!(stored)));
    }
}

#[test]
fn shared_store_is_one_instance() {
    let first = SettingsStore::shared();
    let second = SettingsStore::shared();
    assert!(std::sync::Arc::ptr_eq(&first, &second));

    first.set("SHARED_PROBE", json!("written through first"));
    assert_eq!(
        second.get("SHARED_PROBE"),
        Some(json!("written through first"))
    );
}
