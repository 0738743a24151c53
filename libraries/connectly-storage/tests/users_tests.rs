mod test_helpers;

use connectly_core::types::{CreateUser, UpdateUser};
use connectly_core::{CoreError, Storage};
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_user() {
    let db = TestDb::new().await;

    let user = create_test_user(&db.storage, "alice").await;
    assert!(user.id > 0);
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");

    let fetched = db.storage.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(fetched, user);
}

#[tokio::test]
async fn test_ids_are_unique() {
    let db = TestDb::new().await;

    let a = create_test_user(&db.storage, "alice").await;
    let b = create_test_user(&db.storage, "bob").await;
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_get_all_users_in_creation_order() {
    let db = TestDb::new().await;

    create_test_user(&db.storage, "carol").await;
    create_test_user(&db.storage, "alice").await;
    create_test_user(&db.storage, "bob").await;

    let names: Vec<String> = db
        .storage
        .get_all_users()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    assert_eq!(names, vec!["carol", "alice", "bob"]);
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let db = TestDb::new().await;

    create_test_user(&db.storage, "alice").await;
    let result = db
        .storage
        .create_user(CreateUser {
            username: "alice".to_string(),
            email: "other@example.com".to_string(),
        })
        .await;

    assert!(matches!(result, Err(CoreError::Duplicate(_))));
    assert_eq!(db.storage.get_all_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_find_by_username() {
    let db = TestDb::new().await;

    let user = create_test_user(&db.storage, "alice").await;
    let found = db.storage.find_user_by_username("alice").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(user.id));

    assert!(db
        .storage
        .find_user_by_username("nobody")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let db = TestDb::new().await;

    let user = create_test_user(&db.storage, "alice").await;
    let updated = db
        .storage
        .update_user(
            user.id,
            UpdateUser {
                username: None,
                email: Some("new@example.com".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.username, "alice");
    assert_eq!(updated.email, "new@example.com");
    assert_eq!(updated.created_at, user.created_at);
}

#[tokio::test]
async fn test_update_missing_user() {
    let db = TestDb::new().await;

    let result = db.storage.update_user(404, UpdateUser::default()).await;
    assert!(matches!(result, Err(CoreError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete_user() {
    let db = TestDb::new().await;

    let user = create_test_user(&db.storage, "alice").await;
    db.storage.delete_user(user.id).await.unwrap();
    assert!(db.storage.get_user(user.id).await.unwrap().is_none());

    let again = db.storage.delete_user(user.id).await;
    assert!(matches!(again, Err(CoreError::NotFound { .. })));
}

#[tokio::test]
async fn test_accounts_are_separate_from_users() {
    let db = TestDb::new().await;

    db.storage.create_account("alice", "$2b$hash").await.unwrap();
    assert_eq!(
        db.storage.get_password_hash("alice").await.unwrap(),
        Some("$2b$hash".to_string())
    );
    assert!(db.storage.get_password_hash("bob").await.unwrap().is_none());

    // An account does not imply a user profile
    assert!(db
        .storage
        .find_user_by_username("alice")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_list_accounts() {
    let db = TestDb::new().await;

    db.storage.create_account("bob", "h1").await.unwrap();
    db.storage.create_account("alice", "h2").await.unwrap();

    let names: Vec<String> = connectly_storage::accounts::get_all(db.storage.pool())
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.username)
        .collect();
    assert_eq!(names, vec!["alice", "bob"]);
}
