//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use connectly_core::{types::User, CreateUser, Principal, SettingsStore, Storage};
use connectly_server::{
    create_router, logging,
    services::{AuthService, TokenType},
    state::AppState,
};
use connectly_storage::SqliteStorage;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key";

/// A fully wired router over a throwaway database file
pub struct TestApp {
    pub router: Router,
    pub storage: Arc<SqliteStorage>,
    pub auth_service: Arc<AuthService>,
    pub settings: Arc<SettingsStore>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_settings(Arc::new(SettingsStore::with_defaults())).await
    }

    pub async fn with_settings(settings: Arc<SettingsStore>) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let url = format!("sqlite://{}", db_path.display());
        let storage = Arc::new(SqliteStorage::connect(&url).await.unwrap());

        let auth_service = Arc::new(AuthService::new(TEST_SECRET.to_string(), 1, 1));

        let app_state = AppState::new(
            Arc::clone(&storage) as Arc<dyn Storage>,
            Arc::clone(&auth_service),
            Arc::clone(&settings),
            logging::logger(),
        );

        Self {
            router: create_router(app_state),
            storage,
            auth_service,
            settings,
            _temp_dir: temp_dir,
        }
    }

    /// Access token for `username`; no account row is needed to use it
    pub fn token_for(&self, username: &str) -> String {
        self.auth_service
            .issue(&Principal::new(username), TokenType::Access)
            .unwrap()
    }

    /// Store a login account with a hashed password
    pub async fn create_account(&self, username: &str, password: &str) {
        let hash = self.auth_service.hash_password(password).unwrap();
        self.storage.create_account(username, &hash).await.unwrap();
    }

    /// Insert a user profile directly through storage
    pub async fn create_user(&self, username: &str) -> User {
        self.storage
            .create_user(CreateUser {
                username: username.to_string(),
                email: format!("{username}@example.com"),
            })
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }
}
