/// Authentication API routes
use crate::{
    error::Result,
    services::{TokenPair, TokenType},
    state::AppState,
};
use axum::{extract::State, Json};
use connectly_core::Principal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub tokens: TokenPair,
    pub token_type: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// POST /api/auth/login
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let stored_hash = app_state.storage.get_password_hash(&req.username).await?;
    let principal = Principal::new(req.username);

    let tokens =
        app_state
            .auth_service
            .sign_in(&principal, &req.password, stored_hash.as_deref())?;

    app_state
        .logger
        .info(format_args!("{} signed in", principal.username()));

    Ok(Json(LoginResponse {
        tokens,
        token_type: "Bearer",
    }))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(app_state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>> {
    let auth = &app_state.auth_service;
    let principal = auth.verify(&req.refresh_token, TokenType::Refresh)?;

    Ok(Json(RefreshResponse {
        access_token: auth.issue(&principal, TokenType::Access)?,
        token_type: "Bearer",
    }))
}
