/// Settings API routes
use crate::{error::Result, middleware::AuthenticatedUser, state::AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use connectly_core::CoreError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct SetSettingRequest {
    pub value: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct SettingResponse {
    pub key: String,
    pub value: Value,
}

/// GET /api/settings
pub async fn list_settings(State(app_state): State<AppState>) -> Json<HashMap<String, Value>> {
    Json(app_state.settings.get_all())
}

/// GET /api/settings/:key
pub async fn get_setting(
    Path(key): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<SettingResponse>> {
    let value = app_state
        .settings
        .get(&key)
        .ok_or_else(|| CoreError::not_found("Setting", &key))?;

    Ok(Json(SettingResponse { key, value }))
}

/// PUT /api/settings/:key
pub async fn set_setting(
    Path(key): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    payload: std::result::Result<Json<SetSettingRequest>, JsonRejection>,
) -> Result<Json<SettingResponse>> {
    let Json(req) = payload?;
    let value = req
        .value
        .ok_or_else(|| CoreError::MissingFields(vec!["value".to_string()]))?;

    app_state.settings.set(key.clone(), value.clone());
    app_state
        .logger
        .info(format_args!("Setting {} changed by {}", key, auth.username()));

    Ok(Json(SettingResponse { key, value }))
}
