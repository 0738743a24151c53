/// Health check API routes
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
    pub settings: usize,
}

/// GET /api/health
///
/// 503 when the database cannot be reached.
pub async fn health(State(app_state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, database) = match app_state.storage.ping().await {
        Ok(()) => (StatusCode::OK, "reachable"),
        Err(e) => {
            app_state
                .logger
                .warn(format_args!("Health check could not reach database: {e}"));
            (StatusCode::SERVICE_UNAVAILABLE, "unreachable")
        }
    };

    let body = HealthResponse {
        status: if status.is_success() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
        settings: app_state.settings.get_all().len(),
    };

    (status, Json(body))
}
