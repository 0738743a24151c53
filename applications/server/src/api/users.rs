/// User API routes
///
/// Reads are public. Writes need an authenticated caller but no ownership:
/// any account may edit or delete any user.
use crate::{error::Result, middleware::AuthenticatedUser, state::AppState};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use connectly_core::{
    types::{CreateUser, UpdateUser, User, UserId},
    validation::{reject_blank, require_fields},
    CoreError,
};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/users`. Fields are optional here so that absence is
/// reported as a validation error rather than a parse failure.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(self) -> connectly_core::Result<CreateUser> {
        require_fields(&[
            ("username", self.username.as_deref()),
            ("email", self.email.as_deref()),
        ])?;

        Ok(CreateUser {
            username: self.username.unwrap_or_default().trim().to_string(),
            email: self.email.unwrap_or_default().trim().to_string(),
        })
    }
}

/// Body of `PUT`/`PATCH /api/users/:id`. `id` and `created_at` are not
/// accepted and are ignored if sent.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserRequest {
    pub fn validate(self) -> connectly_core::Result<UpdateUser> {
        reject_blank("username", self.username.as_deref())?;
        reject_blank("email", self.email.as_deref())?;

        Ok(UpdateUser {
            username: self.username.map(|v| v.trim().to_string()),
            email: self.email.map(|v| v.trim().to_string()),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub user: User,
}

/// GET /api/users
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.storage.get_all_users().await?;
    Ok(Json(users))
}

/// POST /api/users
pub async fn create_user(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    payload: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateUserResponse>)> {
    let Json(req) = payload?;
    let new_user = req.validate()?;

    let user = app_state.storage.create_user(new_user).await?;
    app_state.logger.info(format_args!(
        "User {} ({}) created by {}",
        user.id,
        user.username,
        auth.username()
    ));

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: "User created successfully".to_string(),
            user,
        }),
    ))
}

/// GET /api/users/:id
pub async fn get_user(
    path: std::result::Result<Path<UserId>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let Path(id) = path?;
    let user = app_state
        .storage
        .get_user(id)
        .await?
        .ok_or_else(|| CoreError::not_found("User", id))?;

    Ok(Json(user))
}

/// PUT /api/users/:id
pub async fn update_user(
    path: std::result::Result<Path<UserId>, PathRejection>,
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
    payload: std::result::Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<User>> {
    let Path(id) = path?;
    let Json(req) = payload?;
    let changes = req.validate()?;

    let user = app_state.storage.update_user(id, changes).await?;
    Ok(Json(user))
}

/// DELETE /api/users/:id
pub async fn delete_user(
    path: std::result::Result<Path<UserId>, PathRejection>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<StatusCode> {
    let Path(id) = path?;
    app_state.storage.delete_user(id).await?;
    app_state
        .logger
        .info(format_args!("User {} deleted by {}", id, auth.username()));

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_reports_missing_email() {
        let req = CreateUserRequest {
            username: Some("incompleteuser".to_string()),
            email: None,
        };
        let err = req.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing field: email");
    }

    #[test]
    fn test_create_request_trims() {
        let req = CreateUserRequest {
            username: Some("  newuser ".to_string()),
            email: Some("newuser@example.com".to_string()),
        };
        let user = req.validate().unwrap();
        assert_eq!(user.username, "newuser");
    }

    #[test]
    fn test_update_request_rejects_blank() {
        let req = UpdateUserRequest {
            username: None,
            email: Some("   ".to_string()),
        };
        assert!(req.validate().is_err());
    }
}
