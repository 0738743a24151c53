/// Post API routes
use crate::{
    error::{Result, ServerError},
    middleware::AuthenticatedUser,
    state::AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use connectly_core::{
    permissions::is_post_author,
    types::{CreatePost, Post, PostId, UpdatePost},
    validation::{reject_blank, require_fields},
    CoreError,
};
use serde::Deserialize;

/// Body of `POST /api/posts`. Any author field in the body is ignored; the
/// author always comes from the caller's identity.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub content: Option<String>,
}

/// GET /api/posts
pub async fn list_posts(State(app_state): State<AppState>) -> Result<Json<Vec<Post>>> {
    let posts = app_state.storage.get_all_posts().await?;
    Ok(Json(posts))
}

/// POST /api/posts
pub async fn create_post(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    payload: std::result::Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>)> {
    let Json(req) = payload?;
    require_fields(&[("content", req.content.as_deref())])?;

    // Accounts and user profiles are linked by username
    let author = app_state
        .storage
        .find_user_by_username(auth.username())
        .await?
        .ok_or_else(|| {
            ServerError::Forbidden(format!(
                "No user profile exists for account '{}'",
                auth.username()
            ))
        })?;

    let post = app_state
        .storage
        .create_post(CreatePost {
            content: req.content.unwrap_or_default(),
            author_id: author.id,
        })
        .await?;

    app_state
        .logger
        .info(format_args!("Post {} created by {}", post.id, auth.username()));

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/posts/:id
pub async fn get_post(
    path: std::result::Result<Path<PostId>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<Json<Post>> {
    let Path(id) = path?;
    let post = find_post(&app_state, id).await?;
    Ok(Json(post))
}

/// PUT /api/posts/:id
pub async fn update_post(
    path: std::result::Result<Path<PostId>, PathRejection>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    payload: std::result::Result<Json<UpdatePostRequest>, JsonRejection>,
) -> Result<Json<Post>> {
    let Path(id) = path?;
    let post = find_post(&app_state, id).await?;
    ensure_author(&app_state, &auth, &post)?;

    let Json(req) = payload?;
    reject_blank("content", req.content.as_deref())?;
    let post = app_state
        .storage
        .update_post(
            id,
            UpdatePost {
                content: req.content,
            },
        )
        .await?;

    Ok(Json(post))
}

/// DELETE /api/posts/:id
pub async fn delete_post(
    path: std::result::Result<Path<PostId>, PathRejection>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<StatusCode> {
    let Path(id) = path?;
    let post = find_post(&app_state, id).await?;
    ensure_author(&app_state, &auth, &post)?;

    app_state.storage.delete_post(id).await?;
    app_state
        .logger
        .info(format_args!("Post {} deleted by {}", id, auth.username()));

    Ok(StatusCode::NO_CONTENT)
}

async fn find_post(app_state: &AppState, id: PostId) -> Result<Post> {
    let post = app_state
        .storage
        .get_post(id)
        .await?
        .ok_or_else(|| CoreError::not_found("Post", id))?;
    Ok(post)
}

fn ensure_author(app_state: &AppState, auth: &AuthenticatedUser, post: &Post) -> Result<()> {
    if is_post_author(auth.principal(), post) {
        return Ok(());
    }

    app_state.logger.warn(format_args!(
        "{} denied write access to post {} owned by {}",
        auth.username(),
        post.id,
        post.author_username
    ));
    Err(CoreError::permission_denied("Only the author may modify this post").into())
}
