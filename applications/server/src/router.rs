/// HTTP routing
use crate::{api, middleware, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router, with every route under `/api`.
///
/// The auth middleware runs on every route. It only rejects requests whose
/// Authorization header is present but invalid; routes that need a caller
/// take [`middleware::AuthenticatedUser`].
pub fn create_router(app_state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/auth/login", post(api::auth::login))
        .route("/auth/refresh", post(api::auth::refresh));

    let resource_routes = Router::new()
        // Users
        .route(
            "/users",
            get(api::users::list_users).post(api::users::create_user),
        )
        .route(
            "/users/:id",
            get(api::users::get_user)
                .put(api::users::update_user)
                .patch(api::users::update_user)
                .delete(api::users::delete_user),
        )
        // Posts
        .route(
            "/posts",
            get(api::posts::list_posts).post(api::posts::create_post),
        )
        .route(
            "/posts/:id",
            get(api::posts::get_post)
                .put(api::posts::update_post)
                .patch(api::posts::update_post)
                .delete(api::posts::delete_post),
        )
        // Settings
        .route("/settings", get(api::settings::list_settings))
        .route(
            "/settings/:key",
            get(api::settings::get_setting).put(api::settings::set_setting),
        );

    Router::new()
        .nest("/api", public_routes.merge(resource_routes))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&app_state.auth_service),
            middleware::auth_middleware,
        ))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
