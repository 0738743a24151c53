/// Authentication middleware
use crate::{
    error::ServerError,
    services::{auth::TokenType, AuthService},
};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use connectly_core::Principal;
use std::sync::Arc;

/// Extension type to store the authenticated caller in a request.
/// Can be used as an extractor in handlers that require authentication.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Principal);

impl AuthenticatedUser {
    pub fn principal(&self) -> &Principal {
        &self.0
    }

    pub fn username(&self) -> &str {
        self.0.username()
    }
}

/// Middleware that validates a JWT from the Authorization header, if any.
///
/// Requests without the header pass through anonymously; handlers that need
/// a caller reject them through the [`AuthenticatedUser`] extractor. A header
/// that is present but malformed or carries a bad token is rejected here.
pub async fn auth_middleware(
    State(auth_service): State<Arc<AuthService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let Some(auth_header) = request.headers().get(axum::http::header::AUTHORIZATION) else {
        return Ok(next.run(request).await);
    };

    // Check Bearer prefix
    let token = auth_header
        .to_str()
        .ok()
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| ServerError::Unauthorized("Malformed Authorization header".to_string()))?;

    // Verify token
    let principal = auth_service.verify(token, TokenType::Access).map_err(|e| {
        tracing::warn!("Token verification failed: {}", e);
        ServerError::Unauthorized("Invalid token".to_string())
    })?;

    // Insert caller into request extensions
    request.extensions_mut().insert(AuthenticatedUser(principal));

    Ok(next.run(request).await)
}

/// Implement FromRequestParts so AuthenticatedUser can be used as an extractor
#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| ServerError::Unauthorized("Authentication required".to_string()))
    }
}
