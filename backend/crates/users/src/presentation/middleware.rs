//! Bearer Auth Middleware
//!
//! Verifies the `Authorization: Bearer <token>` header and attaches
//! the authenticated principal to the request. Handlers receive the
//! principal as an explicit [`AuthUser`] extractor parameter rather
//! than reading ambient state, so the contract is testable without a
//! middleware stack.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::{HeaderMap, header, request::Parts};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::UserConfig;
use crate::error::UserError;

/// State for the bearer-auth middleware
#[derive(Clone)]
pub struct BearerAuthState {
    pub config: Arc<UserConfig>,
}

/// The authenticated principal, set by [`require_bearer_auth`].
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .copied()
            .ok_or_else(|| UserError::MissingBearerToken.into_response())
    }
}

/// Middleware requiring a valid bearer token.
///
/// On success the verified [`AuthUser`] is inserted into request
/// extensions; on failure the request is rejected with a 401 envelope
/// and the inner handler never runs.
pub async fn require_bearer_auth(
    State(state): State<BearerAuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| UserError::MissingBearerToken.into_response())?;

    let claims = platform::token::verify_access_token(&state.config.token_secret, token)
        .map_err(|e| UserError::from(e).into_response())?;

    let user_id =
        Uuid::parse_str(&claims.sub).map_err(|_| UserError::TokenInvalid.into_response())?;

    req.extensions_mut().insert(AuthUser { user_id });

    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}
