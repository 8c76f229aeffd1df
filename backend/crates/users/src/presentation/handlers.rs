//! HTTP Handlers
//!
//! One handler per route, all following the same shape: parse the
//! body (where there is one), validate, delegate to the domain
//! service, and wrap the outcome in the response envelope. Exactly one
//! envelope is produced per invocation.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use validator::Validate;

use kernel::response::Envelope;

use crate::application::service::{LoginInput, ProfileInput, RegisterInput, UserService};
use crate::error::{UserError, UserResult};
use crate::presentation::dto::{
    LoginRequest, LoginResponse, OauthGoogleUrlResponse, ProfileResponse, RegisterRequest,
    RegisterResponse,
};
use crate::presentation::middleware::AuthUser;

/// Shared state for user handlers
pub struct UserAppState<S>
where
    S: UserService + Send + Sync + 'static,
{
    pub service: Arc<S>,
}

impl<S> Clone for UserAppState<S>
where
    S: UserService + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /users/register
pub async fn register<S>(
    State(state): State<UserAppState<S>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> UserResult<impl IntoResponse>
where
    S: UserService + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| {
        tracing::warn!(error = %e, "handler::register: failed to parse request body");
        UserError::BodyParse(e.body_text())
    })?;

    if let Err(errors) = req.validate() {
        tracing::warn!(error = %errors, "handler::register: invalid request body");
        return Err(UserError::Validation(errors));
    }

    let output = state
        .service
        .register(RegisterInput {
            email: req.email,
            full_name: req.full_name,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(RegisterResponse::from(output), "")),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /users/login
pub async fn login<S>(
    State(state): State<UserAppState<S>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> UserResult<impl IntoResponse>
where
    S: UserService + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| {
        tracing::warn!(error = %e, "handler::login: failed to parse request body");
        UserError::BodyParse(e.body_text())
    })?;

    if let Err(errors) = req.validate() {
        tracing::warn!(error = %errors, "handler::login: invalid request body");
        return Err(UserError::Validation(errors));
    }

    let output = state
        .service
        .login(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::success(LoginResponse::from(output), "")),
    ))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /users/profile
///
/// No body. The user id comes exclusively from the verified principal
/// set by the bearer-auth middleware.
pub async fn profile<S>(
    State(state): State<UserAppState<S>>,
    user: AuthUser,
) -> UserResult<impl IntoResponse>
where
    S: UserService + Send + Sync + 'static,
{
    let output = state
        .service
        .profile(ProfileInput {
            user_id: user.user_id,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::success(ProfileResponse::from(output), "")),
    ))
}

// ============================================================================
// OAuth
// ============================================================================

/// GET /users/oauth/google/url
pub async fn oauth_google_url<S>(
    State(state): State<UserAppState<S>>,
) -> UserResult<impl IntoResponse>
where
    S: UserService + Send + Sync + 'static,
{
    let output = state.service.oauth_google_url().await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::success(OauthGoogleUrlResponse::from(output), "")),
    ))
}
