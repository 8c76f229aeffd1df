//! User Module Error Types
//!
//! Module-specific error variants that integrate with the unified
//! `kernel::error::AppError` classifier. Each variant maps to exactly
//! one `ErrorKind`, so every failure is classified once and produces
//! one response envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::validation_fields;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// User-module result type alias
pub type UserResult<T> = Result<T, UserError>;

/// User-module error variants
#[derive(Debug, Error)]
pub enum UserError {
    /// Request body could not be parsed; carries the raw parser message
    #[error("{0}")]
    BodyParse(String),

    /// Well-formed body violating validation rules
    #[error("Request validation failed")]
    Validation(validator::ValidationErrors),

    /// Email is already registered
    #[error("Email is already registered")]
    EmailTaken,

    /// Unknown email or wrong password (deliberately indistinguishable)
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// User lookup miss
    #[error("User not found")]
    UserNotFound,

    /// Missing or malformed Authorization header
    #[error("Missing bearer token")]
    MissingBearerToken,

    /// Bearer token expired
    #[error("Access token has expired")]
    TokenExpired,

    /// Bearer token failed verification
    #[error("Access token is invalid")]
    TokenInvalid,

    /// Google OAuth client is not configured
    #[error("Google OAuth is not configured")]
    OauthNotConfigured,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Classification for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::BodyParse(_) | UserError::Validation(_) => ErrorKind::BadRequest,
            UserError::EmailTaken => ErrorKind::Conflict,
            UserError::InvalidCredentials
            | UserError::MissingBearerToken
            | UserError::TokenExpired
            | UserError::TokenInvalid => ErrorKind::Unauthorized,
            UserError::UserNotFound => ErrorKind::NotFound,
            UserError::OauthNotConfigured => ErrorKind::ServiceUnavailable,
            UserError::Database(_) | UserError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert into the unified error, carrying field detail when present.
    pub fn into_app_error(self) -> AppError {
        match self {
            UserError::Validation(errors) => {
                let fields = validation_fields(&errors);
                AppError::bad_request("Request validation failed")
                    .with_field_errors(fields)
                    .with_source(errors)
            }
            // Database errors get the kernel's PostgreSQL-aware classification
            UserError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with the appropriate level
    fn log(&self) {
        match self {
            UserError::Database(e) => {
                tracing::error!(error = %e, "User database error");
            }
            UserError::Internal(msg) => {
                tracing::error!(message = %msg, "User internal error");
            }
            UserError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            UserError::TokenExpired | UserError::TokenInvalid | UserError::MissingBearerToken => {
                tracing::warn!(error = %self, "Rejected bearer token");
            }
            UserError::OauthNotConfigured => {
                tracing::warn!("OAuth URL requested without configured client");
            }
            _ => {
                tracing::debug!(error = %self, "User error");
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<validator::ValidationErrors> for UserError {
    fn from(err: validator::ValidationErrors) -> Self {
        UserError::Validation(err)
    }
}

impl From<platform::password::PasswordHashError> for UserError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        UserError::Internal(err.to_string())
    }
}

impl From<platform::token::TokenError> for UserError {
    fn from(err: platform::token::TokenError) -> Self {
        use platform::token::TokenError;
        match err {
            TokenError::Expired => UserError::TokenExpired,
            TokenError::Invalid => UserError::TokenInvalid,
            TokenError::Issuance(msg) => UserError::Internal(msg),
        }
    }
}
