//! User Service Contract
//!
//! The domain-service interface the HTTP layer depends on, with its
//! input/output value types, plus the outbound OAuth provider port.
//! Inputs are built fresh per request and never outlive the handler
//! invocation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::UserResult;

/// Registration input
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

/// Registration output: the created account
#[derive(Debug, Clone)]
pub struct RegisterOutput {
    pub user_id: Uuid,
    pub email: String,
    pub full_name: String,
}

/// Login input
#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output: an issued bearer token
#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub access_token: String,
    pub expires_in: u64,
}

/// Profile input
///
/// `user_id` comes exclusively from the verified bearer token; it is
/// never populated from client-supplied body data.
#[derive(Debug, Clone, Copy)]
pub struct ProfileInput {
    pub user_id: Uuid,
}

/// Profile output
#[derive(Debug, Clone)]
pub struct ProfileOutput {
    pub user_id: Uuid,
    pub email: String,
    pub full_name: String,
    pub registered_at: DateTime<Utc>,
}

/// OAuth authorization URL output
#[derive(Debug, Clone)]
pub struct OauthUrlOutput {
    pub url: String,
}

/// User domain service
///
/// One operation per HTTP route. Implementations own all business
/// rules; the HTTP layer only parses, validates, delegates, and shapes
/// the response.
#[trait_variant::make(UserService: Send)]
pub trait LocalUserService {
    /// Create a new account
    async fn register(&self, input: RegisterInput) -> UserResult<RegisterOutput>;

    /// Check credentials and issue an access token
    async fn login(&self, input: LoginInput) -> UserResult<LoginOutput>;

    /// Fetch the authenticated user's profile
    async fn profile(&self, input: ProfileInput) -> UserResult<ProfileOutput>;

    /// Build the Google OAuth authorization URL
    async fn oauth_google_url(&self) -> UserResult<OauthUrlOutput>;
}

/// Outbound port for the OAuth integration
#[trait_variant::make(OauthProvider: Send)]
pub trait LocalOauthProvider {
    /// Build an authorization URL carrying the given `state` parameter
    async fn authorization_url(&self, state: &str) -> UserResult<String>;
}
