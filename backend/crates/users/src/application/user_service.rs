//! User Service Implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::application::config::UserConfig;
use crate::application::service::{
    LoginInput, LoginOutput, OauthProvider, OauthUrlOutput, ProfileInput, ProfileOutput,
    RegisterInput, RegisterOutput, UserService,
};
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};

/// Normalize an email for storage and lookup.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// `UserService` backed by a repository and an OAuth provider.
pub struct UserServiceImpl<R, O>
where
    R: UserRepository,
    O: OauthProvider,
{
    repo: R,
    oauth: O,
    config: Arc<UserConfig>,
}

impl<R, O> UserServiceImpl<R, O>
where
    R: UserRepository,
    O: OauthProvider,
{
    pub fn new(repo: R, oauth: O, config: Arc<UserConfig>) -> Self {
        Self {
            repo,
            oauth,
            config,
        }
    }
}

impl<R, O> UserService for UserServiceImpl<R, O>
where
    R: UserRepository + Send + Sync,
    O: OauthProvider + Send + Sync,
{
    async fn register(&self, input: RegisterInput) -> UserResult<RegisterOutput> {
        let email = normalize_email(&input.email);

        if self.repo.exists_by_email(&email).await? {
            return Err(UserError::EmailTaken);
        }

        let password_hash = platform::password::hash_password(&input.password)?;
        let user = User::new(email, input.full_name.trim().to_string(), password_hash);

        self.repo.create(&user).await?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(RegisterOutput {
            user_id: user.user_id,
            email: user.email,
            full_name: user.full_name,
        })
    }

    async fn login(&self, input: LoginInput) -> UserResult<LoginOutput> {
        let email = normalize_email(&input.email);

        // Unknown email and wrong password produce the same error
        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !platform::password::verify_password(&input.password, &user.password_hash)? {
            return Err(UserError::InvalidCredentials);
        }

        let access_token = platform::token::issue_access_token(
            &self.config.token_secret,
            &user.user_id.to_string(),
            self.config.token_ttl,
        )?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            access_token,
            expires_in: self.config.token_ttl_secs(),
        })
    }

    async fn profile(&self, input: ProfileInput) -> UserResult<ProfileOutput> {
        let user = self
            .repo
            .find_by_id(input.user_id)
            .await?
            .ok_or(UserError::UserNotFound)?;

        Ok(ProfileOutput {
            user_id: user.user_id,
            email: user.email,
            full_name: user.full_name,
            registered_at: user.created_at,
        })
    }

    async fn oauth_google_url(&self) -> UserResult<OauthUrlOutput> {
        // Fresh CSRF state per issued URL
        let state = Uuid::new_v4().simple().to_string();
        let url = self.oauth.authorization_url(&state).await?;

        Ok(OauthUrlOutput { url })
    }
}
