//! Google OAuth Integration
//!
//! Builds the Google authorization URL. Token exchange and the
//! callback flow live with the identity provider client and are out of
//! scope for this module.

use crate::application::config::UserConfig;
use crate::application::service::OauthProvider;
use crate::error::{UserError, UserResult};

/// Google's OAuth 2.0 authorization endpoint
const GOOGLE_AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Scopes requested for sign-in
const GOOGLE_SCOPES: &str = "openid email profile";

/// Google OAuth URL builder
#[derive(Debug, Clone)]
pub struct GoogleOauth {
    client_id: String,
    redirect_uri: String,
}

impl GoogleOauth {
    pub fn new(config: &UserConfig) -> Self {
        Self {
            client_id: config.google_client_id.clone(),
            redirect_uri: config.google_redirect_uri.clone(),
        }
    }
}

impl OauthProvider for GoogleOauth {
    async fn authorization_url(&self, state: &str) -> UserResult<String> {
        if self.client_id.is_empty() || self.redirect_uri.is_empty() {
            return Err(UserError::OauthNotConfigured);
        }

        let params = [
            ("response_type", "code"),
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("scope", GOOGLE_SCOPES),
            ("state", state),
            ("access_type", "offline"),
        ];

        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        Ok(format!("{}?{}", GOOGLE_AUTH_ENDPOINT, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> GoogleOauth {
        let config = UserConfig {
            google_client_id: "client-123.apps.googleusercontent.com".to_string(),
            google_redirect_uri: "https://app.example.com/oauth/callback".to_string(),
            ..UserConfig::default()
        };
        GoogleOauth::new(&config)
    }

    #[tokio::test]
    async fn test_authorization_url_contains_encoded_params() {
        let url = configured().authorization_url("state-abc").await.unwrap();

        assert!(url.starts_with(GOOGLE_AUTH_ENDPOINT));
        assert!(url.contains("client_id=client-123.apps.googleusercontent.com"));
        assert!(url.contains("redirect_uri=https%3A%2F%2Fapp.example.com%2Foauth%2Fcallback"));
        assert!(url.contains("scope=openid%20email%20profile"));
        assert!(url.contains("state=state-abc"));
    }

    #[tokio::test]
    async fn test_unconfigured_client_is_an_error() {
        let oauth = GoogleOauth::new(&UserConfig::default());
        let result = oauth.authorization_url("state").await;

        assert!(matches!(result, Err(UserError::OauthNotConfigured)));
    }
}
