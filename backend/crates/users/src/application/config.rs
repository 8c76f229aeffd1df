//! Application Configuration
//!
//! Configuration for the users application layer: token signing and
//! the Google OAuth client.

use std::time::Duration;

/// Users application configuration
#[derive(Debug, Clone)]
pub struct UserConfig {
    /// Secret used to sign and verify access tokens
    pub token_secret: Vec<u8>,
    /// Access token lifetime
    pub token_ttl: Duration,
    /// Google OAuth client id (empty = OAuth disabled)
    pub google_client_id: String,
    /// Redirect URI registered with the OAuth client
    pub google_redirect_uri: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            token_secret: Vec::new(),
            token_ttl: Duration::from_secs(3600), // 1 hour
            google_client_id: String::new(),
            google_redirect_uri: String::new(),
        }
    }
}

impl UserConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Access token lifetime in whole seconds
    pub fn token_ttl_secs(&self) -> u64 {
        self.token_ttl.as_secs()
    }

    /// Whether a Google OAuth client is configured
    pub fn google_oauth_enabled(&self) -> bool {
        !self.google_client_id.is_empty()
    }
}
