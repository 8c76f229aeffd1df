//! Bearer Access Tokens
//!
//! Issues and verifies short-lived JWT access tokens (HS256). The
//! token carries only the subject id plus issued-at/expiry timestamps;
//! verification distinguishes expiry from tampering so callers can log
//! them differently.

use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the user id the token was issued for
    pub sub: String,
    /// Issued at (Unix seconds)
    pub iat: u64,
    /// Expiry (Unix seconds)
    pub exp: u64,
}

/// Token issuance/verification errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Token was valid once but its expiry has passed
    #[error("Access token has expired")]
    Expired,

    /// Signature mismatch or malformed token
    #[error("Access token is invalid")]
    Invalid,

    /// Signing failed (clock or key problems)
    #[error("Token issuance failed: {0}")]
    Issuance(String),
}

/// Issue a signed access token for `subject`, valid for `ttl`.
pub fn issue_access_token(
    secret: &[u8],
    subject: &str,
    ttl: Duration,
) -> Result<String, TokenError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| TokenError::Issuance(e.to_string()))?
        .as_secs();

    let claims = AccessClaims {
        sub: subject.to_string(),
        iat: now,
        exp: now + ttl.as_secs(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| TokenError::Issuance(e.to_string()))
}

/// Verify a token's signature and expiry, returning its claims.
pub fn verify_access_token(secret: &[u8], token: &str) -> Result<AccessClaims, TokenError> {
    decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-at-least-32-bytes-long";

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let token = issue_access_token(SECRET, "u123", Duration::from_secs(60)).unwrap();
        let claims = verify_access_token(SECRET, &token).unwrap();

        assert_eq!(claims.sub, "u123");
        assert_eq!(claims.exp, claims.iat + 60);
    }

    #[test]
    fn test_expired_token_is_reported_as_expired() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        // Well past the default validation leeway
        let claims = AccessClaims {
            sub: "u123".to_string(),
            iat: now - 600,
            exp: now - 300,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        let result = verify_access_token(SECRET, &token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = issue_access_token(SECRET, "u123", Duration::from_secs(60)).unwrap();
        let result = verify_access_token(b"a-different-secret-entirely!!!!!", &token);
        assert!(matches!(result, Err(TokenError::Invalid)));
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let result = verify_access_token(SECRET, "not.a.jwt");
        assert!(matches!(result, Err(TokenError::Invalid)));
    }

    #[test]
    fn test_tampered_payload_is_invalid() {
        let token = issue_access_token(SECRET, "u123", Duration::from_secs(60)).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged = "eyJzdWIiOiJhdHRhY2tlciJ9";
        parts[1] = forged;
        let tampered = parts.join(".");

        let result = verify_access_token(SECRET, &tampered);
        assert!(matches!(result, Err(TokenError::Invalid)));
    }
}
