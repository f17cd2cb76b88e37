use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SecurityConfig;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "token";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub userid: i32,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("JWT secret not configured")]
    MissingSecret,

    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT token: {0}")]
    InvalidToken(String),
}

/// Signing material built once from configuration and shared through the
/// router state.
#[derive(Clone)]
pub struct SessionKeys {
    keys: Option<(EncodingKey, DecodingKey)>,
    expiry_hours: u64,
}

impl std::fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKeys")
            .field("configured", &self.keys.is_some())
            .field("expiry_hours", &self.expiry_hours)
            .finish()
    }
}

impl SessionKeys {
    pub fn new(secret: &str, expiry_hours: u64) -> Self {
        let keys = (!secret.is_empty()).then(|| {
            (
                EncodingKey::from_secret(secret.as_bytes()),
                DecodingKey::from_secret(secret.as_bytes()),
            )
        });
        Self { keys, expiry_hours }
    }

    pub fn from_config(security: &SecurityConfig) -> Self {
        Self::new(&security.jwt_secret, security.jwt_expiry_hours)
    }

    pub fn is_configured(&self) -> bool {
        self.keys.is_some()
    }

    /// Token lifetime in seconds
    pub fn expires_in(&self) -> i64 {
        Duration::hours(self.expiry_hours as i64).num_seconds()
    }

    pub fn issue(&self, userid: i32) -> Result<String, SessionError> {
        let (encoding_key, _) = self.keys.as_ref().ok_or(SessionError::MissingSecret)?;
        let now = Utc::now();
        let claims = Claims {
            userid,
            exp: (now + Duration::hours(self.expiry_hours as i64)).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, encoding_key).map_err(|e| SessionError::TokenGeneration(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, SessionError> {
        let (_, decoding_key) = self.keys.as_ref().ok_or(SessionError::MissingSecret)?;
        decode::<Claims>(token, decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| SessionError::InvalidToken(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies_with_same_secret() {
        let keys = SessionKeys::new("testsecret", 1);
        let token = keys.issue(42).unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.userid, 42);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let token = SessionKeys::new("one", 1).issue(7).unwrap();
        let err = SessionKeys::new("two", 1).verify(&token).unwrap_err();
        assert!(matches!(err, SessionError::InvalidToken(_)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = SessionKeys::new("testsecret", 1);
        let claims = Claims { userid: 7, exp: Utc::now().timestamp() - 3600, iat: Utc::now().timestamp() - 7200 };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"testsecret")).unwrap();
        assert!(matches!(keys.verify(&token), Err(SessionError::InvalidToken(_))));
    }

    #[test]
    fn empty_secret_cannot_sign_or_verify() {
        let keys = SessionKeys::new("", 1);
        assert!(!keys.is_configured());
        assert!(matches!(keys.issue(1), Err(SessionError::MissingSecret)));
        assert!(matches!(keys.verify("abc"), Err(SessionError::MissingSecret)));
    }
}
