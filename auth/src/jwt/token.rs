use chrono::DateTime;
use chrono::Utc;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Signing material and lifetime for session tokens.
///
/// Built once from process configuration and moved into [`TokenService`].
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

/// Issues and verifies stateless session tokens for numeric user ids.
pub struct TokenService {
    handler: JwtHandler,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(config: TokenConfig) -> Self {
        Self {
            handler: JwtHandler::new(config.secret.as_bytes()),
            expiration_hours: config.expiration_hours,
        }
    }

    /// Sign a token for `user_id` valid for the configured window.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, user_id: i64) -> Result<String, JwtError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Same as [`issue`](Self::issue) with an explicit issuance instant.
    pub fn issue_at(&self, user_id: i64, now: DateTime<Utc>) -> Result<String, JwtError> {
        let claims = Claims::for_user(user_id, now, self.expiration_hours);
        self.handler.encode(&claims)
    }

    /// Verify signature and expiry, returning the subject user id.
    ///
    /// # Errors
    /// * `TokenExpired` - Expiry is not in the future
    /// * `InvalidToken` - Bad signature or non-numeric subject
    /// * `DecodingFailed` - Token is malformed
    pub fn verify(&self, token: &str) -> Result<i64, JwtError> {
        let claims: Claims = self.handler.decode(token)?;

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        claims.user_id()
    }
}
