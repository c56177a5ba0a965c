use auth::JwtError;
use auth::TokenService;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::TokenProvider;
use crate::domain::user::models::UserId;

impl From<JwtError> for AuthError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::TokenExpired => AuthError::TokenExpired,
            JwtError::EncodingFailed(msg) => AuthError::TokenIssuance(msg),
            JwtError::DecodingFailed(msg) | JwtError::InvalidToken(msg) => {
                AuthError::InvalidToken(msg)
            }
        }
    }
}

impl TokenProvider for TokenService {
    fn issue(&self, user_id: UserId) -> Result<String, AuthError> {
        TokenService::issue(self, user_id.0).map_err(AuthError::from)
    }

    fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        TokenService::verify(self, token)
            .map(UserId)
            .map_err(AuthError::from)
    }
}
