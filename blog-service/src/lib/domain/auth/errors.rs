use thiserror::Error;

use crate::domain::errors::StoreError;
use crate::domain::user::models::UserId;

/// Failures of login, token checking and ownership enforcement.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Invalid Authorization header format. Expected: Bearer <token>")]
    MalformedHeader,

    #[error("Unauthorized: token is expired")]
    TokenExpired,

    #[error("Unauthorized: invalid token")]
    InvalidToken(String),

    #[error("user ID missing or invalid")]
    MissingIdentity,

    #[error("you are not authorized to modify this resource")]
    NotOwner { caller: UserId, owner: UserId },

    #[error("invalid username or password")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Token generation failed: {0}")]
    TokenIssuance(String),

    #[error("Password verification failed: {0}")]
    PasswordVerification(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Whether the caller is at fault (401) as opposed to the server (500).
    pub fn is_unauthorized(&self) -> bool {
        !matches!(
            self,
            AuthError::TokenIssuance(_) | AuthError::PasswordVerification(_) | AuthError::Store(_)
        )
    }
}
