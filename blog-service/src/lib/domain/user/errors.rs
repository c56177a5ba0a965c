use thiserror::Error;

use crate::domain::auth::errors::AuthError;
use crate::domain::errors::StoreError;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("invalid ID format: {0}")]
    InvalidFormat(String),
}

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("username cannot be empty")]
    Empty,

    #[error("username cannot start with a number")]
    StartsWithDigit,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Accumulated registration or uniqueness problems, in check order.
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    // Domain-level errors
    #[error("no user with id {0}")]
    NotFound(String),

    #[error("no user with username {0}")]
    NotFoundByUsername(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl UserError {
    pub fn username_taken() -> Self {
        UserError::Validation(vec![USERNAME_TAKEN.to_string()])
    }

    pub fn email_taken() -> Self {
        UserError::Validation(vec![EMAIL_TAKEN.to_string()])
    }
}

pub const USERNAME_TAKEN: &str = "username is already taken";
pub const EMAIL_TAKEN: &str = "email is already taken";

impl From<StoreError> for UserError {
    fn from(err: StoreError) -> Self {
        UserError::DatabaseError(err.0)
    }
}
