use thiserror::Error;

use crate::domain::auth::errors::AuthError;
use crate::domain::errors::StoreError;

/// Error for PostId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostIdError {
    #[error("invalid ID format: {0}")]
    InvalidFormat(String),
}

pub const TITLE_REQUIRED: &str = "title is required";
pub const CONTENT_REQUIRED: &str = "content is required";

/// Top-level error for all post-related operations
#[derive(Debug, Clone, Error)]
pub enum PostError {
    #[error("Invalid post ID: {0}")]
    InvalidPostId(#[from] PostIdError),

    /// Missing title and/or content, in field order.
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("no post with id {0}")]
    NotFound(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<StoreError> for PostError {
    fn from(err: StoreError) -> Self {
        PostError::DatabaseError(err.0)
    }
}
