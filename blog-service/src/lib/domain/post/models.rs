use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::post::errors::PostError;
use crate::domain::post::errors::PostIdError;
use crate::domain::post::errors::CONTENT_REQUIRED;
use crate::domain::post::errors::TITLE_REQUIRED;
use crate::domain::user::models::UserId;

/// Post aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post unique identifier type, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(pub i64);

impl PostId {
    /// Parse a post ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a positive whole number
    pub fn from_string(s: &str) -> Result<Self, PostIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(PostId(id)),
            _ => Err(PostIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Trimmed, non-empty title and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    title: String,
    content: String,
}

impl PostDraft {
    /// # Errors
    /// * `Validation` - Every missing field, title first
    pub fn new(title: &str, content: &str) -> Result<Self, PostError> {
        let title = title.trim();
        let content = content.trim();

        let mut errors = Vec::new();
        if title.is_empty() {
            errors.push(TITLE_REQUIRED.to_string());
        }
        if content.is_empty() {
            errors.push(CONTENT_REQUIRED.to_string());
        }

        if !errors.is_empty() {
            return Err(PostError::Validation(errors));
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Command to publish a post.
///
/// `author_id` is the author the client asked for; `None` means the caller.
#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    pub draft: PostDraft,
    pub author_id: Option<UserId>,
}

/// A post ready to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}
