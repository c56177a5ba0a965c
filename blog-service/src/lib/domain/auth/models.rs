use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;

/// Identity of the caller, established by the guard for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

impl AuthenticatedUser {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

/// A stored account as read for a login check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub bio: String,
    pub joined_at: DateTime<Utc>,
}

impl CredentialRecord {
    /// Drop the secret, keeping what may be shown to the account owner.
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            id: self.id,
            full_name: self.full_name,
            username: self.username,
            email: self.email,
            bio: self.bio,
            joined_at: self.joined_at,
        }
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub user: UserProfile,
    pub token: String,
}
