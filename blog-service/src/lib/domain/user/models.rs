use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::EmailError;
use crate::user::errors::UserIdError;
use crate::user::errors::UsernameError;

/// User aggregate entity.
///
/// Represents a registered account. `password_hash` is a PHC string and never
/// leaves the domain; outbound views go through [`UserProfile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub bio: String,
    pub joined_at: DateTime<Utc>,
}

impl User {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            full_name: self.full_name.clone(),
            username: self.username.as_str().to_string(),
            email: self.email.as_str().to_string(),
            bio: self.bio.clone(),
            joined_at: self.joined_at,
        }
    }
}

/// User data without the password secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub bio: String,
    pub joined_at: DateTime<Utc>,
}

/// User unique identifier type, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a positive whole number
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(UserId(id)),
            _ => Err(UserIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Any non-empty name that does not start with a digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Empty` - Username is the empty string
    /// * `StartsWithDigit` - First character is a number
    pub fn new(username: String) -> Result<Self, UsernameError> {
        match username.chars().next() {
            None => Err(UsernameError::Empty),
            Some(c) if c.is_ascii_digit() => Err(UsernameError::StartsWithDigit),
            Some(_) => Ok(Self(username)),
        }
    }

    /// Wrap a username read back from the store without re-checking it.
    pub fn from_stored(username: String) -> Self {
        Self(username)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Wrap an address read back from the store without re-parsing it.
    pub fn from_stored(email: String) -> Self {
        Self(email)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Registration input after the caller has trimmed it and checked that
/// nothing is empty. Shape and uniqueness are checked by the service.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub bio: String,
}

/// A user ready to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub full_name: String,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub bio: String,
    pub joined_at: DateTime<Utc>,
}

/// Command to update an existing user with optional validated fields.
///
/// Only provided fields will be updated.
#[derive(Debug, Default)]
pub struct UpdateUserCommand {
    pub full_name: Option<String>,
    pub username: Option<Username>,
    pub email: Option<EmailAddress>,
    pub password: Option<String>,
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(Username::new("alice".to_string()).is_ok());
        assert!(Username::new("jo".to_string()).is_ok());
        assert!(Username::new("john.doe".to_string()).is_ok());
        assert!(Username::new("bob smith".to_string()).is_ok());
        assert!(Username::new("a".repeat(64)).is_ok());
        assert_eq!(Username::new(String::new()), Err(UsernameError::Empty));
        assert_eq!(
            Username::new("1alice".to_string()),
            Err(UsernameError::StartsWithDigit)
        );
    }

    #[test]
    fn test_user_id_from_string() {
        assert_eq!(UserId::from_string("42"), Ok(UserId(42)));
        assert!(UserId::from_string("abc").is_err());
        assert!(UserId::from_string("0").is_err());
        assert!(UserId::from_string("-3").is_err());
    }

    #[test]
    fn test_profile_drops_secret() {
        let user = User {
            id: UserId(1),
            full_name: "Alice A".to_string(),
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password_hash: "$argon2id$secret".to_string(),
            bio: String::new(),
            joined_at: Utc::now(),
        };

        let profile = user.profile();
        assert_eq!(profile.id, UserId(1));
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.email, "alice@example.com");
    }
}
