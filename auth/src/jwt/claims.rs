use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Identity claims carried by a session token.
///
/// `sub` holds the user id as a decimal string, as RFC 7519 requires the
/// subject to be a StringOrURI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,

    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,
}

impl Claims {
    /// Create claims for a user that expire `expiration_hours` after `now`.
    ///
    /// # Arguments
    /// * `user_id` - Numeric user identifier
    /// * `now` - Issuance instant
    /// * `expiration_hours` - Hours until token expires
    ///
    /// # Returns
    /// Claims with sub, exp and iat set
    pub fn for_user(user_id: i64, now: DateTime<Utc>, expiration_hours: i64) -> Self {
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            sub: user_id.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Parse the subject back into a user id.
    ///
    /// # Errors
    /// * `InvalidToken` - Subject is not a whole number
    pub fn user_id(&self) -> Result<i64, JwtError> {
        self.sub
            .parse::<i64>()
            .map_err(|_| JwtError::InvalidToken(format!("subject '{}' is not a user id", self.sub)))
    }

    /// A token is only valid while its expiry lies strictly in the future.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_for_user() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let claims = Claims::for_user(7, now, 24);

        assert_eq!(claims.sub, "7");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_user_id() {
        let claims = Claims::for_user(123, Utc::now(), 1);
        assert_eq!(claims.user_id().unwrap(), 123);

        let claims = Claims {
            sub: "alice".to_string(),
            ..claims
        };
        assert!(matches!(claims.user_id(), Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: "1".to_string(),
            exp: 1000,
            iat: 0,
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000)); // Expired at the exact second
        assert!(claims.is_expired(1001));
    }
}
