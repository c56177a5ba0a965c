use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthenticatedUser;
use crate::domain::auth::models::CredentialRecord;
use crate::domain::auth::models::LoginOutcome;
use crate::domain::errors::StoreError;
use crate::domain::user::models::UserId;

/// Port for login and request authentication.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Check credentials and issue a session token.
    ///
    /// # Arguments
    /// * `username` - Trimmed, non-empty username
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Safe profile of the account plus a signed token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `PasswordVerification` - Stored hash is unusable
    /// * `TokenIssuance` - Signing failed
    /// * `Store` - Credential lookup failed
    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AuthError>;

    /// Establish the caller's identity from an `Authorization` header value.
    ///
    /// # Arguments
    /// * `authorization` - Raw header value, `None` when absent
    ///
    /// # Returns
    /// Identity for the remainder of the request
    ///
    /// # Errors
    /// * `MissingHeader` - No header (token provider is not consulted)
    /// * `MalformedHeader` - Not of the form `Bearer <token>`
    /// * `InvalidToken` / `TokenExpired` - Token rejected
    fn authenticate(&self, authorization: Option<&str>) -> Result<AuthenticatedUser, AuthError>;
}

/// Read-only credential lookups against the user store.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve the credential record for a username.
    ///
    /// # Returns
    /// Optional record (None if no such username)
    ///
    /// # Errors
    /// * `StoreError` - Database operation failed
    async fn find_credentials_by_username(
        &self,
        username: &str,
    ) -> Result<Option<CredentialRecord>, StoreError>;

    /// Whether any account already uses this username.
    async fn is_username_taken(&self, username: &str) -> Result<bool, StoreError>;

    /// Whether any account already uses this email address.
    async fn is_email_taken(&self, email: &str) -> Result<bool, StoreError>;
}

/// Signs and checks session tokens.
pub trait TokenProvider: Send + Sync + 'static {
    /// # Errors
    /// * `TokenIssuance` - Signing failed
    fn issue(&self, user_id: UserId) -> Result<String, AuthError>;

    /// # Errors
    /// * `InvalidToken` - Malformed token or bad signature
    /// * `TokenExpired` - Expiry is not in the future
    fn verify(&self, token: &str) -> Result<UserId, AuthError>;
}
