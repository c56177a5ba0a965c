use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::authorization::bearer_token;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthenticatedUser;
use crate::domain::auth::models::LoginOutcome;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialStore;
use crate::domain::auth::ports::TokenProvider;

/// Domain service for login and token-based request authentication.
///
/// Stateless between calls; failures are never counted or retried.
pub struct AuthService<CS, TP>
where
    CS: CredentialStore,
    TP: TokenProvider,
{
    credentials: Arc<CS>,
    tokens: Arc<TP>,
    password_hasher: auth::PasswordHasher,
}

impl<CS, TP> AuthService<CS, TP>
where
    CS: CredentialStore,
    TP: TokenProvider,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `credentials` - Credential lookup implementation
    /// * `tokens` - Session token implementation
    pub fn new(credentials: Arc<CS>, tokens: Arc<TP>) -> Self {
        Self {
            credentials,
            tokens,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<CS, TP> AuthServicePort for AuthService<CS, TP>
where
    CS: CredentialStore,
    TP: TokenProvider,
{
    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let record = self
            .credentials
            .find_credentials_by_username(username)
            .await?
            .ok_or_else(|| {
                tracing::debug!(username, "Login for unknown username");
                AuthError::InvalidCredentials
            })?;

        let is_valid = self
            .password_hasher
            .verify(password, &record.password_hash)
            .map_err(|e| AuthError::PasswordVerification(e.to_string()))?;

        if !is_valid {
            tracing::debug!(user_id = %record.id, "Login with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(record.id)?;

        Ok(LoginOutcome {
            user: record.into_profile(),
            token,
        })
    }

    fn authenticate(&self, authorization: Option<&str>) -> Result<AuthenticatedUser, AuthError> {
        let header = authorization.ok_or(AuthError::MissingHeader)?;
        let token = bearer_token(header)?;

        self.tokens.verify(token).map(AuthenticatedUser::new)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::auth::models::CredentialRecord;
    use crate::domain::errors::StoreError;
    use crate::domain::user::models::UserId;

    mock! {
        pub TestCredentialStore {}

        #[async_trait]
        impl CredentialStore for TestCredentialStore {
            async fn find_credentials_by_username(&self, username: &str) -> Result<Option<CredentialRecord>, StoreError>;
            async fn is_username_taken(&self, username: &str) -> Result<bool, StoreError>;
            async fn is_email_taken(&self, email: &str) -> Result<bool, StoreError>;
        }
    }

    mock! {
        pub TestTokenProvider {}

        impl TokenProvider for TestTokenProvider {
            fn issue(&self, user_id: UserId) -> Result<String, AuthError>;
            fn verify(&self, token: &str) -> Result<UserId, AuthError>;
        }
    }

    fn alice(password: &str) -> CredentialRecord {
        CredentialRecord {
            id: UserId(1),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: auth::PasswordHasher::new().hash(password).unwrap(),
            full_name: "Alice".to_string(),
            bio: String::new(),
            joined_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut store = MockTestCredentialStore::new();
        let mut tokens = MockTestTokenProvider::new();

        let record = alice("correct");
        store
            .expect_find_credentials_by_username()
            .with(eq("alice"))
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));

        tokens
            .expect_issue()
            .with(eq(UserId(1)))
            .times(1)
            .returning(|_| Ok("signed.token.value".to_string()));

        let service = AuthService::new(Arc::new(store), Arc::new(tokens));

        let outcome = service.login("alice", "correct").await.unwrap();
        assert_eq!(outcome.token, "signed.token.value");
        assert_eq!(outcome.user.id, UserId(1));
        assert_eq!(outcome.user.username, "alice");
    }

    #[tokio::test]
    async fn test_login_wrong_password_issues_no_token() {
        let mut store = MockTestCredentialStore::new();
        let mut tokens = MockTestTokenProvider::new();

        let record = alice("correct");
        store
            .expect_find_credentials_by_username()
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));

        tokens.expect_issue().times(0);

        let service = AuthService::new(Arc::new(store), Arc::new(tokens));

        let result = service.login("alice", "wrong").await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_username() {
        let mut store = MockTestCredentialStore::new();
        let mut tokens = MockTestTokenProvider::new();

        store
            .expect_find_credentials_by_username()
            .times(1)
            .returning(|_| Ok(None));

        tokens.expect_issue().times(0);

        let service = AuthService::new(Arc::new(store), Arc::new(tokens));

        let result = service.login("nobody", "whatever").await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_plaintext_stored_secret() {
        let mut store = MockTestCredentialStore::new();
        let tokens = MockTestTokenProvider::new();

        let mut record = alice("correct");
        record.password_hash = "correct".to_string();
        store
            .expect_find_credentials_by_username()
            .returning(move |_| Ok(Some(record.clone())));

        let service = AuthService::new(Arc::new(store), Arc::new(tokens));

        let result = service.login("alice", "correct").await;
        assert!(matches!(result, Err(AuthError::PasswordVerification(_))));
    }

    #[tokio::test]
    async fn test_login_store_failure() {
        let mut store = MockTestCredentialStore::new();
        let tokens = MockTestTokenProvider::new();

        store
            .expect_find_credentials_by_username()
            .returning(|_| Err(StoreError("connection refused".to_string())));

        let service = AuthService::new(Arc::new(store), Arc::new(tokens));

        let result = service.login("alice", "correct").await;
        assert!(matches!(result, Err(AuthError::Store(_))));
    }

    #[test]
    fn test_authenticate_missing_header_skips_verify() {
        let store = MockTestCredentialStore::new();
        let mut tokens = MockTestTokenProvider::new();
        tokens.expect_verify().times(0);

        let service = AuthService::new(Arc::new(store), Arc::new(tokens));

        assert_eq!(service.authenticate(None), Err(AuthError::MissingHeader));
    }

    #[test]
    fn test_authenticate_malformed_header_skips_verify() {
        let store = MockTestCredentialStore::new();
        let mut tokens = MockTestTokenProvider::new();
        tokens.expect_verify().times(0);

        let service = AuthService::new(Arc::new(store), Arc::new(tokens));

        assert_eq!(
            service.authenticate(Some("Token abc")),
            Err(AuthError::MalformedHeader)
        );
    }

    #[test]
    fn test_authenticate_strips_bearer_prefix() {
        let store = MockTestCredentialStore::new();
        let mut tokens = MockTestTokenProvider::new();
        tokens
            .expect_verify()
            .with(eq("abc.def.ghi"))
            .times(1)
            .returning(|_| Ok(UserId(5)));

        let service = AuthService::new(Arc::new(store), Arc::new(tokens));

        assert_eq!(
            service.authenticate(Some("Bearer abc.def.ghi")),
            Ok(AuthenticatedUser::new(UserId(5)))
        );
    }

    #[test]
    fn test_authenticate_rejected_token() {
        let store = MockTestCredentialStore::new();
        let mut tokens = MockTestTokenProvider::new();
        tokens
            .expect_verify()
            .returning(|_| Err(AuthError::TokenExpired));

        let service = AuthService::new(Arc::new(store), Arc::new(tokens));

        assert_eq!(
            service.authenticate(Some("Bearer old.token.value")),
            Err(AuthError::TokenExpired)
        );
    }
}
