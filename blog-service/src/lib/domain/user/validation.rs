use crate::domain::auth::ports::CredentialStore;
use crate::domain::errors::StoreError;
use crate::domain::user::errors::EMAIL_TAKEN;
use crate::domain::user::errors::USERNAME_TAKEN;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Username;

/// Problems found with a registration, in the order they were checked.
///
/// Empty means the registration may proceed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, error: impl ToString) {
        self.errors.push(error.to_string());
    }
}

/// Shape and uniqueness checks run before a new account is created.
pub struct RegistrationValidator;

impl RegistrationValidator {
    /// Validate a trimmed, non-empty username and email.
    ///
    /// A malformed email short-circuits with a single error and no store
    /// lookups. Otherwise every problem is collected: username shape first,
    /// then username uniqueness, then email uniqueness.
    ///
    /// # Errors
    /// * `StoreError` - A uniqueness lookup failed; kept apart from validation
    pub async fn validate<CS>(
        store: &CS,
        username: &str,
        email: &str,
    ) -> Result<ValidationResult, StoreError>
    where
        CS: CredentialStore + ?Sized,
    {
        let mut result = ValidationResult::default();

        if let Err(e) = EmailAddress::new(email.to_string()) {
            result.push(e);
            return Ok(result);
        }

        if let Err(e) = Username::new(username.to_string()) {
            result.push(e);
        }

        if store.is_username_taken(username).await? {
            result.push(USERNAME_TAKEN);
        }

        if store.is_email_taken(email).await? {
            result.push(EMAIL_TAKEN);
        }

        Ok(result)
    }
}
