use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::auth::authorization::ensure_owner;
use crate::domain::auth::models::AuthenticatedUser;
use crate::domain::auth::ports::CredentialStore;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::validation::RegistrationValidator;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// The repository doubles as the credential store the registration
/// validator checks uniqueness against.
pub struct UserService<UR>
where
    UR: UserRepository + CredentialStore,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository + CredentialStore,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository + CredentialStore,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let validation =
            RegistrationValidator::validate(self.repository.as_ref(), &command.username, &command.email)
                .await?;

        if !validation.is_valid() {
            return Err(UserError::Validation(validation.errors));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = NewUser {
            full_name: command.full_name,
            username: Username::new(command.username)?,
            email: EmailAddress::new(command.email)?,
            password_hash,
            bio: command.bio,
            joined_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn update_user(
        &self,
        caller: &AuthenticatedUser,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        ensure_owner(caller, *id)?;

        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        if let Some(full_name) = command.full_name {
            user.full_name = full_name;
        }

        if let Some(new_username) = command.username {
            user.username = new_username;
        }

        if let Some(new_email) = command.email {
            user.email = new_email;
        }

        if let Some(new_password) = command.password {
            user.password_hash = self.password_hasher.hash(&new_password)?;
        }

        if let Some(bio) = command.bio {
            user.bio = bio;
        }

        self.repository.update(user).await
    }

    async fn delete_user(&self, caller: &AuthenticatedUser, id: &UserId) -> Result<(), UserError> {
        ensure_owner(caller, *id)?;

        self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
