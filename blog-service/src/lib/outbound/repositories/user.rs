use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::auth::models::CredentialRecord;
use crate::domain::auth::ports::CredentialStore;
use crate::domain::errors::StoreError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

const USER_COLUMNS: &str = "id, full_name, username, email, password_hash, bio, joined_at";

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    full_name: String,
    username: String,
    email: String,
    password_hash: String,
    bio: String,
    joined_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: UserId(r.id),
            full_name: r.full_name,
            username: Username::from_stored(r.username),
            email: EmailAddress::from_stored(r.email),
            password_hash: r.password_hash,
            bio: r.bio,
            joined_at: r.joined_at,
        }
    }
}

impl From<UserRow> for CredentialRecord {
    fn from(r: UserRow) -> Self {
        CredentialRecord {
            id: UserId(r.id),
            username: r.username,
            email: r.email,
            password_hash: r.password_hash,
            full_name: r.full_name,
            bio: r.bio,
            joined_at: r.joined_at,
        }
    }
}

fn write_error(e: sqlx::Error) -> UserError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            match db_err.constraint() {
                Some("users_username_key") => return UserError::username_taken(),
                Some("users_email_key") => return UserError::email_taken(),
                _ => {}
            }
        }
    }
    UserError::DatabaseError(e.to_string())
}

fn read_error(e: sqlx::Error) -> UserError {
    UserError::DatabaseError(e.to_string())
}

fn store_error(e: sqlx::Error) -> StoreError {
    StoreError(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let row: UserRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO users (full_name, username, email, password_hash, bio, joined_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&user.full_name)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(&user.bio)
        .bind(user.joined_at)
        .fetch_one(&self.pool)
        .await
        .map_err(write_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
                .bind(id.0)
                .fetch_optional(&self.pool)
                .await
                .map_err(read_error)?;

        Ok(row.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(read_error)?;

        Ok(row.map(User::from))
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let rows: Vec<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
                .fetch_all(&self.pool)
                .await
                .map_err(read_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET full_name = $2, username = $3, email = $4, password_hash = $5, bio = $6
            WHERE id = $1
            "#,
        )
        .bind(user.id.0)
        .bind(&user.full_name)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(&user.bio)
        .execute(&self.pool)
        .await
        .map_err(write_error)?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(user.id.to_string()));
        }

        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(read_error)?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl CredentialStore for PostgresUserRepository {
    async fn find_credentials_by_username(
        &self,
        username: &str,
    ) -> Result<Option<CredentialRecord>, StoreError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(CredentialRecord::from))
    }

    async fn is_username_taken(&self, username: &str) -> Result<bool, StoreError> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)
    }

    async fn is_email_taken(&self, email: &str) -> Result<bool, StoreError> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)
    }
}
