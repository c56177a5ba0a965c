use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

const REQUIRED_FIELDS: &str = "username, email, and password are required";

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let Json(body) = payload?;

    state
        .user_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|user| ApiSuccess::new(StatusCode::CREATED, user.profile().into()))
}

/// HTTP request body for registering an account (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    bio: String,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, ApiError> {
        let username = self.username.trim();
        let email = self.email.trim();
        let password = self.password.trim();

        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(ApiError::unprocessable(REQUIRED_FIELDS));
        }

        Ok(RegisterUserCommand {
            full_name: self.full_name.trim().to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            bio: self.bio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            full_name: " Alice ".to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            bio: String::new(),
        }
    }

    #[test]
    fn test_fields_are_trimmed() {
        let command = request("  alice ", " alice@example.com", "secret ")
            .try_into_command()
            .unwrap();

        assert_eq!(command.full_name, "Alice");
        assert_eq!(command.username, "alice");
        assert_eq!(command.email, "alice@example.com");
        assert_eq!(command.password, "secret");
    }

    #[test]
    fn test_blank_fields_are_required() {
        let result = request("   ", "alice@example.com", "secret").try_into_command();
        assert_eq!(result.unwrap_err(), ApiError::unprocessable(REQUIRED_FIELDS));
    }
}
