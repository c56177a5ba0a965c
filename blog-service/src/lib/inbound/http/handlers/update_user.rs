use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::parse_user_id;
use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::auth::authorization::ensure_owner;
use crate::domain::auth::models::AuthenticatedUser;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::Username;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// HTTP request body for updating a user (raw JSON)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, UserError> {
        let username = self
            .username
            .map(|username| Username::new(username.trim().to_string()))
            .transpose()?;

        let email = self
            .email
            .map(|email| EmailAddress::new(email.trim().to_string()))
            .transpose()?;

        let password = self
            .password
            .map(|password| password.trim().to_string())
            .filter(|password| !password.is_empty());

        Ok(UpdateUserCommand {
            full_name: self.full_name.map(|name| name.trim().to_string()),
            username,
            email,
            password,
            bio: self.bio,
        })
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let user_id = parse_user_id(&id)?;
    // Non-owners are turned away before their input is validated.
    ensure_owner(&caller, user_id)?;
    let Json(req) = payload?;
    let command = req.try_into_command()?;

    state
        .user_service
        .update_user(&caller, &user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|user| ApiSuccess::new(StatusCode::OK, user.profile().into()))
}
