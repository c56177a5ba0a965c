use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::auth::models::LoginOutcome;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

const REQUIRED_FIELDS: &str = "username and password are required";

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = payload?;

    let username = body.username.trim();
    let password = body.password.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ApiError::unprocessable(REQUIRED_FIELDS));
    }

    state
        .auth_service
        .login(username, password)
        .await
        .map_err(|e| {
            tracing::warn!(username, error = %e, "Login failed");
            ApiError::from(e)
        })
        .map(|outcome| ApiSuccess::new(StatusCode::OK, outcome.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub user: UserData,
    pub token: String,
}

impl From<LoginOutcome> for LoginResponseData {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            user: outcome.user.into(),
            token: outcome.token,
        }
    }
}
