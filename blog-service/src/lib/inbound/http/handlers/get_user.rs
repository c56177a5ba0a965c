use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Look up one account. A numeric segment is an id, anything else a username.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id_or_username): Path<String>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let user = match UserId::from_string(&id_or_username) {
        Ok(user_id) => state.user_service.get_user(&user_id).await,
        Err(_) => {
            state
                .user_service
                .get_user_by_username(&id_or_username)
                .await
        }
    }?;

    Ok(ApiSuccess::new(StatusCode::OK, user.profile().into()))
}

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<UserData>>, ApiError> {
    state
        .user_service
        .list_users()
        .await
        .map_err(ApiError::from)
        .map(|users| {
            ApiSuccess::new(
                StatusCode::OK,
                users.iter().map(|user| user.profile().into()).collect(),
            )
        })
}
