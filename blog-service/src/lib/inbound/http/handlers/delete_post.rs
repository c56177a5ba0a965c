use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_post_id;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::AuthenticatedUser;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::router::AppState;

pub async fn delete_post(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let post_id = parse_post_id(&id)?;

    state
        .post_service
        .delete_post(&caller, &post_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, ()))
}
