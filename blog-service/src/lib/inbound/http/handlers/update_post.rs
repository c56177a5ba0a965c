use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::create_post::PostRequest;
use super::parse_post_id;
use super::ApiError;
use super::ApiSuccess;
use super::PostData;
use crate::domain::auth::authorization::ensure_owner;
use crate::domain::auth::models::AuthenticatedUser;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Replace title and content. An `authorId` in the body, when present, must
/// be the caller.
pub async fn update_post(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    Path(id): Path<String>,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    let post_id = parse_post_id(&id)?;
    let Json(body) = payload?;

    if let Some(author_id) = body.author_id {
        ensure_owner(&caller, UserId(author_id))?;
    }

    state
        .post_service
        .update_post(&caller, &post_id, body.draft()?)
        .await
        .map_err(ApiError::from)
        .map(|post| ApiSuccess::new(StatusCode::OK, post.into()))
}
