use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::PostData;
use crate::domain::auth::models::AuthenticatedUser;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::PostDraft;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

pub async fn create_post(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    let Json(body) = payload?;

    let command = CreatePostCommand {
        draft: body.draft()?,
        author_id: body.author_id.map(UserId),
    };

    state
        .post_service
        .create_post(&caller, command)
        .await
        .map_err(ApiError::from)
        .map(|post| ApiSuccess::new(StatusCode::CREATED, post.into()))
}

/// HTTP request body shared by post create and update (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub author_id: Option<i64>,
}

impl PostRequest {
    pub fn draft(&self) -> Result<PostDraft, ApiError> {
        PostDraft::new(&self.title, &self.content).map_err(ApiError::from)
    }
}
