use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_post_id;
use super::parse_user_id;
use super::ApiError;
use super::ApiSuccess;
use super::PostData;
use crate::domain::post::models::Post;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    let post_id = parse_post_id(&id)?;

    state
        .post_service
        .get_post(&post_id)
        .await
        .map_err(ApiError::from)
        .map(|post| ApiSuccess::new(StatusCode::OK, post.into()))
}

pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<PostData>>, ApiError> {
    state
        .post_service
        .list_posts()
        .await
        .map_err(ApiError::from)
        .map(into_list)
}

pub async fn list_user_posts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<Vec<PostData>>, ApiError> {
    let author_id = parse_user_id(&user_id)?;

    state
        .post_service
        .list_posts_by_author(&author_id)
        .await
        .map_err(ApiError::from)
        .map(into_list)
}

fn into_list(posts: Vec<Post>) -> ApiSuccess<Vec<PostData>> {
    ApiSuccess::new(
        StatusCode::OK,
        posts.into_iter().map(PostData::from).collect(),
    )
}
