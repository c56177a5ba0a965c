use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::auth::errors::AuthError;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::user::errors::UserError;

pub mod create_post;
pub mod delete_post;
pub mod delete_user;
pub mod get_post;
pub mod get_user;
pub mod login;
pub mod register;
pub mod update_post;
pub mod update_user;

pub const INVALID_ID: &str = "invalid ID format";
pub const INVALID_JSON: &str = "invalid JSON request data";
const INTERNAL_ERROR: &str = "internal server error";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Transport-level failure classes.
///
/// `InternalServerError` carries operator-facing detail that is logged and
/// never rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Unauthorized(String),
    UnprocessableEntity(Vec<String>),
    NotFound(String),
    BadRequest(String),
    InternalServerError(String),
}

impl ApiError {
    pub fn unprocessable(message: impl Into<String>) -> Self {
        ApiError::UnprocessableEntity(vec![message.into()])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ErrorMessage::Single(msg)),
            ApiError::UnprocessableEntity(msgs) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorMessage::List(msgs))
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorMessage::Single(msg)),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorMessage::Single(msg)),
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorMessage::Single(INTERNAL_ERROR.to_string()),
                )
            }
        };

        (status, Json(ApiErrorBody::new(status, message))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        if err.is_unauthorized() {
            ApiError::Unauthorized(err.to_string())
        } else {
            ApiError::InternalServerError(err.to_string())
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUserId(_) => ApiError::unprocessable(INVALID_ID),
            UserError::InvalidUsername(e) => ApiError::unprocessable(e.to_string()),
            UserError::InvalidEmail(e) => ApiError::unprocessable(e.to_string()),
            UserError::Validation(errors) => ApiError::UnprocessableEntity(errors),
            UserError::NotFound(_) | UserError::NotFoundByUsername(_) => {
                ApiError::NotFound(err.to_string())
            }
            UserError::Auth(e) => e.into(),
            UserError::Password(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::InvalidPostId(_) => ApiError::unprocessable(INVALID_ID),
            PostError::Validation(errors) => ApiError::UnprocessableEntity(errors),
            PostError::NotFound(_) => ApiError::NotFound(err.to_string()),
            PostError::Auth(e) => e.into(),
            PostError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest(INVALID_JSON.to_string())
    }
}

pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    UserId::from_string(raw).map_err(|_| ApiError::unprocessable(INVALID_ID))
}

pub(crate) fn parse_post_id(raw: &str) -> Result<PostId, ApiError> {
    PostId::from_string(raw).map_err(|_| ApiError::unprocessable(INVALID_ID))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    status_code: u16,
    msg: ErrorMessage,
}

impl ApiErrorBody {
    pub fn new(status_code: StatusCode, msg: ErrorMessage) -> Self {
        Self {
            status_code: status_code.as_u16(),
            msg,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    List(Vec<String>),
}

/// Public view of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: i64,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub bio: String,
    pub joined_at: DateTime<Utc>,
}

impl From<UserProfile> for UserData {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.0,
            full_name: profile.full_name,
            username: profile.username,
            email: profile.email,
            bio: profile.bio,
            joined_at: profile.joined_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostData {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.0,
            title: post.title,
            content: post.content,
            author_id: post.author_id.0,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
