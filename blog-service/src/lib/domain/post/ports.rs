use async_trait::async_trait;

use crate::domain::auth::models::AuthenticatedUser;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostDraft;
use crate::domain::post::models::PostId;
use crate::domain::user::models::UserId;

/// Port for post domain service operations.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Publish a post as the caller.
    ///
    /// # Errors
    /// * `Auth(NotOwner)` - Requested author is someone other than the caller
    /// * `DatabaseError` - Database operation failed
    async fn create_post(
        &self,
        caller: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> Result<Post, PostError>;

    /// # Errors
    /// * `NotFound` - Post does not exist
    async fn get_post(&self, id: &PostId) -> Result<Post, PostError>;

    async fn list_posts(&self) -> Result<Vec<Post>, PostError>;

    async fn list_posts_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, PostError>;

    /// Replace title and content of one of the caller's posts.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `Auth(NotOwner)` - Caller did not write this post
    async fn update_post(
        &self,
        caller: &AuthenticatedUser,
        id: &PostId,
        draft: PostDraft,
    ) -> Result<Post, PostError>;

    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `Auth(NotOwner)` - Caller did not write this post
    async fn delete_post(&self, caller: &AuthenticatedUser, id: &PostId)
        -> Result<(), PostError>;
}

/// Persistence operations for post aggregate.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    async fn create(&self, post: NewPost) -> Result<Post, PostError>;

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError>;

    /// All posts, newest first.
    async fn list_all(&self) -> Result<Vec<Post>, PostError>;

    /// Posts by one author, newest first.
    async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, PostError>;

    /// # Errors
    /// * `NotFound` - Post does not exist
    async fn update(&self, post: Post) -> Result<Post, PostError>;

    /// # Errors
    /// * `NotFound` - Post does not exist
    async fn delete(&self, id: &PostId) -> Result<(), PostError>;
}
