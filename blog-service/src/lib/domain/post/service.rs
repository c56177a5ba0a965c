use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::auth::authorization::ensure_owner;
use crate::domain::auth::models::AuthenticatedUser;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostDraft;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostRepository;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for post operations.
pub struct PostService<PR>
where
    PR: PostRepository,
{
    repository: Arc<PR>,
}

impl<PR> PostService<PR>
where
    PR: PostRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }

    async fn owned_post(&self, caller: &AuthenticatedUser, id: &PostId) -> Result<Post, PostError> {
        let post = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id.to_string()))?;

        ensure_owner(caller, post.author_id)?;

        Ok(post)
    }
}

#[async_trait]
impl<PR> PostServicePort for PostService<PR>
where
    PR: PostRepository,
{
    async fn create_post(
        &self,
        caller: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> Result<Post, PostError> {
        let author_id = command.author_id.unwrap_or(caller.user_id);
        ensure_owner(caller, author_id)?;

        let post = NewPost {
            title: command.draft.title().to_string(),
            content: command.draft.content().to_string(),
            author_id,
            created_at: Utc::now(),
        };

        let created_post = self.repository.create(post).await?;
        tracing::info!(post_id = %created_post.id, author_id = %author_id, "Post created");

        Ok(created_post)
    }

    async fn get_post(&self, id: &PostId) -> Result<Post, PostError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id.to_string()))
    }

    async fn list_posts(&self) -> Result<Vec<Post>, PostError> {
        self.repository.list_all().await
    }

    async fn list_posts_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, PostError> {
        self.repository.list_by_author(author_id).await
    }

    async fn update_post(
        &self,
        caller: &AuthenticatedUser,
        id: &PostId,
        draft: PostDraft,
    ) -> Result<Post, PostError> {
        let mut post = self.owned_post(caller, id).await?;

        post.title = draft.title().to_string();
        post.content = draft.content().to_string();
        post.updated_at = Utc::now();

        self.repository.update(post).await
    }

    async fn delete_post(&self, caller: &AuthenticatedUser, id: &PostId) -> Result<(), PostError> {
        self.owned_post(caller, id).await?;

        self.repository.delete(id).await?;
        tracing::info!(post_id = %id, "Post deleted");

        Ok(())
    }
}
