use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostRepository;
use crate::domain::user::models::UserId;

const POST_COLUMNS: &str = "id, title, content, author_id, created_at, updated_at";

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(r: PostRow) -> Self {
        Post {
            id: PostId(r.id),
            title: r.title,
            content: r.content,
            author_id: UserId(r.author_id),
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

fn database_error(e: sqlx::Error) -> PostError {
    PostError::DatabaseError(e.to_string())
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, PostError> {
        let row: PostRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO posts (title, content, author_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.author_id.0)
        .bind(post.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError> {
        let row: Option<PostRow> =
            sqlx::query_as(&format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1"))
                .bind(id.0)
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?;

        Ok(row.map(Post::from))
    }

    async fn list_all(&self) -> Result<Vec<Post>, PostError> {
        let rows: Vec<PostRow> = sqlx::query_as(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, PostError> {
        let rows: Vec<PostRow> = sqlx::query_as(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE author_id = $1 ORDER BY created_at DESC"
        ))
        .bind(author_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn update(&self, post: Post) -> Result<Post, PostError> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, content = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(post.id.0)
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(PostError::NotFound(post.id.to_string()));
        }

        Ok(post)
    }

    async fn delete(&self, id: &PostId) -> Result<(), PostError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(PostError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
