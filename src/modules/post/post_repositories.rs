use super::post_dtos::{CreatePostDTO, PostDTO};
use crate::{
    shared::exceptions::storage_failure::StorageFailure, utils::query_executor::query_executor,
};
use async_trait::async_trait;
use deadpool_postgres::Pool;
use std::time::Duration;
use tokio_postgres::Row;

const LIST_POSTS_SQL: &str =
    "SELECT id, titulo, img, descripcion, likes FROM posts ORDER BY id ASC";
const INSERT_POST_SQL: &str = "INSERT INTO posts (titulo, img, descripcion, likes) \
     VALUES ($1, $2, $3, 0) RETURNING id, titulo, img, descripcion, likes";
// Ids travel as text and are cast by Postgres, so a malformed id fails there with 22P02.
const LIKE_POST_SQL: &str = "UPDATE posts SET likes = likes + 1 WHERE id = $1::text::integer \
     RETURNING id, titulo, img, descripcion, likes";
const DELETE_POST_SQL: &str = "DELETE FROM posts WHERE id = $1::text::integer \
     RETURNING id, titulo, img, descripcion, likes";

/// # Post Repository
///
/// Storage operations for posts. Each call maps to exactly one statement; failures are
/// surfaced untouched as `StorageFailure`.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Every post, ascending by `id`.
    async fn list_all(&self) -> Result<Vec<PostDTO>, StorageFailure>;

    /// Store a new post with `likes = 0` and return it with its assigned `id`.
    async fn insert(&self, post: &CreatePostDTO) -> Result<PostDTO, StorageFailure>;

    /// Add one like. `None` when no post has this id.
    async fn increment_like(&self, id: &str) -> Result<Option<PostDTO>, StorageFailure>;

    /// Remove a post, returning what it held. `None` when no post has this id.
    async fn delete_by_id(&self, id: &str) -> Result<Option<PostDTO>, StorageFailure>;
}

pub struct PostgresPostRepository {
    pg_pool: Pool,
    query_timeout: Duration,
}

impl PostgresPostRepository {
    pub fn new(pg_pool: Pool, query_timeout: Duration) -> Self {
        Self {
            pg_pool,
            query_timeout,
        }
    }

    async fn fetch_one(
        &self,
        statement: &str,
        id: &str,
    ) -> Result<Option<PostDTO>, StorageFailure> {
        let rows = query_executor(&self.pg_pool, self.query_timeout, statement, &[&id]).await?;
        rows.first().map(row_to_post).transpose()
    }
}

fn row_to_post(row: &Row) -> Result<PostDTO, StorageFailure> {
    Ok(PostDTO::try_from(row)?)
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_all(&self) -> Result<Vec<PostDTO>, StorageFailure> {
        let rows = query_executor(&self.pg_pool, self.query_timeout, LIST_POSTS_SQL, &[]).await?;
        rows.iter().map(row_to_post).collect()
    }

    async fn insert(&self, post: &CreatePostDTO) -> Result<PostDTO, StorageFailure> {
        let rows = query_executor(
            &self.pg_pool,
            self.query_timeout,
            INSERT_POST_SQL,
            &[&post.titulo, &post.url, &post.descripcion],
        )
        .await?;

        match rows.first() {
            Some(row) => row_to_post(row),
            None => Err(StorageFailure::new(StorageFailure::CLIENT_ERROR)),
        }
    }

    async fn increment_like(&self, id: &str) -> Result<Option<PostDTO>, StorageFailure> {
        self.fetch_one(LIKE_POST_SQL, id).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<PostDTO>, StorageFailure> {
        self.fetch_one(DELETE_POST_SQL, id).await
    }
}
