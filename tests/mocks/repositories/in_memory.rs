use async_trait::async_trait;
use like_me_api::{
    modules::post::{
        post_dtos::{CreatePostDTO, PostDTO},
        post_repositories::PostRepository,
    },
    shared::exceptions::storage_failure::StorageFailure,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

/// Repository kept in memory, behaving like the `posts` table: ids are assigned in sequence and
/// never reused, a non-numeric id fails the way Postgres does (`22P02`).
pub struct InMemoryPostRepository {
    posts: Mutex<Vec<PostDTO>>,
    next_id: Mutex<i32>,
    calls: AtomicUsize,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    pub fn with_posts(posts: Vec<PostDTO>) -> Self {
        let next_id = posts.iter().map(|post| post.id).max().unwrap_or(0) + 1;
        Self {
            posts: Mutex::new(posts),
            next_id: Mutex::new(next_id),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of repository operations performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<PostDTO> {
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by_key(|post| post.id);
        posts
    }

    fn parse_id(id: &str) -> Result<i32, StorageFailure> {
        id.parse().map_err(|_| StorageFailure::new("22P02"))
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_all(&self) -> Result<Vec<PostDTO>, StorageFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot())
    }

    async fn insert(&self, post: &CreatePostDTO) -> Result<PostDTO, StorageFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut next_id = self.next_id.lock().unwrap();
        let created = PostDTO {
            id: *next_id,
            titulo: post.titulo.clone(),
            img: post.url.clone(),
            descripcion: post.descripcion.clone(),
            likes: 0,
        };
        *next_id += 1;
        self.posts.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn increment_like(&self, id: &str) -> Result<Option<PostDTO>, StorageFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let id = Self::parse_id(id)?;
        let mut posts = self.posts.lock().unwrap();
        Ok(posts.iter_mut().find(|post| post.id == id).map(|post| {
            post.likes += 1;
            post.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<PostDTO>, StorageFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let id = Self::parse_id(id)?;
        let mut posts = self.posts.lock().unwrap();
        let index = posts.iter().position(|post| post.id == id);
        Ok(index.map(|index| posts.remove(index)))
    }
}
