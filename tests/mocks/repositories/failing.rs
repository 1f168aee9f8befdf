use async_trait::async_trait;
use like_me_api::{
    modules::post::{
        post_dtos::{CreatePostDTO, PostDTO},
        post_repositories::PostRepository,
    },
    shared::exceptions::storage_failure::StorageFailure,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Repository whose every operation fails with the same code.
pub struct FailingPostRepository {
    code: String,
    calls: AtomicUsize,
}

impl FailingPostRepository {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, StorageFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StorageFailure::new(self.code.clone()))
    }
}

#[async_trait]
impl PostRepository for FailingPostRepository {
    async fn list_all(&self) -> Result<Vec<PostDTO>, StorageFailure> {
        self.fail()
    }

    async fn insert(&self, _post: &CreatePostDTO) -> Result<PostDTO, StorageFailure> {
        self.fail()
    }

    async fn increment_like(&self, _id: &str) -> Result<Option<PostDTO>, StorageFailure> {
        self.fail()
    }

    async fn delete_by_id(&self, _id: &str) -> Result<Option<PostDTO>, StorageFailure> {
        self.fail()
    }
}
