use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::BlogPost;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<BlogPost, Uuid> {
    /// All stored posts as an ordered sequence.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Total number of stored posts.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Batch insertion, used for seeding.
    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<(), RepoError>;
}
