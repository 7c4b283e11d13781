//! In-memory post repository - used when no database is configured, and
//! as the backing store for the HTTP integration tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::BlogPost;
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

/// In-memory post store keeping posts in insertion order.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, entity: BlogPost) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;
        match posts.iter_mut().find(|p| p.id == entity.id) {
            Some(existing) => *existing = entity.clone(),
            None => posts.push(entity.clone()),
        }
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);

        if posts.len() == before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.posts.read().await.len() as u64)
    }

    async fn insert_many(&self, new_posts: Vec<BlogPost>) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        posts.extend(new_posts);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::domain::Author;

    fn sample_post(title: &str) -> BlogPost {
        BlogPost::new(
            Author::new("Ada", "Lovelace"),
            title.to_string(),
            "content".to_string(),
            None,
        )
    }

    #[tokio::test]
    async fn save_then_find_by_id() {
        let repo = InMemoryPostRepository::new();
        let post = repo.save(sample_post("first")).await.unwrap();

        let found = repo.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(found.title, "first");
        assert_eq!(found.id, post.id);
    }

    #[tokio::test]
    async fn save_with_existing_id_replaces_the_record() {
        let repo = InMemoryPostRepository::new();
        let mut post = repo.save(sample_post("before")).await.unwrap();

        post.title = "after".to_string();
        repo.save(post.clone()).await.unwrap();

        let found = repo.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(found.title, "after");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let repo = InMemoryPostRepository::new();
        let post = repo.save(sample_post("doomed")).await.unwrap();

        repo.delete(post.id).await.unwrap();
        assert!(repo.find_by_id(post.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_unknown_id_reports_not_found() {
        let repo = InMemoryPostRepository::new();
        let err = repo.delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn insert_many_preserves_insertion_order() {
        let repo = InMemoryPostRepository::new();
        let batch: Vec<BlogPost> = (0..5).map(|i| sample_post(&format!("post {i}"))).collect();
        let ids: Vec<Uuid> = batch.iter().map(|p| p.id).collect();

        repo.insert_many(batch).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(repo.count().await.unwrap(), 5);
        assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), ids);
    }
}
