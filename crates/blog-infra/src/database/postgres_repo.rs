//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};

use blog_core::domain::BlogPost;
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find()
            .count(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))
    }

    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<(), RepoError> {
        if posts.is_empty() {
            return Ok(());
        }

        let models: Vec<post::ActiveModel> = posts.into_iter().map(Into::into).collect();

        PostEntity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(())
    }
}
