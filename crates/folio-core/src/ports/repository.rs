use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Absent IDs yield `RepoError::NotFound`.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository - the ordered post store.
///
/// `save` replaces an existing post in place and puts a new one at the front,
/// so store order is most-recently-created first, not publish order.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Every post, published or not, in store order.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Swap the whole store contents in one step.
    async fn replace_all(&self, posts: Vec<Post>) -> Result<(), RepoError>;

    /// Number of stored posts.
    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.find_all().await?.len())
    }
}
