//! In-memory post store - the system of record for the process lifetime.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use folio_core::domain::Post;
use folio_core::error::RepoError;
use folio_core::ports::{BaseRepository, PostRepository};

use super::seed::seed_posts;

/// Ordered post store backed by a `Vec` behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Store pre-loaded with the sample posts.
    pub fn seeded() -> Self {
        let posts = seed_posts();
        tracing::info!(count = posts.len(), "Post store seeded");
        Self::with_posts(posts)
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        match posts.iter_mut().find(|p| p.id == entity.id) {
            Some(slot) => *slot = entity.clone(),
            // New posts go to the front; store order is not publish order.
            None => posts.insert(0, entity.clone()),
        }

        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;

        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        posts.remove(index);

        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn replace_all(&self, posts: Vec<Post>) -> Result<(), RepoError> {
        *self.posts.write().await = posts;
        Ok(())
    }

    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.posts.read().await.len())
    }
}
