//! Blog services - the query, mutation and export layers over the post store.
//!
//! All three layers are `impl` blocks on [`BlogService`], split by concern:
//! `query` (read-only, published posts only), `mutation` (create, update,
//! delete) and `transfer` (export, import, feed).

mod mutation;
mod query;
mod transfer;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::Post;
use crate::error::DomainError;
use crate::ports::PostRepository;

pub use transfer::{ImportMode, ImportSummary};

/// Blog content service.
///
/// Owns a handle to the post store. Queries go straight to the repository;
/// mutations and imports first take the writer lock so that check-then-write
/// sequences (slug uniqueness, whole-store replacement) are atomic for every
/// caller sharing this service.
pub struct BlogService {
    repo: Arc<dyn PostRepository>,
    writer: Mutex<()>,
}

impl BlogService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            repo,
            writer: Mutex::new(()),
        }
    }

    /// Every post in store order, published or not. Used by the admin table.
    pub async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.find_all().await?)
    }

    async fn published(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.repo.find_all().await?;
        Ok(posts.into_iter().filter(|p| p.published).collect())
    }
}

/// Sort newest publish date first. Stable, so ties keep store order.
pub(crate) fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}
