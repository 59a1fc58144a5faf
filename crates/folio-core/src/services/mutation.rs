use chrono::Utc;
use uuid::Uuid;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::{DomainError, RepoError};

use super::BlogService;

impl BlogService {
    /// Create a post with a fresh id and put it at the front of the store.
    ///
    /// Fails with `Duplicate` if another post already uses the slug.
    pub async fn create(&self, input: NewPost) -> Result<Post, DomainError> {
        let _guard = self.writer.lock().await;

        let post = Post::create(input)?;
        self.ensure_slug_free(&post.slug, None).await?;

        let saved = self.repo.save(post).await?;
        tracing::info!(post_id = %saved.id, slug = %saved.slug, "Post created");
        Ok(saved)
    }

    /// Merge `patch` into the post with this id.
    ///
    /// Returns `Ok(None)` when no such post exists.
    pub async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, DomainError> {
        let _guard = self.writer.lock().await;

        let Some(mut post) = self.repo.find_by_id(id).await? else {
            tracing::debug!(post_id = %id, "Update skipped, post not found");
            return Ok(None);
        };

        patch.apply(&mut post, Utc::now())?;
        self.ensure_slug_free(&post.slug, Some(id)).await?;

        let saved = self.repo.save(post).await?;
        tracing::info!(post_id = %saved.id, slug = %saved.slug, "Post updated");
        Ok(Some(saved))
    }

    /// Remove the post with this id. Returns `false` if it did not exist.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let _guard = self.writer.lock().await;

        match self.repo.delete(id).await {
            Ok(()) => {
                tracing::info!(post_id = %id, "Post deleted");
                Ok(true)
            }
            Err(RepoError::NotFound) => {
                tracing::debug!(post_id = %id, "Delete skipped, post not found");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn ensure_slug_free(&self, slug: &str, owner: Option<Uuid>) -> Result<(), DomainError> {
        let taken = self
            .repo
            .find_all()
            .await?
            .iter()
            .any(|p| p.slug == slug && Some(p.id) != owner);

        if taken {
            return Err(DomainError::Duplicate(format!("slug '{slug}' is already in use")));
        }
        Ok(())
    }
}
