use crate::domain::{BlogStats, Category, CategorySummary, Post};
use crate::error::DomainError;

use super::{BlogService, sort_newest_first};

impl BlogService {
    /// Published posts, newest first.
    pub async fn list_published(&self) -> Result<Vec<Post>, DomainError> {
        let mut posts = self.published().await?;
        sort_newest_first(&mut posts);
        tracing::debug!(count = posts.len(), "Listed published posts");
        Ok(posts)
    }

    /// The published post with this slug, if any.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Post>, DomainError> {
        let post = self
            .published()
            .await?
            .into_iter()
            .find(|p| p.slug == slug);

        if post.is_none() {
            tracing::debug!(slug = %slug, "No published post with slug");
        }
        Ok(post)
    }

    /// Published posts in one category, newest first.
    pub async fn list_by_category(&self, category: Category) -> Result<Vec<Post>, DomainError> {
        let posts = self
            .list_published()
            .await?
            .into_iter()
            .filter(|p| p.category == category)
            .collect();
        Ok(posts)
    }

    /// Published posts whose title, excerpt or any tag contains `query`,
    /// ignoring case. An empty query matches every published post.
    pub async fn search(&self, query: &str) -> Result<Vec<Post>, DomainError> {
        let needle = query.to_lowercase();
        let posts: Vec<Post> = self
            .list_published()
            .await?
            .into_iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.excerpt.to_lowercase().contains(&needle)
                    || p.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .collect();

        tracing::debug!(query = %query, hits = posts.len(), "Searched posts");
        Ok(posts)
    }

    /// Published posts flagged as featured, newest first.
    pub async fn list_featured(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self
            .list_published()
            .await?
            .into_iter()
            .filter(|p| p.featured)
            .collect();
        Ok(posts)
    }

    /// Categories present among published posts with their counts,
    /// in order of first appearance in the store.
    pub async fn list_categories(&self) -> Result<Vec<CategorySummary>, DomainError> {
        let mut counts: Vec<(Category, usize)> = Vec::new();

        for post in self.published().await? {
            match counts.iter_mut().find(|(c, _)| *c == post.category) {
                Some((_, count)) => *count += 1,
                None => counts.push((post.category, 1)),
            }
        }

        Ok(counts
            .into_iter()
            .map(|(category, count)| CategorySummary::new(category, count))
            .collect())
    }

    /// Summary statistics over the published posts.
    pub async fn get_stats(&self) -> Result<BlogStats, DomainError> {
        Ok(BlogStats::from_published(self.published().await?))
    }
}
