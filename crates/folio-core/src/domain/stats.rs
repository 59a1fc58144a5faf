use serde::Serialize;

use super::category::Category;
use super::post::Post;

/// Published-post count for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub post_count: usize,
}

impl CategorySummary {
    pub fn new(category: Category, post_count: usize) -> Self {
        Self {
            id: category.as_str().to_string(),
            name: category.display_name(),
            slug: category.as_str().to_string(),
            post_count,
        }
    }
}

/// Aggregate blog statistics.
///
/// Views and comments are not tracked; both are derived from the published
/// post count.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogStats {
    pub total_posts: usize,
    pub total_views: u64,
    pub total_comments: u64,
    pub average_views: f64,
    pub popular_posts: Vec<Post>,
}

impl BlogStats {
    pub const VIEWS_PER_POST: u64 = 250;
    pub const COMMENTS_PER_POST: u64 = 8;
    pub const POPULAR_LIMIT: usize = 3;

    /// Build statistics from the published posts, in store order.
    pub fn from_published(published: Vec<Post>) -> Self {
        let total_posts = published.len();
        let count = total_posts as u64;
        let total_views = count * Self::VIEWS_PER_POST;

        let average_views = if total_posts == 0 {
            0.0
        } else {
            total_views as f64 / total_posts as f64
        };

        let popular_posts = published.into_iter().take(Self::POPULAR_LIMIT).collect();

        Self {
            total_posts,
            total_views,
            total_comments: count * Self::COMMENTS_PER_POST,
            average_views,
            popular_posts,
        }
    }
}
