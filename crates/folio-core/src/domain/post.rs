use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use super::content::{estimate_read_time, normalize_tags, slugify};
use crate::error::DomainError;

/// Post entity - a single blog article.
///
/// Serialized field-for-field (camelCase) as the interchange document record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub author: String,
    pub published_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub read_time: String,
    pub featured: bool,
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
}

impl Post {
    /// Build a stored post from creation input.
    ///
    /// The id is a UUIDv7, so it is derived from the creation timestamp.
    /// A blank slug is derived from the title.
    pub fn create(input: NewPost) -> Result<Self, DomainError> {
        let slug = resolve_slug(&input.slug, &input.title)?;
        let read_time = estimate_read_time(&input.content);

        Ok(Self {
            id: Uuid::now_v7(),
            title: input.title,
            slug,
            excerpt: input.excerpt,
            content: input.content,
            image_url: input.image_url,
            category: input.category,
            tags: normalize_tags(&input.tags),
            author: input.author,
            published_at: input.published_at.unwrap_or_else(Utc::now),
            updated_at: None,
            read_time,
            featured: input.featured,
            published: input.published,
            meta_description: input.meta_description,
            meta_keywords: input.meta_keywords.map(normalize_tags),
            views: None,
        })
    }

    /// Check a post read from outside the service (an import document) against
    /// the invariants `create` and `PostPatch::apply` maintain.
    ///
    /// Nothing is repaired: a record that would change under normalization is
    /// rejected, so a well-formed export imports back unchanged.
    pub fn validate_record(&self) -> Result<(), DomainError> {
        let invalid = |reason: String| -> Result<(), DomainError> {
            Err(DomainError::MalformedImport(format!("post {}: {reason}", self.id)))
        };

        if self.slug.is_empty() || slugify(&self.slug) != self.slug {
            return invalid(format!("slug {:?} is not URL-safe", self.slug));
        }
        if normalize_tags(&self.tags) != self.tags {
            return invalid("tags must be trimmed, non-empty and unique".to_string());
        }
        if let Some(keywords) = &self.meta_keywords {
            if normalize_tags(keywords) != *keywords {
                return invalid("meta keywords must be trimmed, non-empty and unique".to_string());
            }
        }
        let expected = estimate_read_time(&self.content);
        if self.read_time != expected {
            return invalid(format!(
                "read time {:?} does not match content ({expected})",
                self.read_time
            ));
        }
        Ok(())
    }

    /// Canonical public path of the post.
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

/// Input for creating a post. The id, read time and update stamp are derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewPost {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub image_url: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Option<Vec<String>>,
}

/// Partial update for a post. Absent fields keep their current value;
/// unknown fields are rejected at deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<Category>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<Vec<String>>,
}

impl PostPatch {
    /// Merge the patch into `post` and stamp `updated_at`.
    ///
    /// An explicitly blank slug is re-derived from the (possibly new) title.
    /// The read time follows the content. A blank meta description or an empty
    /// keyword list clears the field.
    pub fn apply(self, post: &mut Post, now: DateTime<Utc>) -> Result<(), DomainError> {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(slug) = self.slug {
            post.slug = resolve_slug(&slug, &post.title)?;
        }
        if let Some(excerpt) = self.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(content) = self.content {
            post.read_time = estimate_read_time(&content);
            post.content = content;
        }
        if let Some(image_url) = self.image_url {
            post.image_url = image_url;
        }
        if let Some(category) = self.category {
            post.category = category;
        }
        if let Some(tags) = self.tags {
            post.tags = normalize_tags(&tags);
        }
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(published_at) = self.published_at {
            post.published_at = published_at;
        }
        if let Some(featured) = self.featured {
            post.featured = featured;
        }
        if let Some(published) = self.published {
            post.published = published;
        }
        if let Some(description) = self.meta_description {
            post.meta_description = (!description.trim().is_empty()).then_some(description);
        }
        if let Some(keywords) = self.meta_keywords {
            let keywords = normalize_tags(&keywords);
            post.meta_keywords = (!keywords.is_empty()).then_some(keywords);
        }

        post.updated_at = Some(now);
        Ok(())
    }
}

fn resolve_slug(requested: &str, title: &str) -> Result<String, DomainError> {
    let slug = if requested.trim().is_empty() {
        slugify(title)
    } else {
        slugify(requested)
    };

    if slug.is_empty() {
        return Err(DomainError::Validation(format!(
            "cannot derive a slug from title {title:?}"
        )));
    }
    Ok(slug)
}
