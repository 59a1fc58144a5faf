use std::collections::HashSet;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Post, SiteConfig};
use crate::error::DomainError;
use crate::feed;

use super::BlogService;

/// How an imported document is combined with the current store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// The document becomes the whole store.
    #[default]
    Replace,
    /// Posts are upserted by id; unknown ids go to the front of the store.
    Merge,
}

impl FromStr for ImportMode {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "replace" => Ok(ImportMode::Replace),
            "merge" => Ok(ImportMode::Merge),
            other => Err(DomainError::Validation(format!("unknown import mode '{other}'"))),
        }
    }
}

/// Outcome of a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// Posts read from the document.
    pub imported: usize,
    /// Store size after the import.
    pub total: usize,
}

impl BlogService {
    /// Serialize every post, published or not, as a JSON array in store order.
    pub async fn export_all(&self) -> Result<String, DomainError> {
        let posts = self.repo.find_all().await?;
        let document = serde_json::to_string_pretty(&posts)
            .map_err(|e| DomainError::Internal(format!("failed to serialize posts: {e}")))?;

        tracing::info!(count = posts.len(), "Exported posts");
        Ok(document)
    }

    /// Load a document produced by [`BlogService::export_all`].
    ///
    /// The document is fully parsed and checked before the store is touched;
    /// any failure leaves the store as it was. Records must already satisfy
    /// the post invariants (see [`Post::validate_record`]).
    pub async fn import_all(
        &self,
        document: &str,
        mode: ImportMode,
    ) -> Result<ImportSummary, DomainError> {
        let incoming: Vec<Post> = serde_json::from_str(document).map_err(|e| {
            tracing::warn!(error = %e, "Rejected import document");
            DomainError::MalformedImport(e.to_string())
        })?;
        let imported = incoming.len();
        for post in &incoming {
            post.validate_record().inspect_err(|e| {
                tracing::warn!(error = %e, "Rejected import document");
            })?;
        }
        ensure_unique(&incoming, |p| p.id.to_string(), "id")?;

        let _guard = self.writer.lock().await;

        let posts = match mode {
            ImportMode::Replace => incoming,
            ImportMode::Merge => merge(self.repo.find_all().await?, incoming),
        };
        ensure_unique(&posts, |p| p.slug.clone(), "slug")?;

        let total = posts.len();
        self.repo.replace_all(posts).await?;

        tracing::info!(imported, total, ?mode, "Imported posts");
        Ok(ImportSummary { imported, total })
    }

    /// Render the RSS feed of published posts, newest first.
    pub async fn render_feed(
        &self,
        site: &SiteConfig,
        built_at: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let posts = self.list_published().await?;
        Ok(feed::render_rss(&posts, site, built_at))
    }
}

fn merge(current: Vec<Post>, incoming: Vec<Post>) -> Vec<Post> {
    let mut existing = current;
    let mut added = Vec::new();

    for post in incoming {
        match existing.iter_mut().find(|p| p.id == post.id) {
            Some(slot) => *slot = post,
            None => added.push(post),
        }
    }

    added.extend(existing);
    added
}

fn ensure_unique<F>(posts: &[Post], key: F, field: &str) -> Result<(), DomainError>
where
    F: Fn(&Post) -> String,
{
    let mut seen = HashSet::new();
    for post in posts {
        let value = key(post);
        if !seen.insert(value.clone()) {
            tracing::warn!(field, value = %value, "Rejected import document with duplicates");
            return Err(DomainError::MalformedImport(format!(
                "duplicate {field} '{value}'"
            )));
        }
    }
    Ok(())
}
