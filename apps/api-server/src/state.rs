//! Application state - shared across all handlers.

use std::sync::Arc;

use folio_core::BlogService;
use folio_core::domain::SiteConfig;
use folio_core::ports::PostRepository;
use folio_infra::InMemoryPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: Arc<BlogService>,
    pub site: Arc<SiteConfig>,
    pub posts_per_page: usize,
}

impl AppState {
    /// Build the application state with the in-memory post store.
    pub fn new(config: &AppConfig) -> Self {
        let repo: Arc<dyn PostRepository> = if config.seed_posts {
            Arc::new(InMemoryPostRepository::seeded())
        } else {
            tracing::info!("SEED_POSTS disabled. Starting with an empty post store.");
            Arc::new(InMemoryPostRepository::new())
        };

        let state = Self::with_repository(repo, config.site.clone(), config.posts_per_page);
        tracing::info!("Application state initialized");
        state
    }

    pub fn with_repository(
        repo: Arc<dyn PostRepository>,
        site: SiteConfig,
        posts_per_page: usize,
    ) -> Self {
        Self {
            blog: Arc::new(BlogService::new(repo)),
            site: Arc::new(site),
            posts_per_page,
        }
    }
}
