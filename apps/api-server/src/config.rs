//! Application configuration loaded from environment variables.

use std::env;

use folio_core::domain::SiteConfig;
use folio_core::listing::DEFAULT_PAGE_SIZE;

/// Upper bound for a client-requested page size.
pub const MAX_PAGE_SIZE: usize = 50;

/// Default request body limit. Import bodies are whole exports, so this is
/// well above actix's per-extractor defaults.
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub site: SiteConfig,
    pub posts_per_page: usize,
    /// Load the sample posts at startup.
    pub seed_posts: bool,
    /// Largest accepted request body, JSON or raw.
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            site: Self::site_from_env(port),
            posts_per_page: env::var("POSTS_PER_PAGE")
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .map(|n| n.clamp(1, MAX_PAGE_SIZE))
                .unwrap_or(DEFAULT_PAGE_SIZE),
            seed_posts: env::var("SEED_POSTS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            max_body_bytes: env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
        }
    }

    /// Site settings used by the feed, sitemap and SEO endpoints.
    ///
    /// `SITE_BASE_URL` defaults to the local listen address.
    fn site_from_env(port: u16) -> SiteConfig {
        let base_url = env::var("SITE_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{port}"));
        let title = env::var("SITE_TITLE").unwrap_or_else(|_| "Folio Blog".to_string());

        let mut site = SiteConfig::new(base_url, title);
        site.description = env::var("SITE_DESCRIPTION").unwrap_or_default();
        site.author_email = env::var("SITE_AUTHOR_EMAIL").ok().filter(|e| !e.is_empty());
        if let Ok(language) = env::var("SITE_LANGUAGE") {
            site.language = language;
        }
        site
    }
}
