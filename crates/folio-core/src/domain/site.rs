/// Site-wide settings shared by the feed, sitemap and SEO helpers.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Public origin without a trailing slash, e.g. `https://example.com`.
    pub base_url: String,
    pub title: String,
    pub description: String,
    pub author_email: Option<String>,
    pub language: String,
}

impl SiteConfig {
    pub fn new(base_url: impl Into<String>, title: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            title: title.into(),
            description: String::new(),
            author_email: None,
            language: "en-us".to_string(),
        }
    }

    /// Absolute URL for a site path (`/blog/...`).
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Canonical link of a post, `{base_url}/blog/{slug}`.
    pub fn post_url(&self, slug: &str) -> String {
        format!("{}/blog/{}", self.base_url, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_strip_trailing_slash() {
        let site = SiteConfig::new("https://example.com/", "Blog");
        assert_eq!(site.post_url("hello"), "https://example.com/blog/hello");
        assert_eq!(site.url("/blog"), "https://example.com/blog");
        assert_eq!(site.url("sitemap.xml"), "https://example.com/sitemap.xml");
    }
}
