//! SEO metadata: meta tag sets, JSON-LD, sitemap and robots.txt.
//!
//! Everything here produces plain data or text. Injecting tags into a page
//! head is left to whoever renders the page.

use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::{Post, SiteConfig};
use crate::feed::escape_xml;

pub const DEFAULT_SITEMAP_PRIORITY: f32 = 0.5;

/// Which attribute carries the key of a `<meta>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaAttribute {
    Name,
    Property,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    pub attribute: MetaAttribute,
    pub key: String,
    pub content: String,
}

impl MetaTag {
    fn name(key: &str, content: impl Into<String>) -> Self {
        Self {
            attribute: MetaAttribute::Name,
            key: key.to_string(),
            content: content.into(),
        }
    }

    fn property(key: &str, content: impl Into<String>) -> Self {
        Self {
            attribute: MetaAttribute::Property,
            key: key.to_string(),
            content: content.into(),
        }
    }
}

/// Page-level SEO data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoData {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub author: Option<String>,
    pub section: Option<String>,
}

impl SeoData {
    /// SEO data for a post page. The meta description falls back to the
    /// excerpt, and the keywords to the tags.
    pub fn for_post(post: &Post, site: &SiteConfig) -> Self {
        let description = post
            .meta_description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| post.excerpt.clone());

        let keywords = post
            .meta_keywords
            .clone()
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| post.tags.clone());

        Self {
            title: format!("{} | {}", post.title, site.title),
            description,
            keywords,
            image: Some(post.image_url.clone()).filter(|i| !i.is_empty()),
            url: Some(site.post_url(&post.slug)),
            kind: "article".to_string(),
            published_time: Some(post.published_at.to_rfc3339()),
            modified_time: post.updated_at.map(|t| t.to_rfc3339()),
            author: Some(post.author.clone()),
            section: Some(post.category.display_name()),
        }
    }

    /// The full `<meta>` tag set: basic, Open Graph, article and Twitter card.
    pub fn meta_tags(&self) -> Vec<MetaTag> {
        let mut tags = vec![MetaTag::name("description", &self.description)];

        if !self.keywords.is_empty() {
            tags.push(MetaTag::name("keywords", self.keywords.join(", ")));
        }
        if let Some(author) = &self.author {
            tags.push(MetaTag::name("author", author));
        }

        tags.push(MetaTag::property("og:title", &self.title));
        tags.push(MetaTag::property("og:description", &self.description));
        tags.push(MetaTag::property("og:type", &self.kind));
        if let Some(url) = &self.url {
            tags.push(MetaTag::property("og:url", url));
        }
        if let Some(image) = &self.image {
            tags.push(MetaTag::property("og:image", image));
        }
        if let Some(published) = &self.published_time {
            tags.push(MetaTag::property("article:published_time", published));
        }
        if let Some(modified) = &self.modified_time {
            tags.push(MetaTag::property("article:modified_time", modified));
        }
        if let Some(author) = &self.author {
            tags.push(MetaTag::property("article:author", author));
        }
        if let Some(section) = &self.section {
            tags.push(MetaTag::property("article:section", section));
        }

        tags.push(MetaTag::name("twitter:card", "summary_large_image"));
        tags.push(MetaTag::name("twitter:title", &self.title));
        tags.push(MetaTag::name("twitter:description", &self.description));
        if let Some(image) = &self.image {
            tags.push(MetaTag::name("twitter:image", image));
        }

        tags
    }

    /// schema.org `BlogPosting` structured data.
    pub fn blog_posting_json_ld(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "BlogPosting",
            "headline": self.title,
            "description": self.description,
            "image": self.image,
            "author": { "@type": "Person", "name": self.author },
            "publisher": { "@type": "Person", "name": self.author },
            "datePublished": self.published_time,
            "dateModified": self.modified_time.as_ref().or(self.published_time.as_ref()),
            "mainEntityOfPage": { "@type": "WebPage", "@id": self.url },
        })
    }
}

/// One `<url>` entry of a sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Site-relative path, e.g. `/blog/hello`.
    pub path: String,
    pub lastmod: Option<String>,
    pub priority: Option<f32>,
}

impl SitemapEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            lastmod: None,
            priority: None,
        }
    }

    pub fn with_lastmod(mut self, lastmod: impl Into<String>) -> Self {
        self.lastmod = Some(lastmod.into());
        self
    }

    pub fn with_priority(mut self, priority: f32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Entry for a post, last modified at its update or publish date.
    pub fn for_post(post: &Post) -> Self {
        let lastmod = post.updated_at.unwrap_or(post.published_at);
        Self::new(post.path()).with_lastmod(lastmod.format("%Y-%m-%d").to_string())
    }
}

/// Render a sitemaps.org `urlset` document.
pub fn render_sitemap(site: &SiteConfig, entries: &[SitemapEntry]) -> String {
    let mut urls = String::new();
    for entry in entries {
        urls.push_str("\n  <url>\n");
        urls.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&site.url(&entry.path))));
        if let Some(lastmod) = &entry.lastmod {
            urls.push_str(&format!("    <lastmod>{}</lastmod>\n", escape_xml(lastmod)));
        }
        urls.push_str(&format!(
            "    <priority>{:.1}</priority>\n",
            entry.priority.unwrap_or(DEFAULT_SITEMAP_PRIORITY)
        ));
        urls.push_str("  </url>");
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">{urls}\n\
         </urlset>\n"
    )
}

/// robots.txt allowing every crawler and pointing at the sitemap.
pub fn render_robots(site: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        site.url("/sitemap.xml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, NewPost};

    fn post() -> Post {
        Post::create(NewPost {
            title: "Rust at Work".to_string(),
            slug: String::new(),
            excerpt: "How we ship Rust.".to_string(),
            content: "body".to_string(),
            image_url: "https://img.example.com/cover.jpg".to_string(),
            category: Category::WebDevelopment,
            tags: vec!["Rust".to_string(), "Teams".to_string()],
            author: "Jane Doe".to_string(),
            published_at: None,
            featured: false,
            published: true,
            meta_description: None,
            meta_keywords: Some(vec!["rust".to_string(), "production".to_string()]),
        })
        .unwrap()
    }

    fn site() -> SiteConfig {
        SiteConfig::new("https://example.com", "Jane Doe")
    }

    #[test]
    fn test_for_post_falls_back_to_excerpt() {
        let seo = SeoData::for_post(&post(), &site());
        assert_eq!(seo.title, "Rust at Work | Jane Doe");
        assert_eq!(seo.description, "How we ship Rust.");
        assert_eq!(seo.keywords, vec!["rust", "production"]);
        assert_eq!(seo.url.as_deref(), Some("https://example.com/blog/rust-at-work"));
        assert_eq!(seo.section.as_deref(), Some("Web development"));
    }

    #[test]
    fn test_meta_tags() {
        let tags = SeoData::for_post(&post(), &site()).meta_tags();
        let find = |key: &str| tags.iter().find(|t| t.key == key).map(|t| t.content.clone());

        assert_eq!(find("keywords").as_deref(), Some("rust, production"));
        assert_eq!(find("og:type").as_deref(), Some("article"));
        assert_eq!(find("twitter:card").as_deref(), Some("summary_large_image"));
        assert!(find("article:modified_time").is_none());

        let og_title = tags.iter().find(|t| t.key == "og:title").unwrap();
        assert_eq!(og_title.attribute, MetaAttribute::Property);
    }

    #[test]
    fn test_json_ld_uses_published_when_unmodified() {
        let seo = SeoData::for_post(&post(), &site());
        let ld = seo.blog_posting_json_ld();
        assert_eq!(ld["@type"], "BlogPosting");
        assert_eq!(ld["headline"], "Rust at Work | Jane Doe");
        assert_eq!(ld["dateModified"], ld["datePublished"]);
        assert_eq!(ld["author"]["name"], "Jane Doe");
    }

    #[test]
    fn test_sitemap() {
        let entries = vec![
            SitemapEntry::new("/").with_priority(1.0),
            SitemapEntry::new("/blog/hello").with_lastmod("2024-01-15"),
        ];
        let xml = render_sitemap(&site(), &entries);
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<lastmod>2024-01-15</lastmod>"));
        assert!(xml.contains("<priority>0.5</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_robots() {
        let robots = render_robots(&site());
        assert!(robots.starts_with("User-agent: *\nAllow: /"));
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
    }
}
