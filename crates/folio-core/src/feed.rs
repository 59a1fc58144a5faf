//! RSS 2.0 syndication feed.

use chrono::{DateTime, Utc};

use crate::domain::{Post, SiteConfig};

/// Date format required by RSS 2.0 (RFC 822), always in GMT.
const RSS_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Render `posts` as an RSS 2.0 document, in the order given.
pub fn render_rss(posts: &[Post], site: &SiteConfig, built_at: DateTime<Utc>) -> String {
    let items: String = posts.iter().map(|post| render_item(post, site)).collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">
  <channel>
    <title>{title}</title>
    <description>{description}</description>
    <link>{link}</link>
    <atom:link href="{self_link}" rel="self" type="application/rss+xml"/>
    <language>{language}</language>
    <lastBuildDate>{built}</lastBuildDate>{items}
  </channel>
</rss>
"#,
        title = escape_xml(&site.title),
        description = escape_xml(&site.description),
        link = escape_xml(&site.url("/blog")),
        self_link = escape_xml(&site.url("/blog/rss.xml")),
        language = escape_xml(&site.language),
        built = built_at.format(RSS_DATE_FORMAT),
        items = items,
    )
}

fn render_item(post: &Post, site: &SiteConfig) -> String {
    let link = escape_xml(&site.post_url(&post.slug));
    let author = match &site.author_email {
        Some(email) => format!("{} ({})", email, post.author),
        None => post.author.clone(),
    };

    format!(
        r#"
    <item>
      <title>{title}</title>
      <description>{description}</description>
      <link>{link}</link>
      <guid>{link}</guid>
      <pubDate>{published}</pubDate>
      <author>{author}</author>
      <category>{category}</category>
    </item>"#,
        title = cdata(&post.title),
        description = cdata(&post.excerpt),
        link = link,
        published = post.published_at.format(RSS_DATE_FORMAT),
        author = escape_xml(&author),
        category = post.category.as_str(),
    )
}

/// Wrap text in a CDATA section, splitting any embedded terminator.
fn cdata(text: &str) -> String {
    let text: String = text.chars().filter(|&c| is_xml_char(c)).collect();
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}

/// Characters allowed in an XML 1.0 document. Control characters other than
/// tab, newline and carriage return cannot appear even when escaped.
fn is_xml_char(c: char) -> bool {
    !matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars().filter(|&c| is_xml_char(c)) {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::domain::{Category, NewPost};

    fn post(title: &str, slug: &str) -> Post {
        let mut post = Post::create(NewPost {
            title: title.to_string(),
            slug: slug.to_string(),
            excerpt: "An <excerpt>".to_string(),
            content: "body".to_string(),
            image_url: String::new(),
            category: Category::WebDevelopment,
            tags: Vec::new(),
            author: "Jane Doe".to_string(),
            published_at: None,
            featured: false,
            published: true,
            meta_description: None,
            meta_keywords: None,
        })
        .unwrap();
        post.published_at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        post
    }

    fn site() -> SiteConfig {
        let mut site = SiteConfig::new("https://example.com", "Jane's Blog");
        site.description = "Notes & essays".to_string();
        site.author_email = Some("jane@example.com".to_string());
        site
    }

    #[test]
    fn test_item_fields() {
        let built = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let xml = render_rss(&[post("Hello RSS", "hello-rss")], &site(), built);

        assert!(xml.contains("<title><![CDATA[Hello RSS]]></title>"));
        assert!(xml.contains("<description><![CDATA[An <excerpt>]]></description>"));
        assert!(xml.contains("<link>https://example.com/blog/hello-rss</link>"));
        assert!(xml.contains("<guid>https://example.com/blog/hello-rss</guid>"));
        assert!(xml.contains("<pubDate>Mon, 15 Jan 2024 10:00:00 GMT</pubDate>"));
        assert!(xml.contains("<author>jane@example.com (Jane Doe)</author>"));
        assert!(xml.contains("<category>web-development</category>"));
    }

    #[test]
    fn test_channel_envelope() {
        let built = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let xml = render_rss(&[], &site(), built);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<title>Jane&apos;s Blog</title>"));
        assert!(xml.contains("<description>Notes &amp; essays</description>"));
        assert!(xml.contains("<link>https://example.com/blog</link>"));
        assert!(xml.contains("<lastBuildDate>Thu, 01 Feb 2024 00:00:00 GMT</lastBuildDate>"));
        assert!(!xml.contains("<item>"));
    }

    #[test]
    fn test_cdata_terminator_is_split() {
        assert_eq!(cdata("a]]>b"), "<![CDATA[a]]]]><![CDATA[>b]]>");
    }

    #[test]
    fn test_forbidden_control_characters_are_dropped() {
        let built = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let mut site = site();
        site.title = "Bell\u{7} Blog".to_string();
        let xml = render_rss(&[post("Start\u{1}End", "start-end")], &site, built);

        assert!(xml.contains("<title><![CDATA[StartEnd]]></title>"));
        assert!(xml.contains("<title>Bell Blog</title>"));
        assert!(!xml.chars().any(|c| c.is_control() && !matches!(c, '\t' | '\n' | '\r')));

        assert_eq!(escape_xml("tab\there\u{1B}"), "tab\there");
    }
}
