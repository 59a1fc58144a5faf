//! Machine-readable documents: RSS feed, sitemap and robots.txt.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use folio_core::seo::{SitemapEntry, render_robots, render_sitemap};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /blog/rss.xml
pub async fn rss_feed(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let feed = state.blog.render_feed(&state.site, Utc::now()).await?;

    Ok(HttpResponse::Ok()
        .content_type("application/rss+xml; charset=utf-8")
        .body(feed))
}

/// GET /sitemap.xml - site sections plus every published post.
pub async fn sitemap(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let mut entries = vec![
        SitemapEntry::new("/").with_priority(1.0),
        SitemapEntry::new("/blog").with_priority(0.8),
    ];
    entries.extend(
        state
            .blog
            .list_published()
            .await?
            .iter()
            .map(|post| SitemapEntry::for_post(post).with_priority(0.7)),
    );

    Ok(HttpResponse::Ok()
        .content_type("application/xml; charset=utf-8")
        .body(render_sitemap(&state.site, &entries)))
}

/// GET /robots.txt
pub async fn robots(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(render_robots(&state.site))
}
