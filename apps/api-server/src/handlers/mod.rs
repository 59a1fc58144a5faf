//! HTTP handlers and route configuration.

mod admin;
mod feed;
mod health;
mod posts;

use actix_web::{ResponseError, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Public blog routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("/featured", web::get().to(posts::featured_posts))
                    .route("/search", web::get().to(posts::search_posts))
                    .route("/{slug}", web::get().to(posts::get_post))
                    .route("/{slug}/seo", web::get().to(posts::post_seo)),
            )
            .route("/categories", web::get().to(posts::list_categories))
            .route("/stats", web::get().to(posts::blog_stats))
            // Admin routes
            .service(
                web::scope("/admin")
                    .route("/posts", web::get().to(admin::list_all_posts))
                    .route("/posts", web::post().to(admin::create_post))
                    .route("/posts/{id}", web::put().to(admin::update_post))
                    .route("/posts/{id}", web::delete().to(admin::delete_post))
                    .route("/export", web::get().to(admin::export_posts))
                    .route("/import", web::post().to(admin::import_posts)),
            ),
    )
    .route("/blog/rss.xml", web::get().to(feed::rss_feed))
    .route("/sitemap.xml", web::get().to(feed::sitemap))
    .route("/robots.txt", web::get().to(feed::robots));
}

/// JSON extractor config that reports malformed bodies (including unknown
/// fields in a post patch) as RFC 7807 bad requests, and oversized ones as 413.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default().limit(limit).error_handler(|err, _req| {
        AppError::rejected_request(err.status_code(), err.to_string()).into()
    })
}

/// Raw body limit, used by the import endpoint.
pub fn payload_config(limit: usize) -> web::PayloadConfig {
    web::PayloadConfig::new(limit)
}

/// Query string config that reports unparsable parameters as RFC 7807 bad requests.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use folio_core::domain::{Category, NewPost, Post, SiteConfig};
    use folio_infra::InMemoryPostRepository;

    use super::{configure_routes, json_config, payload_config, query_config};
    use crate::config::DEFAULT_MAX_BODY_BYTES;
    use crate::state::AppState;

    fn state() -> AppState {
        AppState::with_repository(
            Arc::new(InMemoryPostRepository::seeded()),
            SiteConfig::new("https://example.com", "Test Blog"),
            6,
        )
    }

    macro_rules! app {
        ($state:expr) => {
            app!($state, DEFAULT_MAX_BODY_BYTES)
        };
        ($state:expr, $limit:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .app_data(json_config($limit))
                    .app_data(payload_config($limit))
                    .app_data(query_config())
                    .configure(configure_routes),
            )
            .await
        };
    }

    /// A store holding one published post with roughly 300 KB of content.
    fn large_state() -> AppState {
        let post = Post::create(NewPost {
            title: "Long Read".to_string(),
            slug: String::new(),
            excerpt: "A very long post".to_string(),
            content: "lorem ".repeat(50_000),
            image_url: String::new(),
            category: Category::Thoughts,
            tags: vec!["long".to_string()],
            author: "Jane Doe".to_string(),
            published_at: None,
            featured: false,
            published: true,
            meta_description: None,
            meta_keywords: None,
        })
        .unwrap();

        AppState::with_repository(
            Arc::new(InMemoryPostRepository::with_posts(vec![post])),
            SiteConfig::new("https://example.com", "Test Blog"),
            6,
        )
    }

    fn new_post_body(title: &str) -> Value {
        json!({
            "title": title,
            "excerpt": "An excerpt",
            "content": "Body text",
            "category": "thoughts",
            "author": "Jane Doe",
            "published": true
        })
    }

    #[actix_web::test]
    async fn test_list_posts_paginates_published() {
        let app = app!(state());

        let req = test::TestRequest::get()
            .uri("/api/posts?per_page=2&page=2")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["totalItems"], 3);
        assert_eq!(body["data"]["totalPages"], 2);
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_list_posts_filters_by_category_and_search() {
        let app = app!(state());

        let req = test::TestRequest::get()
            .uri("/api/posts?category=technology&q=MACHINE")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["slug"], "machine-learning-production-model-deployment");
    }

    #[actix_web::test]
    async fn test_unknown_category_is_bad_request() {
        let app = app!(state());

        let req = test::TestRequest::get()
            .uri("/api/posts?category=cooking")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_post_hides_drafts() {
        let app = app!(state());

        let req = test::TestRequest::get()
            .uri("/api/posts/building-llm-applications-langchain-langgraph")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["data"]["contentHtml"].as_str().unwrap().contains("<br>"));

        let req = test::TestRequest::get()
            .uri("/api/posts/notes-senior-to-staff-engineer")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_post_seo() {
        let app = app!(state());

        let req = test::TestRequest::get()
            .uri("/api/posts/building-scalable-data-pipelines-spark-airflow/seo")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["jsonLd"]["@type"], "BlogPosting");
        assert_eq!(
            body["data"]["seo"]["url"],
            "https://example.com/blog/building-scalable-data-pipelines-spark-airflow"
        );
        assert!(!body["data"]["metaTags"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_create_then_visible_and_duplicate_conflicts() {
        let app = app!(state());

        let req = test::TestRequest::post()
            .uri("/api/admin/posts")
            .set_json(new_post_body("Hello, World! 2024"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get()
            .uri("/api/posts/hello-world-2024")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri("/api/admin/posts")
            .set_json(new_post_body("Hello World 2024"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_update_rejects_unknown_fields() {
        let app = app!(state());

        let req = test::TestRequest::get().uri("/api/admin/posts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let id = body["data"][0]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/posts/{id}"))
            .set_json(json!({ "title": "New", "viewCount": 3 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/posts/{id}"))
            .set_json(json!({ "title": "New" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["title"], "New");
        assert!(body["data"]["updatedAt"].is_string());
    }

    #[actix_web::test]
    async fn test_missing_ids_are_not_found() {
        let app = app!(state());
        let id = uuid::Uuid::now_v7();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/posts/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/posts/{id}"))
            .set_json(json!({ "featured": true }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_export_and_import() {
        let app = app!(state());

        let req = test::TestRequest::get().uri("/api/admin/export").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key("content-disposition"));
        let document = test::read_body(resp).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/import?mode=replace")
            .set_payload(document)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["imported"], 4);
        assert_eq!(body["data"]["total"], 4);

        let req = test::TestRequest::post()
            .uri("/api/admin/import")
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_large_export_imports_back() {
        let app = app!(large_state());

        let req = test::TestRequest::get().uri("/api/admin/export").to_request();
        let document = test::call_and_read_body(&app, req).await;
        assert!(document.len() > 256 * 1024);

        let req = test::TestRequest::post()
            .uri("/api/admin/import?mode=replace")
            .set_payload(document)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["imported"], 1);
    }

    #[actix_web::test]
    async fn test_oversized_bodies_are_problem_details() {
        let app = app!(large_state(), 1024);

        let req = test::TestRequest::post()
            .uri("/api/admin/import")
            .set_payload("x".repeat(4096))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 413);

        let mut post = new_post_body("Too Big");
        post["content"] = json!("word ".repeat(1024));
        let req = test::TestRequest::post()
            .uri("/api/admin/posts")
            .set_json(post)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Payload Too Large");
    }

    #[actix_web::test]
    async fn test_bad_query_string_is_problem_details() {
        let app = app!(state());

        let req = test::TestRequest::get()
            .uri("/api/posts?page=-1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["title"], "Bad Request");
    }

    #[actix_web::test]
    async fn test_stats_and_categories() {
        let app = app!(state());

        let req = test::TestRequest::get().uri("/api/stats").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["totalPosts"], 3);
        assert_eq!(body["data"]["totalViews"], 750);
        assert_eq!(body["data"]["totalComments"], 24);

        let req = test::TestRequest::get().uri("/api/categories").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_feed_sitemap_and_robots() {
        let app = app!(state());

        let req = test::TestRequest::get().uri("/blog/rss.xml").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("application/rss+xml"));
        let body = test::read_body(resp).await;
        assert_eq!(String::from_utf8_lossy(&body).matches("<item>").count(), 3);

        let req = test::TestRequest::get().uri("/sitemap.xml").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let sitemap = String::from_utf8_lossy(&body);
        assert_eq!(sitemap.matches("<url>").count(), 5);

        let req = test::TestRequest::get().uri("/robots.txt").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert!(String::from_utf8_lossy(&body).contains("Sitemap: https://example.com/sitemap.xml"));
    }
}
