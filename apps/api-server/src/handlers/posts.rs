//! Public blog handlers. Only published posts are ever returned.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use folio_core::domain::{CategoryFilter, render_body};
use folio_core::listing::BrowseState;
use folio_core::seo::{MetaTag, SeoData};
use folio_shared::ApiResponse;
use folio_shared::dto::{ListPostsParams, PostDetailResponse, SearchParams};

use crate::config::MAX_PAGE_SIZE;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts?category=&q=&page=&per_page=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsParams>,
) -> AppResult<HttpResponse> {
    let params = query.into_inner();

    let category: CategoryFilter = params.category.as_deref().unwrap_or("all").parse()?;
    let per_page = params
        .per_page
        .unwrap_or(state.posts_per_page)
        .clamp(1, MAX_PAGE_SIZE);

    let mut browse = BrowseState::new(per_page);
    browse.set_category(category);
    browse.set_search(params.q.unwrap_or_default());
    browse.go_to(params.page.unwrap_or(1));

    let posts = state.blog.list_published().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(browse.view(&posts))))
}

/// GET /api/posts/featured
pub async fn featured_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.blog.list_featured().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/search?q=
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchParams>,
) -> AppResult<HttpResponse> {
    let posts = state.blog.search(&query.q).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{slug}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let post = state
        .blog
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post '{slug}' not found")))?;

    let content_html = render_body(&post.content);
    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostDetailResponse { post, content_html })))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SeoResponse {
    seo: SeoData,
    meta_tags: Vec<MetaTag>,
    json_ld: serde_json::Value,
}

/// GET /api/posts/{slug}/seo
pub async fn post_seo(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let post = state
        .blog
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post '{slug}' not found")))?;

    let seo = SeoData::for_post(&post, &state.site);
    Ok(HttpResponse::Ok().json(ApiResponse::ok(SeoResponse {
        meta_tags: seo.meta_tags(),
        json_ld: seo.blog_posting_json_ld(),
        seo,
    })))
}

/// GET /api/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.blog.list_categories().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(categories)))
}

/// GET /api/stats
pub async fn blog_stats(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let stats = state.blog.get_stats().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(stats)))
}
