//! Admin handlers: post CRUD plus export/import of the whole store.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use folio_core::ImportMode;
use folio_core::domain::{NewPost, PostPatch};
use folio_shared::ApiResponse;
use folio_shared::dto::{DeleteResponse, ImportParams};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/admin/posts - every post, drafts included, in store order.
pub async fn list_all_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.blog.list_all().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// POST /api/admin/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<NewPost>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner();

    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    if input.excerpt.trim().is_empty() {
        return Err(AppError::BadRequest("Excerpt is required".to_string()));
    }

    let post = state.blog.create(input).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(post)))
}

/// PUT /api/admin/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<PostPatch>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .blog
        .update(id, body.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post with id {id} not found")))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// DELETE /api/admin/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if !state.blog.delete(id).await? {
        return Err(AppError::NotFound(format!("post with id {id} not found")));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok(DeleteResponse {
        id: id.to_string(),
        deleted: true,
    })))
}

/// GET /api/admin/export - download the interchange document.
pub async fn export_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let document = state.blog.export_all().await?;
    let filename = format!("blog-posts-{}.json", chrono::Utc::now().format("%Y-%m-%d"));

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(document))
}

/// POST /api/admin/import?mode=replace|merge - body is an exported document.
///
/// Body extraction failures (oversized or non-UTF-8 payloads) are reported
/// as problem details like every other error.
pub async fn import_posts(
    state: web::Data<AppState>,
    query: web::Query<ImportParams>,
    body: Result<String, actix_web::Error>,
) -> AppResult<HttpResponse> {
    let body = body?;
    let mode: ImportMode = query.mode.as_deref().unwrap_or_default().parse()?;
    let summary = state.blog.import_all(&body, mode).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        summary,
        format!("Imported {} posts", summary.imported),
    )))
}
