//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Query string of the paginated post listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsParams {
    /// Category key, or `all`.
    pub category: Option<String>,
    /// Search text matched against title and excerpt.
    pub q: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// Query string of the search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Query string of the import endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportParams {
    /// `replace` (default) or `merge`.
    pub mode: Option<String>,
}

/// A post together with its display-ready body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse<P> {
    pub post: P,
    pub content_html: String,
}

/// Result of a delete request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub id: String,
    pub deleted: bool,
}
