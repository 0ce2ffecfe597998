//! Pages API endpoint.
//!
//! Resolves a slug and returns the page content, its front-matter metadata
//! and the SEO head data as JSON.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use md5::{Digest, Md5};
use vdocs_site::RouteResult;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /api/pages/{*slug}.
pub(crate) async fn get_page(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    let slug = slug.trim_matches('/');
    let page = match state.site.route(slug) {
        RouteResult::Found(data) => state.site.page_view(slug, data),
        RouteResult::NotFound => return Err(ServerError::PageNotFound(slug.to_owned())),
        RouteResult::Internal(e) => return Err(ServerError::Route(e)),
    };

    let etag = compute_etag(&state.version, &page.data.content);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Json(page),
    )
        .into_response())
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
