//! Sitemap endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /sitemap.xml.
pub(crate) async fn get_sitemap(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let xml = state.site.sitemap()?.to_xml()?;
    Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml))
}
