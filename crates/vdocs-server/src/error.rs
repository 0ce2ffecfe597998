//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vdocs_nav::ParseNavTreeError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No routed page at the given slug.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Unknown navigation tree name.
    #[error(transparent)]
    UnknownTree(#[from] ParseNavTreeError),

    /// Site content could not be loaded.
    #[error("Failed to load content: {0}")]
    Store(#[from] vdocs_store::StoreError),

    /// Page route failed to load content. Logged by `Site::route`.
    #[error("Failed to load content: {0}")]
    Route(vdocs_store::StoreError),

    /// Sitemap could not be serialized.
    #[error("Failed to build sitemap: {0}")]
    Sitemap(#[from] vdocs_seo::SeoError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound(slug) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "slug": slug}),
            ),
            Self::UnknownTree(e) => (StatusCode::NOT_FOUND, json!({"error": e.to_string()})),
            Self::Store(e) => {
                tracing::error!(error = %e, "Failed to load site content");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": "Internal server error"}),
                )
            }
            Self::Route(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": "Internal server error"}),
            ),
            Self::Sitemap(e) => {
                tracing::error!(error = %e, "Failed to build sitemap");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": "Internal server error"}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use vdocs_store::{StoreError, StoreErrorKind};

    use super::*;

    #[test]
    fn test_status_codes() {
        let not_found = ServerError::PageNotFound("docs/missing".to_owned()).into_response();
        let internal = ServerError::from(StoreError::new(StoreErrorKind::Other)).into_response();
        let route = ServerError::Route(StoreError::new(StoreErrorKind::Other)).into_response();
        let tree = ServerError::from("blog".parse::<vdocs_nav::NavTree>().unwrap_err())
            .into_response();

        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(route.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(tree.status(), StatusCode::NOT_FOUND);
    }
}
