//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use vdocs_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Lazily loaded documentation site.
    pub(crate) site: Arc<Site>,
    /// Application version (part of page `ETag`s).
    pub(crate) version: String,
}
