//! Navigation API endpoints.
//!
//! Returns the section lists of the `docs`, `api` and `codelabs` trees.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use vdocs_nav::{NavSection, NavTree, SiteNavigation};

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SiteNavigation>, ServerError> {
    Ok(Json(state.site.navigation()?))
}

/// Handle GET /api/navigation/{tree}.
pub(crate) async fn get_navigation_tree(
    Path(tree): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<NavSection>>, ServerError> {
    let tree: NavTree = tree.parse()?;
    Ok(Json(state.site.navigation_tree(tree)?))
}
