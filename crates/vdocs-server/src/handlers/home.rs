//! Home page API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use vdocs_site::{HomePage, PageSeo};

use crate::state::AppState;

/// Response for GET /api/home.
#[derive(Serialize)]
pub(crate) struct HomeResponse {
    /// Hero, calls to action and feature cards.
    #[serde(flatten)]
    home: HomePage,
    /// Head data of the home page.
    seo: PageSeo,
}

/// Handle GET /api/home.
pub(crate) async fn get_home(State(state): State<Arc<AppState>>) -> Json<HomeResponse> {
    Json(HomeResponse {
        home: state.site.home().clone(),
        seo: state.site.home_seo(),
    })
}
