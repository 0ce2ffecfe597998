//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/home", get(handlers::home::get_home))
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route(
            "/api/navigation/{tree}",
            get(handlers::navigation::get_navigation_tree),
        )
        .route("/api/pages/{*slug}", get(handlers::pages::get_page));

    Router::new()
        .merge(api_routes)
        .route("/sitemap.xml", get(handlers::sitemap::get_sitemap))
        .layer(
            ServiceBuilder::new()
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer())
                .layer(security::referrer_policy_layer()),
        )
        .with_state(state)
}
