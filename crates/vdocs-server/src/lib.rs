//! HTTP API server for the vdocs documentation site.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - `GET /api/navigation` and `GET /api/navigation/{tree}`
//! - `GET /api/home`
//! - `GET /api/pages/{*slug}` with content, metadata and SEO head data
//! - `GET /sitemap.xml`
//!
//! # Quick Start
//!
//! ```ignore
//! use vdocs_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::default();
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (vdocs-server)
//!                        │
//!                        └─► handlers ──► Site (vdocs-site)
//!                                           │
//!                                           ├─► DocumentStore (vdocs-store)
//!                                           ├─► SiteNavigation (vdocs-nav)
//!                                           └─► SeoMeta / Sitemap (vdocs-seo)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use state::AppState;
use vdocs_config::{Config, SiteConfig};
use vdocs_seo::{ChangeFreq, SeoError, SeoMeta, SiteInfo};
use vdocs_site::Site;
use vdocs_store::FsSource;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Markdown content directory.
    pub source_dir: PathBuf,
    /// Site identity and default SEO metadata.
    pub site: SiteInfo,
    /// Change frequency written to the sitemap.
    pub changefreq: ChangeFreq,
    /// Application version (part of page `ETag`s).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            source_dir: PathBuf::from("content"),
            site: SiteInfo::default(),
            changefreq: ChangeFreq::default(),
            version: String::new(),
        }
    }
}

impl ServerConfig {
    /// Create server configuration from vdocs config.
    ///
    /// # Errors
    ///
    /// Returns [`SeoError::InvalidChangeFreq`] if the sitemap change
    /// frequency is not a sitemap protocol value.
    pub fn from_config(config: &Config, version: String) -> Result<Self, SeoError> {
        Ok(Self {
            host: config.server.host.clone(),
            port: config.server.port,
            source_dir: config.docs_resolved.source_dir.clone(),
            site: site_info(&config.site),
            changefreq: config.sitemap_resolved.changefreq.parse()?,
            version,
        })
    }

    /// Build the site served by this configuration.
    #[must_use]
    pub fn site(&self) -> Site {
        Site::new(Arc::new(FsSource::new(self.source_dir.clone())))
            .with_info(self.site.clone())
            .with_changefreq(self.changefreq)
    }
}

/// Site identity and SEO defaults from the `[site]` config section.
#[must_use]
pub fn site_info(config: &SiteConfig) -> SiteInfo {
    SiteInfo {
        base_url: config.base_url.trim_end_matches('/').to_owned(),
        name: config.name.clone(),
        publisher: config.author.clone(),
        defaults: SeoMeta {
            title: Some(config.title.clone()),
            description: Some(config.description.clone()),
            keywords: Some(config.keywords.clone()),
            author: Some(config.author.clone()),
            og_type: Some("website".to_owned()),
            og_image: Some(config.og_image()),
            twitter_card: Some(config.twitter_card.clone()),
            canonical: None,
            robots: Some(config.robots.clone()),
        },
    }
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let site = Arc::new(config.site());

    // Load eagerly so content problems surface at startup
    match site.state() {
        Ok(state) => tracing::info!(
            source_dir = %config.source_dir.display(),
            documents = state.store().len(),
            "Site content ready"
        ),
        Err(e) => tracing::warn!(
            source_dir = %config.source_dir.display(),
            error = %e,
            "Site content not loaded, retrying on first request"
        ),
    }

    let state = Arc::new(AppState {
        site,
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}
