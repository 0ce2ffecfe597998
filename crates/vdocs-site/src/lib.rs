//! Site state, route resolution and page SEO for vdocs.
//!
//! This crate provides:
//! - [`Site`]: lazily loaded site over a content source
//! - [`RouteResult`]: outcome of resolving a page slug
//! - [`PageSeo`]: head tags and structured data for a page
//! - [`HomePage`]: static home page content
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use vdocs_nav::NavTree;
//! use vdocs_site::Site;
//! use vdocs_store::MemorySource;
//!
//! let source = MemorySource::new().with_markdown("docs/start-install.md", "Run the installer.");
//! let site = Site::new(Arc::new(source));
//!
//! assert_eq!(site.route("docs/start-install").status(), 200);
//! assert_eq!(site.route("docs/missing").status(), 404);
//!
//! let docs = site.navigation_tree(NavTree::Docs)?;
//! assert_eq!(docs[0].key, "getting-started");
//! # Ok(())
//! # }
//! ```

mod home;
mod page_seo;
mod route;
mod site;
mod site_state;

pub use home::{HomeFeature, HomeLink, HomePage};
pub use page_seo::{PageSeo, document_seo, home_seo};
pub use route::{RouteData, RouteResult};
pub use site::{PageView, Site};
pub use site_state::SiteState;
