//! SEO metadata, structured data and sitemap export for vdocs.
//!
//! - [`SeoMeta`] / [`doc_seo`]: per-page metadata merged over [`SiteInfo`] defaults
//! - [`head_tags`] / [`render_head`]: head elements as data and as HTML
//! - [`structured_data`]: schema.org JSON-LD (breadcrumbs, articles)
//! - [`Sitemap`]: `sitemap.xml` export
//!
//! # Example
//!
//! ```
//! use vdocs_seo::{SiteInfo, doc_seo, head_tags, render_head};
//!
//! let site = SiteInfo::default();
//! let meta = doc_seo(&site, "docs", "start-introduction", "Introduction", None)
//!     .merged_over(&site.defaults);
//!
//! let html = render_head(&head_tags(&meta));
//! assert!(html.starts_with("<title>Introduction - Docs | Vadli Documentation</title>"));
//! ```

mod error;
mod head;
mod meta;
mod sitemap;
mod structured;

pub use error::SeoError;
pub use head::{HeadTag, MetaAttr, head_tags, render_head, render_json_ld};
pub use meta::{DEFAULT_BASE_URL, SeoMeta, SiteInfo, doc_seo};
pub use sitemap::{ChangeFreq, HOME_PRIORITY, Sitemap, SitemapUrl, priority_for};
pub use structured::{article_data, breadcrumb_data, structured_data};
