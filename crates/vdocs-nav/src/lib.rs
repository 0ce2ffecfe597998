//! Navigation classifier for the vdocs documentation site.
//!
//! This crate groups documents into ordered navigation sections:
//! - [`CategoryTable`]: static, author-maintained category configuration
//! - [`Categorizer`]: assigns each document a category key
//! - [`build_navigation`]: groups, titles and sorts documents into [`NavSection`]s
//! - [`SiteNavigation`]: the site's three navigation trees (docs, API, codelabs)
//!
//! Everything here is a pure function of its inputs.
//!
//! # Quick Start
//!
//! ```
//! use vdocs_nav::{CategoryTable, ItemOrdering, PrefixCategorizer, build_navigation};
//! use vdocs_store::{Document, Metadata};
//!
//! let table = CategoryTable::new("misc")
//!     .with_category("getting-started", "Getting Started", 1, &["start-"])
//!     .with_category("misc", "Misc", 10, &["faq"]);
//! let docs = [
//!     Document::new("docs/start-install", Metadata::new(), ""),
//!     Document::new("docs/zzz-random", Metadata::new(), ""),
//! ];
//!
//! let categorizer = PrefixCategorizer::new(&table, "docs");
//! let sections = build_navigation(&docs, &table, &categorizer, ItemOrdering::Title);
//!
//! assert_eq!(sections[0].title, "Getting Started");
//! assert_eq!(sections[0].items[0].title, "Install");
//! assert_eq!(sections[1].key, "misc");
//! ```

mod categorizer;
mod category;
mod navigation;
mod site;
mod title;

pub use categorizer::{Categorizer, DirectoryCategorizer, PrefixCategorizer, SlugCategorizer};
pub use category::{CategoryConfig, CategoryTable};
pub use navigation::{
    FALLBACK_ITEM_ORDER, FALLBACK_SECTION_ORDER, ItemOrdering, NavItem, NavSection,
    build_navigation,
};
pub use site::{NavTree, ParseNavTreeError, SiteNavigation, api_table, codelabs_table, docs_table};
pub use title::{UNTITLED, compare_titles, derive_title, display_title, numeric_prefix};
