//! Document store for the vdocs documentation site.
//!
//! This crate turns raw markdown content into an immutable, indexed
//! collection of [`Document`]s:
//!
//! - [`ContentSource`] trait abstracting where markdown comes from
//! - [`FsSource`] for a content directory on disk
//! - [`MemorySource`] for a pre-supplied path → content mapping
//! - [`DocumentStore`] with slug and category lookups
//!
//! # Slug Convention
//!
//! A slug is the content path relative to the content root, `/`-separated,
//! with the `.md` extension removed:
//!
//! - `docs/start-install.md` → `"docs/start-install"`
//! - `codelabs/getting_started/1-introduction.md` → `"codelabs/getting_started/1-introduction"`
//!
//! The first segment of a slug is its top-level category (`docs`, `api`, ...).
//!
//! # Example
//!
//! ```
//! use vdocs_store::{DocumentStore, MemorySource};
//!
//! let source = MemorySource::new()
//!     .with_markdown("docs/start-install.md", "---\ntitle: Install\n---\nRun the installer.");
//! let store = DocumentStore::load(&source).unwrap();
//!
//! let doc = store.find_by_slug("docs/start-install").unwrap();
//! assert_eq!(doc.metadata.title(), Some("Install"));
//! assert_eq!(store.list_by_category("docs").len(), 1);
//! ```

mod document;
mod error;
mod front_matter;
mod fs;
mod source;
mod store;

pub use document::{Document, Metadata};
pub use error::{StoreError, StoreErrorKind};
pub use front_matter::{FrontMatterError, parse_front_matter, split_front_matter};
pub use fs::FsSource;
pub use source::{ContentEntry, ContentSource, MemorySource, slug_from_path};
pub use store::DocumentStore;
