//! Content sources.
//!
//! A [`ContentSource`] supplies the raw entries the [`DocumentStore`](crate::DocumentStore)
//! is built from. Content is read once at startup; sources are not expected
//! to change while the site is running.

use std::collections::BTreeMap;

use crate::document::Metadata;
use crate::error::{StoreError, StoreErrorKind};
use crate::front_matter::{parse_front_matter, split_front_matter};

/// A single entry produced by a content source.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentEntry {
    /// Document slug (see [`slug_from_path`]).
    pub slug: String,
    /// Raw markdown body without front matter.
    pub body: String,
    /// Front-matter metadata, if the content had any.
    pub front_matter: Option<Metadata>,
}

/// Source of markdown content for the document store.
///
/// Implementations return entries in a stable order; the store preserves it.
pub trait ContentSource: Send + Sync {
    /// Load every content entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if content cannot be read or its front matter
    /// cannot be parsed.
    fn load(&self) -> Result<Vec<ContentEntry>, StoreError>;
}

/// Convert a content path to a slug.
///
/// Normalizes `\` to `/`, strips the content `root` prefix and any leading
/// `/`, and removes the `.md` extension.
///
/// # Examples
///
/// ```
/// use vdocs_store::slug_from_path;
///
/// assert_eq!(slug_from_path("/src/content/docs/start-install.md", "/src/content"), "docs/start-install");
/// assert_eq!(slug_from_path("api\\api-elements.md", ""), "api/api-elements");
/// ```
pub fn slug_from_path(path: &str, root: &str) -> String {
    let normalized = path.replace('\\', "/");
    let mut rel = normalized.trim_start_matches('/');

    let root = root.trim_matches('/');
    if !root.is_empty()
        && let Some(stripped) = rel.strip_prefix(root).and_then(|r| r.strip_prefix('/'))
    {
        rel = stripped;
    }

    rel.strip_suffix(".md").unwrap_or(rel).to_owned()
}

/// Content held by a [`MemorySource`] entry.
#[derive(Clone, Debug)]
enum MemoryContent {
    /// Raw markdown; front matter is split off at load time.
    Markdown(String),
    /// Body and front matter supplied separately.
    Parts {
        body: String,
        front_matter: Option<Metadata>,
    },
}

/// In-memory content source.
///
/// Holds a path → content mapping supplied by the caller. Entries load in
/// path order.
///
/// # Example
///
/// ```
/// use vdocs_store::{ContentSource, MemorySource, Metadata};
///
/// let source = MemorySource::new()
///     .with_root("src/content")
///     .with_entry("src/content/docs/faq.md", "Questions.", None)
///     .with_markdown("src/content/api/api-elements.md", "---\ntitle: Elements\n---\nBody");
///
/// let entries = source.load().unwrap();
/// assert_eq!(entries[0].slug, "api/api-elements");
/// assert_eq!(entries[1].slug, "docs/faq");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    root: String,
    entries: BTreeMap<String, MemoryContent>,
}

impl MemorySource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content root stripped from paths when computing slugs.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Add an entry with a separately supplied body and front matter.
    #[must_use]
    pub fn with_entry(
        mut self,
        path: impl Into<String>,
        body: impl Into<String>,
        front_matter: Option<Metadata>,
    ) -> Self {
        self.entries.insert(
            path.into(),
            MemoryContent::Parts {
                body: body.into(),
                front_matter,
            },
        );
        self
    }

    /// Add a raw markdown entry whose front matter is parsed on load.
    #[must_use]
    pub fn with_markdown(mut self, path: impl Into<String>, raw: impl Into<String>) -> Self {
        self.entries
            .insert(path.into(), MemoryContent::Markdown(raw.into()));
        self
    }
}

impl ContentSource for MemorySource {
    fn load(&self) -> Result<Vec<ContentEntry>, StoreError> {
        self.entries
            .iter()
            .map(|(path, content)| {
                let slug = slug_from_path(path, &self.root);
                match content {
                    MemoryContent::Markdown(raw) => entry_from_markdown(slug, raw)
                        .map_err(|e| e.with_path(path.as_str())),
                    MemoryContent::Parts { body, front_matter } => Ok(ContentEntry {
                        slug,
                        body: body.clone(),
                        front_matter: front_matter.clone(),
                    }),
                }
            })
            .collect()
    }
}

/// Build an entry from raw markdown, splitting off front matter.
pub(crate) fn entry_from_markdown(slug: String, raw: &str) -> Result<ContentEntry, StoreError> {
    let (yaml, body) = split_front_matter(raw);
    let front_matter = yaml
        .map(parse_front_matter)
        .transpose()
        .map_err(|e| StoreError::new(StoreErrorKind::InvalidFrontMatter).with_source(e))?;

    Ok(ContentEntry {
        slug,
        body: body.to_owned(),
        front_matter,
    })
}
