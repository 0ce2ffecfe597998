//! Document and front-matter metadata types.
//!
//! # Metadata Fields
//!
//! Front matter is an open mapping. A few keys carry meaning elsewhere in
//! the site:
//!
//! - `title`: display title (overrides the slug-derived title)
//! - `description`: page description for SEO metadata
//! - `order`: explicit position within a navigation section

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Front-matter metadata attached to a document.
///
/// Keys map to arbitrary JSON-compatible values. An empty mapping means the
/// document had no front matter.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    fields: BTreeMap<String, Value>,
}

impl Metadata {
    /// Create empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, returning the updated metadata.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Get a raw field value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Get a field as a string slice, if it is a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Explicit title from front matter.
    ///
    /// Returns `None` when the field is missing, not a string, or empty.
    /// Whitespace-only titles are kept verbatim.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.get_str("title").filter(|t| !t.is_empty())
    }

    /// Page description from front matter.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.get_str("description").filter(|d| !d.trim().is_empty())
    }

    /// Explicit navigation order from front matter.
    ///
    /// Accepts non-negative integers only.
    #[must_use]
    pub fn order(&self) -> Option<u32> {
        self.fields
            .get("order")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    }

    /// Check if no fields are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

impl From<BTreeMap<String, Value>> for Metadata {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Self { fields }
    }
}

/// A markdown document loaded from a content source.
///
/// Created once when the store is built and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Document {
    /// Path-derived identifier (e.g., "docs/start-install").
    pub slug: String,
    /// Front-matter metadata (empty if none).
    pub metadata: Metadata,
    /// Raw markdown body without the front-matter block.
    pub content: String,
}

impl Document {
    /// Create a document.
    #[must_use]
    pub fn new(slug: impl Into<String>, metadata: Metadata, content: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            metadata,
            content: content.into(),
        }
    }

    /// Top-level category of the document (first slug segment).
    ///
    /// Returns `None` for slugs without a `/`.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.slug.split_once('/').map(|(category, _)| category)
    }

    /// Last slug segment (the filename without extension).
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.slug.rsplit('/').next().unwrap_or_default()
    }

    /// URL path of the document (`"/" + slug`).
    #[must_use]
    pub fn href(&self) -> String {
        format!("/{}", self.slug)
    }
}
