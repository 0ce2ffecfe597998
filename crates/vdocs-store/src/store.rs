//! Immutable document index.
//!
//! # Architecture
//!
//! Documents are stored in a flat `Vec<Document>` (the arena) in source
//! order. Two side indexes point into it:
//! - `slug_index`: slug → position, O(1) lookups
//! - `category_index`: top-level category → positions, in source order
//!
//! The index is built once and never mutated, so it can be shared freely
//! across threads behind an `Arc`.

use std::collections::HashMap;

use crate::document::Document;
use crate::error::StoreError;
use crate::source::{ContentEntry, ContentSource};

/// Indexed, read-only collection of documents.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
    slug_index: HashMap<String, usize>,
    category_index: HashMap<String, Vec<usize>>,
}

impl DocumentStore {
    /// Load all content from a source and build the index.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the source fails to load.
    pub fn load(source: &dyn ContentSource) -> Result<Self, StoreError> {
        let entries = source.load()?;
        Ok(Self::from_entries(entries))
    }

    /// Build the index from content entries.
    ///
    /// When two entries share a slug, the later one replaces the earlier one
    /// in place and a warning is logged.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = ContentEntry>) -> Self {
        Self::from_documents(entries.into_iter().map(|entry| {
            Document::new(
                entry.slug,
                entry.front_matter.unwrap_or_default(),
                entry.body,
            )
        }))
    }

    /// Build the index from already constructed documents.
    ///
    /// Duplicate slugs are handled as in [`from_entries`](Self::from_entries).
    #[must_use]
    pub fn from_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        let mut store = Self::default();

        for doc in documents {
            if let Some(&existing) = store.slug_index.get(&doc.slug) {
                tracing::warn!(slug = %doc.slug, "Duplicate slug, later document replaces earlier one");
                store.documents[existing] = doc;
                continue;
            }

            let idx = store.documents.len();
            store.slug_index.insert(doc.slug.clone(), idx);
            if let Some(category) = doc.category() {
                store
                    .category_index
                    .entry(category.to_owned())
                    .or_default()
                    .push(idx);
            }
            store.documents.push(doc);
        }

        store
    }

    /// All documents in source order.
    #[must_use]
    pub fn list_all(&self) -> &[Document] {
        &self.documents
    }

    /// Find a document by slug.
    ///
    /// Returns `None` when no document has this slug.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&Document> {
        self.slug_index.get(slug).map(|&i| &self.documents[i])
    }

    /// Documents whose slug starts with `prefix + "/"`, in source order.
    ///
    /// Single-segment prefixes (`"docs"`) are answered from the category
    /// index; nested prefixes (`"codelabs/getting_started"`) scan the list.
    #[must_use]
    pub fn list_by_category(&self, prefix: &str) -> Vec<&Document> {
        if prefix.contains('/') {
            let prefix = format!("{prefix}/");
            return self
                .documents
                .iter()
                .filter(|d| d.slug.starts_with(&prefix))
                .collect();
        }

        self.category_index
            .get(prefix)
            .map(|indices| indices.iter().map(|&i| &self.documents[i]).collect())
            .unwrap_or_default()
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the store has no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
