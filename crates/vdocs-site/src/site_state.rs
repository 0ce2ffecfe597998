//! Immutable site state.

use vdocs_nav::{NavTree, SiteNavigation};
use vdocs_store::{Document, DocumentStore};

/// Loaded content and its prebuilt navigation.
///
/// Built once per load and shared read-only behind an `Arc`.
#[derive(Debug, Default)]
pub struct SiteState {
    store: DocumentStore,
    navigation: SiteNavigation,
}

impl SiteState {
    /// Index a store and build its navigation.
    #[must_use]
    pub fn new(store: DocumentStore) -> Self {
        let navigation = SiteNavigation::build(&store);
        Self { store, navigation }
    }

    /// Document store.
    #[must_use]
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Navigation of all trees.
    #[must_use]
    pub fn navigation(&self) -> &SiteNavigation {
        &self.navigation
    }

    /// Routed document by slug.
    ///
    /// Only documents inside the `docs`, `api` and `codelabs` trees are
    /// routed; anything else is treated as absent.
    #[must_use]
    pub fn page(&self, slug: &str) -> Option<&Document> {
        NavTree::of_slug(slug)?;
        self.store.find_by_slug(slug)
    }
}

#[cfg(test)]
mod tests {
    use vdocs_store::Metadata;

    use super::*;

    #[test]
    fn test_page_only_resolves_routed_trees() {
        let state = SiteState::new(DocumentStore::from_documents([
            Document::new("docs/faq", Metadata::new(), "FAQ"),
            Document::new("drafts/secret", Metadata::new(), "Hidden"),
            Document::new("readme", Metadata::new(), "Readme"),
        ]));

        assert_eq!(state.page("docs/faq").unwrap().content, "FAQ");
        assert!(state.page("drafts/secret").is_none());
        assert!(state.page("readme").is_none());
        assert_eq!(state.store().len(), 3);
    }

    #[test]
    fn test_navigation_is_prebuilt() {
        let state = SiteState::new(DocumentStore::from_documents([Document::new(
            "docs/start-introduction",
            Metadata::new(),
            "",
        )]));

        assert_eq!(state.navigation().docs[0].key, "getting-started");
    }
}
