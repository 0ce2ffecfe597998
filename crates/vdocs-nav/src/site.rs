//! Built-in navigation trees of the documentation site.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use vdocs_store::DocumentStore;

use crate::categorizer::{DirectoryCategorizer, PrefixCategorizer, SlugCategorizer};
use crate::category::CategoryTable;
use crate::navigation::{ItemOrdering, NavSection, build_navigation};

/// Category table of the documentation tree.
#[must_use]
pub fn docs_table() -> CategoryTable {
    CategoryTable::new("misc")
        .with_category("getting-started", "Getting Started", 1, &["start-"])
        .with_category("core-concepts", "Core Concepts", 2, &["core-", "control-"])
        .with_category("native-integration", "Native Integration", 3, &["native-"])
        .with_category("navigation", "Navigation", 4, &["navigation"])
        .with_category(
            "client-libraries",
            "Client Libraries",
            5,
            &["client-libraries-", "advanced-protobuf"],
        )
        .with_category("standard-library", "Standard Library", 6, &["stdlib-", "glossary"])
        .with_category("advanced", "Advanced Topics", 7, &["advanced-"])
        .with_category("performance", "Performance", 8, &["performance-"])
        .with_category("workflow", "Workflow", 9, &["workflow-", "command-line"])
        .with_category("misc", "Misc", 10, &["third-party", "faq"])
        .with_category("help", "Help", 11, &["help-"])
        .with_override("advanced-protobuf", "client-libraries")
}

/// Section table of the API reference tree (one section per page).
#[must_use]
pub fn api_table() -> CategoryTable {
    CategoryTable::new("misc")
        .with_category("api-quick-reference", "Quick Reference", 1, &[])
        .with_category("api-reference-elements", "Elements", 2, &[])
        .with_category("api-style-attributes", "Style Attributes", 3, &[])
}

/// Section table of the codelabs tree (one section per lab directory).
#[must_use]
pub fn codelabs_table() -> CategoryTable {
    CategoryTable::new("general")
        .with_category("getting_started", "Getting Started", 1, &[])
        .with_category("advanced_ui", "Advanced UI", 2, &[])
        .with_category("integration_with_native", "Integration with Native", 3, &[])
        .with_category("shared_business_logic", "Shared Business Logic", 4, &[])
}

/// One of the site's routed content trees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavTree {
    /// Guides under `docs/`.
    Docs,
    /// API reference under `api/`.
    Api,
    /// Tutorials under `codelabs/`.
    Codelabs,
}

impl NavTree {
    /// All trees, in display order.
    pub const ALL: [Self; 3] = [Self::Docs, Self::Api, Self::Codelabs];

    /// Slug root of this tree.
    #[must_use]
    pub fn root(self) -> &'static str {
        match self {
            Self::Docs => "docs",
            Self::Api => "api",
            Self::Codelabs => "codelabs",
        }
    }

    /// Tree owning a slug, if the slug is routed.
    ///
    /// A slug is routed when its first segment is a tree root and something
    /// follows it.
    #[must_use]
    pub fn of_slug(slug: &str) -> Option<Self> {
        let (root, rest) = slug.split_once('/')?;
        if rest.is_empty() {
            return None;
        }
        root.parse().ok()
    }
}

impl fmt::Display for NavTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root())
    }
}

/// Error returned when parsing an unknown tree name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseNavTreeError(String);

impl fmt::Display for ParseNavTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown navigation tree '{}' (expected docs, api or codelabs)",
            self.0
        )
    }
}

impl std::error::Error for ParseNavTreeError {}

impl FromStr for NavTree {
    type Err = ParseNavTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "docs" => Ok(Self::Docs),
            "api" => Ok(Self::Api),
            "codelabs" => Ok(Self::Codelabs),
            other => Err(ParseNavTreeError(other.to_owned())),
        }
    }
}

/// Navigation of all three content trees.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SiteNavigation {
    /// Documentation sections.
    pub docs: Vec<NavSection>,
    /// API reference sections.
    pub api: Vec<NavSection>,
    /// Codelab sections.
    pub codelabs: Vec<NavSection>,
}

impl SiteNavigation {
    /// Build every tree from the store with the built-in tables.
    #[must_use]
    pub fn build(store: &DocumentStore) -> Self {
        let docs = docs_table();
        let api = api_table();
        let labs = codelabs_table();

        Self {
            docs: build_navigation(
                store.list_by_category(NavTree::Docs.root()),
                &docs,
                &PrefixCategorizer::new(&docs, NavTree::Docs.root()),
                ItemOrdering::Title,
            ),
            api: build_navigation(
                store.list_by_category(NavTree::Api.root()),
                &api,
                &SlugCategorizer::new(&api, NavTree::Api.root()),
                ItemOrdering::Title,
            ),
            codelabs: build_navigation(
                store.list_by_category(NavTree::Codelabs.root()),
                &labs,
                &DirectoryCategorizer::new(&labs, NavTree::Codelabs.root()),
                ItemOrdering::NumericPrefix,
            ),
        }
    }

    /// Sections of one tree.
    #[must_use]
    pub fn tree(&self, tree: NavTree) -> &[NavSection] {
        match tree {
            NavTree::Docs => &self.docs,
            NavTree::Api => &self.api,
            NavTree::Codelabs => &self.codelabs,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vdocs_store::{Document, Metadata};

    use super::*;

    fn doc(slug: &str) -> Document {
        Document::new(slug, Metadata::new(), "")
    }

    fn sample_store() -> DocumentStore {
        DocumentStore::from_documents([
            doc("docs/start-introduction"),
            doc("docs/core-state"),
            doc("docs/advanced-protobuf"),
            doc("docs/zzz-random"),
            Document::new(
                "docs/42-advanced-networking",
                Metadata::new().with("title", "Networking Deep Dive"),
                "",
            ),
            doc("api/api-style-attributes"),
            doc("api/api-quick-reference"),
            doc("api/api-experimental"),
            doc("codelabs/getting_started/2-layout"),
            doc("codelabs/getting_started/1-introduction"),
            doc("codelabs/getting_started/summary"),
            doc("codelabs/overview"),
            doc("docsite"),
        ])
    }

    fn keys(sections: &[NavSection]) -> Vec<&str> {
        sections.iter().map(|s| s.key.as_str()).collect()
    }

    #[test]
    fn test_docs_tree() {
        let nav = SiteNavigation::build(&sample_store());

        assert_eq!(
            keys(&nav.docs),
            vec!["getting-started", "core-concepts", "client-libraries", "misc"]
        );
        assert_eq!(nav.docs[0].items[0].title, "Introduction");
        assert_eq!(nav.docs[0].items[0].href, "/docs/start-introduction");
        assert_eq!(nav.docs[2].items[0].href, "/docs/advanced-protobuf");
        // A numeric prefix hides the semantic prefix from categorization.
        assert_eq!(nav.docs[3].items[0].title, "Networking Deep Dive");
        assert_eq!(nav.docs[3].items[1].href, "/docs/zzz-random");
    }

    #[test]
    fn test_api_tree_one_section_per_page() {
        let nav = SiteNavigation::build(&sample_store());

        assert_eq!(
            keys(&nav.api),
            vec!["api-quick-reference", "api-style-attributes", "api-experimental"]
        );
        assert_eq!(nav.api[0].title, "Quick Reference");
        assert_eq!(nav.api[0].items[0].title, "Quick Reference");
        assert_eq!(nav.api[2].title, "api-experimental");
        assert_eq!(nav.api[2].order, 99);
    }

    #[test]
    fn test_codelabs_tree_numeric_ordering() {
        let nav = SiteNavigation::build(&sample_store());

        assert_eq!(keys(&nav.codelabs), vec!["getting_started", "general"]);
        let titles: Vec<_> = nav.codelabs[0]
            .items
            .iter()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Introduction", "Layout", "Summary"]);
        assert_eq!(nav.codelabs[1].items[0].href, "/codelabs/overview");
    }

    #[test]
    fn test_unrouted_documents_are_excluded() {
        let nav = SiteNavigation::build(&sample_store());

        let all_hrefs: Vec<_> = NavTree::ALL
            .iter()
            .flat_map(|&t| nav.tree(t))
            .flat_map(|s| &s.items)
            .map(|i| i.href.as_str())
            .collect();

        assert!(!all_hrefs.contains(&"/docsite"));
        assert_eq!(all_hrefs.len(), 12);
    }

    #[test]
    fn test_empty_store() {
        let nav = SiteNavigation::build(&DocumentStore::default());
        assert_eq!(nav, SiteNavigation::default());
    }

    #[test]
    fn test_nav_tree_parse() {
        assert_eq!("docs".parse::<NavTree>(), Ok(NavTree::Docs));
        assert_eq!("codelabs".parse::<NavTree>(), Ok(NavTree::Codelabs));
        let err = "blog".parse::<NavTree>().unwrap_err();
        assert!(err.to_string().contains("blog"));
    }

    #[test]
    fn test_nav_tree_of_slug() {
        assert_eq!(NavTree::of_slug("docs/start-introduction"), Some(NavTree::Docs));
        assert_eq!(
            NavTree::of_slug("codelabs/getting_started/1-introduction"),
            Some(NavTree::Codelabs)
        );
        assert_eq!(NavTree::of_slug("docs/"), None);
        assert_eq!(NavTree::of_slug("docs"), None);
        assert_eq!(NavTree::of_slug("blog/post"), None);
    }

    #[test]
    fn test_docs_table_declaration_order() {
        let table = docs_table();
        let orders: Vec<_> = table.categories().iter().map(|c| c.order).collect();
        assert_eq!(orders, (1..=11).collect::<Vec<_>>());
    }

    #[test]
    fn test_site_navigation_serializes_trees() {
        let nav = SiteNavigation::build(&sample_store());
        let json = serde_json::to_value(&nav).unwrap();

        assert!(json["docs"].is_array());
        assert_eq!(json["api"][0]["title"], "Quick Reference");
        assert_eq!(json["codelabs"][0]["items"][0]["order"], 1);
    }
}
