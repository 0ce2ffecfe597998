//! Category assignment strategies.

use vdocs_store::Document;

use crate::category::CategoryTable;

/// Assigns a document to a category key.
///
/// Any `Fn(&Document) -> String` closure is a categorizer.
pub trait Categorizer {
    /// Return the category key for `doc`.
    fn categorize(&self, doc: &Document) -> String;
}

impl<F> Categorizer for F
where
    F: Fn(&Document) -> String,
{
    fn categorize(&self, doc: &Document) -> String {
        self(doc)
    }
}

/// Slug relative to a navigation tree root (`"docs/start-a"` → `"start-a"`).
fn relative_name<'a>(doc: &'a Document, root: &str) -> &'a str {
    doc.slug
        .strip_prefix(root)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(&doc.slug)
}

/// Categorizes by filename prefix.
///
/// Resolution order:
/// 1. exact filename override from the table
/// 2. first declared category with a matching prefix
/// 3. the table's default category
pub struct PrefixCategorizer<'a> {
    table: &'a CategoryTable,
    root: &'a str,
}

impl<'a> PrefixCategorizer<'a> {
    /// Create a categorizer for documents under `root` (e.g., "docs").
    #[must_use]
    pub fn new(table: &'a CategoryTable, root: &'a str) -> Self {
        Self { table, root }
    }
}

impl Categorizer for PrefixCategorizer<'_> {
    fn categorize(&self, doc: &Document) -> String {
        let name = relative_name(doc, self.root);

        if let Some(forced) = self.table.override_for(name) {
            return forced.to_owned();
        }

        self.table
            .match_prefix(name)
            .map_or_else(|| self.table.default_key().to_owned(), |c| c.key.clone())
    }
}

/// Uses the document's own name as its category key.
///
/// Every page becomes its own section, titled and ordered by the table.
pub struct SlugCategorizer<'a> {
    table: &'a CategoryTable,
    root: &'a str,
}

impl<'a> SlugCategorizer<'a> {
    /// Create a categorizer for documents under `root` (e.g., "api").
    #[must_use]
    pub fn new(table: &'a CategoryTable, root: &'a str) -> Self {
        Self { table, root }
    }
}

impl Categorizer for SlugCategorizer<'_> {
    fn categorize(&self, doc: &Document) -> String {
        match relative_name(doc, self.root) {
            "" => self.table.default_key().to_owned(),
            name => name.to_owned(),
        }
    }
}

/// Uses the first directory below the tree root as the category key.
///
/// Documents sitting directly in the root fall back to the table's default
/// category.
pub struct DirectoryCategorizer<'a> {
    table: &'a CategoryTable,
    root: &'a str,
}

impl<'a> DirectoryCategorizer<'a> {
    /// Create a categorizer for documents under `root` (e.g., "codelabs").
    #[must_use]
    pub fn new(table: &'a CategoryTable, root: &'a str) -> Self {
        Self { table, root }
    }
}

impl Categorizer for DirectoryCategorizer<'_> {
    fn categorize(&self, doc: &Document) -> String {
        match relative_name(doc, self.root).split_once('/') {
            Some((dir, _)) => dir.to_owned(),
            None => self.table.default_key().to_owned(),
        }
    }
}
