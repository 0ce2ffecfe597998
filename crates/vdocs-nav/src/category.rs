//! Category configuration.
//!
//! A [`CategoryTable`] is declared by site authors and never derived from
//! content. Declaration order matters: prefix matching picks the first
//! declared category whose prefix matches, not the longest prefix.

/// Configuration of one navigation category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryConfig {
    /// Category key (e.g., "getting-started").
    pub key: String,
    /// Section title shown in navigation.
    pub title: String,
    /// Section position (ascending).
    pub order: u32,
    /// Filename prefixes that select this category.
    pub prefixes: Vec<String>,
}

/// Ordered category configuration with explicit overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTable {
    categories: Vec<CategoryConfig>,
    overrides: Vec<(String, String)>,
    default_key: String,
}

impl CategoryTable {
    /// Create an empty table with the category used when nothing matches.
    #[must_use]
    pub fn new(default_key: impl Into<String>) -> Self {
        Self {
            categories: Vec::new(),
            overrides: Vec::new(),
            default_key: default_key.into(),
        }
    }

    /// Declare a category. Later declarations have lower matching priority.
    #[must_use]
    pub fn with_category(
        mut self,
        key: impl Into<String>,
        title: impl Into<String>,
        order: u32,
        prefixes: &[&str],
    ) -> Self {
        self.categories.push(CategoryConfig {
            key: key.into(),
            title: title.into(),
            order,
            prefixes: prefixes.iter().map(|p| (*p).to_owned()).collect(),
        });
        self
    }

    /// Force a filename into a category regardless of prefix rules.
    #[must_use]
    pub fn with_override(mut self, file_name: impl Into<String>, key: impl Into<String>) -> Self {
        self.overrides.push((file_name.into(), key.into()));
        self
    }

    /// Look up a category by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CategoryConfig> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Categories in declaration order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryConfig] {
        &self.categories
    }

    /// Category key used when no rule matches.
    #[must_use]
    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// Forced category for an exact filename, if any.
    #[must_use]
    pub fn override_for(&self, file_name: &str) -> Option<&str> {
        self.overrides
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, key)| key.as_str())
    }

    /// First declared category with a prefix of `file_name`.
    #[must_use]
    pub fn match_prefix(&self, file_name: &str) -> Option<&CategoryConfig> {
        self.categories
            .iter()
            .find(|c| c.prefixes.iter().any(|p| file_name.starts_with(p.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CategoryTable {
        CategoryTable::new("misc")
            .with_category("client-libraries", "Client Libraries", 5, &["advanced-protobuf"])
            .with_category("advanced", "Advanced Topics", 7, &["advanced-"])
            .with_category("misc", "Misc", 10, &["faq"])
            .with_override("special", "advanced")
    }

    #[test]
    fn test_get_by_key() {
        let table = table();
        assert_eq!(table.get("advanced").unwrap().title, "Advanced Topics");
        assert!(table.get("unknown").is_none());
    }

    #[test]
    fn test_match_prefix_first_declared_wins() {
        let table = table();
        // Both "advanced-protobuf" and "advanced-" match; the earlier declaration wins.
        assert_eq!(
            table.match_prefix("advanced-protobuf").unwrap().key,
            "client-libraries"
        );
        assert_eq!(table.match_prefix("advanced-threads").unwrap().key, "advanced");
    }

    #[test]
    fn test_match_prefix_declaration_order_is_load_bearing() {
        let reversed = CategoryTable::new("misc")
            .with_category("advanced", "Advanced Topics", 7, &["advanced-"])
            .with_category("client-libraries", "Client Libraries", 5, &["advanced-protobuf"]);

        assert_eq!(reversed.match_prefix("advanced-protobuf").unwrap().key, "advanced");
    }

    #[test]
    fn test_match_prefix_none() {
        assert!(table().match_prefix("zzz-random").is_none());
    }

    #[test]
    fn test_override_for() {
        let table = table();
        assert_eq!(table.override_for("special"), Some("advanced"));
        assert_eq!(table.override_for("special-case"), None);
    }

    #[test]
    fn test_categories_keep_declaration_order() {
        let keys: Vec<_> = table().categories().iter().map(|c| c.key.clone()).collect();
        assert_eq!(keys, vec!["client-libraries", "advanced", "misc"]);
    }

    #[test]
    fn test_default_key() {
        assert_eq!(table().default_key(), "misc");
    }
}
