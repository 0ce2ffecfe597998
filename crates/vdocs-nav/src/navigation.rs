//! Navigation tree construction.
//!
//! [`build_navigation`] groups documents by category, resolves section
//! titles and orders from a [`CategoryTable`], and sorts both sections and
//! their items.
//!
//! Sections:
//! - configured sections sort by their configured order
//! - configured sections with equal order keep first-encounter order
//! - unconfigured sections sort after all configured ones, by key
//!
//! Items sort by `(order, title)`, where documents without an explicit order
//! use [`FALLBACK_ITEM_ORDER`].

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;
use vdocs_store::Document;

use crate::categorizer::Categorizer;
use crate::category::CategoryTable;
use crate::title::{compare_titles, display_title, numeric_prefix};

/// Order reported for sections absent from the category table.
pub const FALLBACK_SECTION_ORDER: u32 = 99;

/// Sort order for items without an explicit order.
pub const FALLBACK_ITEM_ORDER: u32 = u32::MAX;

/// Navigation item (link to a document).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Link target (`"/" + slug`).
    pub href: String,
    /// Explicit order, from front matter or a numeric filename prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// Navigation section (group of items).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavSection {
    /// Category key.
    pub key: String,
    /// Section title.
    pub title: String,
    /// Section order.
    pub order: u32,
    /// Sorted items.
    pub items: Vec<NavItem>,
}

/// How item order is determined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItemOrdering {
    /// Only a front-matter `order` field counts; otherwise sort by title.
    #[default]
    Title,
    /// A `"<digits>-"` filename prefix also counts as the order.
    NumericPrefix,
}

impl ItemOrdering {
    fn order_of(self, doc: &Document) -> Option<u32> {
        doc.metadata.order().or_else(|| match self {
            Self::Title => None,
            Self::NumericPrefix => numeric_prefix(doc.file_name()),
        })
    }
}

/// Build sorted navigation sections from documents.
///
/// Empty categories never produce a section.
#[must_use]
pub fn build_navigation<'a>(
    documents: impl IntoIterator<Item = &'a Document>,
    table: &CategoryTable,
    categorizer: &dyn Categorizer,
    ordering: ItemOrdering,
) -> Vec<NavSection> {
    let mut groups: Vec<(String, Vec<NavItem>)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for doc in documents {
        let key = categorizer.categorize(doc);
        let item = NavItem {
            title: display_title(doc),
            href: doc.href(),
            order: ordering.order_of(doc),
        };

        if let Some(&pos) = positions.get(&key) {
            groups[pos].1.push(item);
        } else {
            positions.insert(key.clone(), groups.len());
            groups.push((key, vec![item]));
        }
    }

    let mut sections: Vec<(bool, NavSection)> = groups
        .into_iter()
        .map(|(key, mut items)| {
            items.sort_by(compare_items);
            let config = table.get(&key);
            let section = NavSection {
                title: config.map_or_else(|| key.clone(), |c| c.title.clone()),
                order: config.map_or(FALLBACK_SECTION_ORDER, |c| c.order),
                key,
                items,
            };
            (config.is_some(), section)
        })
        .collect();

    // Stable sort keeps first-encounter order between equal configured orders.
    sections.sort_by(|(a_known, a), (b_known, b)| match (a_known, b_known) {
        (true, true) => a.order.cmp(&b.order),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.key.cmp(&b.key),
    });

    tracing::debug!(sections = sections.len(), "Built navigation");

    sections.into_iter().map(|(_, section)| section).collect()
}

fn compare_items(a: &NavItem, b: &NavItem) -> Ordering {
    let a_order = a.order.unwrap_or(FALLBACK_ITEM_ORDER);
    let b_order = b.order.unwrap_or(FALLBACK_ITEM_ORDER);
    a_order
        .cmp(&b_order)
        .then_with(|| compare_titles(&a.title, &b.title))
}
