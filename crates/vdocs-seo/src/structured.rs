//! JSON-LD structured data (schema.org).

use serde_json::{Value, json};

use crate::meta::{SeoMeta, SiteInfo, capitalize_first};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// `BreadcrumbList` for a site path.
///
/// The home page is always the first crumb. Each path segment adds one crumb
/// named after the segment with its first letter capitalized and hyphens
/// replaced by spaces.
#[must_use]
pub fn breadcrumb_data(site: &SiteInfo, path: &str) -> Value {
    let mut items = vec![json!({
        "@type": "ListItem",
        "position": 1,
        "name": "Home",
        "item": site.url("/"),
    })];

    let mut current = String::new();
    for (index, part) in path.split('/').filter(|p| !p.is_empty()).enumerate() {
        current.push('/');
        current.push_str(part);
        items.push(json!({
            "@type": "ListItem",
            "position": index + 2,
            "name": capitalize_first(part).replace('-', " "),
            "item": site.url(&current),
        }));
    }

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

/// `TechArticle` describing a documentation page.
#[must_use]
pub fn article_data(site: &SiteInfo, title: &str, description: &str, url: &str) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "TechArticle",
        "headline": title,
        "description": description,
        "url": url,
        "publisher": {
            "@type": "Organization",
            "name": site.publisher,
            "url": site.url("/"),
        },
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": url,
        },
    })
}

/// Structured data for a page.
///
/// - home page (`"/"`): none
/// - pages with title, description and canonical URL: an `@graph` of the
///   breadcrumbs and the article
/// - other pages: breadcrumbs only
#[must_use]
pub fn structured_data(site: &SiteInfo, path: &str, meta: &SeoMeta) -> Option<Value> {
    if path.trim_matches('/').is_empty() {
        return None;
    }

    let breadcrumbs = breadcrumb_data(site, path);

    let (Some(title), Some(description), Some(canonical)) =
        (&meta.title, &meta.description, &meta.canonical)
    else {
        return Some(breadcrumbs);
    };

    let article = article_data(site, title, description, canonical);
    Some(json!({
        "@context": SCHEMA_CONTEXT,
        "@graph": [breadcrumbs, article],
    }))
}
