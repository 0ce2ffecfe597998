//! Page SEO metadata.

use serde::{Deserialize, Serialize};

/// Canonical public URL of the site.
pub const DEFAULT_BASE_URL: &str = "https://vadli-docs.onecat.dev";

/// Maximum length of a derived description before the ellipsis.
const DESCRIPTION_MAX_CHARS: usize = 157;

/// Lines shorter than this are not used as descriptions.
const DESCRIPTION_MIN_CHARS: usize = 20;

/// SEO metadata of a page.
///
/// Every field is optional; unset fields fall back to the site defaults
/// when merged with [`SeoMeta::merged_over`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMeta {
    /// Document title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Meta description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Comma-separated keywords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Author name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Open Graph type (`website`, `article`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,
    /// Open Graph image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    /// Twitter card type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_card: Option<String>,
    /// Canonical page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    /// Robots directive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,
}

impl SeoMeta {
    /// Fill unset fields from `defaults`.
    #[must_use]
    pub fn merged_over(self, defaults: &Self) -> Self {
        fn pick(own: Option<String>, fallback: Option<&String>) -> Option<String> {
            own.or_else(|| fallback.cloned())
        }

        Self {
            title: pick(self.title, defaults.title.as_ref()),
            description: pick(self.description, defaults.description.as_ref()),
            keywords: pick(self.keywords, defaults.keywords.as_ref()),
            author: pick(self.author, defaults.author.as_ref()),
            og_type: pick(self.og_type, defaults.og_type.as_ref()),
            og_image: pick(self.og_image, defaults.og_image.as_ref()),
            twitter_card: pick(self.twitter_card, defaults.twitter_card.as_ref()),
            canonical: pick(self.canonical, defaults.canonical.as_ref()),
            robots: pick(self.robots, defaults.robots.as_ref()),
        }
    }
}

/// Identity of the site used to build absolute URLs and page titles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteInfo {
    /// Public base URL without trailing slash.
    pub base_url: String,
    /// Site name appended to page titles.
    pub name: String,
    /// Publishing organization (also the product name in keywords).
    pub publisher: String,
    /// Site-wide default metadata.
    pub defaults: SeoMeta,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            name: "Vadli Documentation".to_owned(),
            publisher: "Vadli".to_owned(),
            defaults: SeoMeta {
                title: Some(
                    "Vadli Documentation - Cross-Platform App Development Framework".to_owned(),
                ),
                description: Some(
                    "Comprehensive documentation for Vadli, a powerful framework for building \
                     cross-platform applications. Learn core concepts, API references, and \
                     step-by-step tutorials."
                        .to_owned(),
                ),
                keywords: Some(
                    "Vadli, cross-platform, mobile development, native integration, app \
                     framework, documentation, API reference"
                        .to_owned(),
                ),
                author: Some("Vadli".to_owned()),
                og_type: Some("website".to_owned()),
                og_image: Some(format!("{DEFAULT_BASE_URL}/og-image.png")),
                twitter_card: Some("summary_large_image".to_owned()),
                canonical: None,
                robots: Some("index, follow".to_owned()),
            },
        }
    }
}

impl SiteInfo {
    /// Absolute URL of a site path (`"/docs/x"` or `"docs/x"`).
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        match path.trim_start_matches('/') {
            "" => base.to_owned(),
            rest => format!("{base}/{rest}"),
        }
    }

    /// Default Open Graph image of the site.
    #[must_use]
    pub fn og_image(&self) -> String {
        self.defaults
            .og_image
            .clone()
            .unwrap_or_else(|| self.url("og-image.png"))
    }
}

/// Derive SEO metadata for a documentation page.
///
/// `category` is the tree (`"docs"`, `"api"`, `"codelabs"`) and `slug` the
/// page path below it. The description is taken from the first content line
/// longer than 20 characters once markdown markers are removed, truncated to
/// 157 characters plus an ellipsis; it falls back to the site description.
#[must_use]
pub fn doc_seo(
    site: &SiteInfo,
    category: &str,
    slug: &str,
    title: &str,
    content: Option<&str>,
) -> SeoMeta {
    let description = content
        .and_then(extract_description)
        .or_else(|| site.defaults.description.clone());

    let default_keywords = site.defaults.keywords.as_deref().unwrap_or_default();

    SeoMeta {
        title: Some(format!(
            "{title} - {} | {}",
            capitalize_first(category),
            site.name
        )),
        description,
        keywords: Some(format!(
            "{}, {} {category}, {default_keywords}",
            title.to_lowercase(),
            site.publisher
        )),
        canonical: Some(site.url(&format!("{category}/{slug}"))),
        og_type: Some("article".to_owned()),
        og_image: Some(site.og_image()),
        twitter_card: Some("summary_large_image".to_owned()),
        ..SeoMeta::default()
    }
}

fn extract_description(content: &str) -> Option<String> {
    let plain: String = content
        .chars()
        .filter(|c| !matches!(c, '#' | '*' | '`'))
        .collect();

    let line = plain
        .trim()
        .lines()
        .find(|line| line.chars().count() > DESCRIPTION_MIN_CHARS)?;

    let mut description: String = line.chars().take(DESCRIPTION_MAX_CHARS).collect();
    description.push_str("...");
    Some(description)
}

pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
