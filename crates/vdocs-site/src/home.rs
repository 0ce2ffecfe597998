//! Home page content.

use serde::Serialize;

/// Link shown on the home page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HomeLink {
    /// Link text.
    pub title: String,
    /// Link target.
    pub href: String,
}

/// Feature card shown on the home page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HomeFeature {
    /// Card heading.
    pub title: String,
    /// Short description.
    pub desc: String,
    /// Link target.
    pub href: String,
    /// Link text.
    pub label: String,
}

/// Static home page configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HomePage {
    /// Hero heading.
    pub title: String,
    /// Hero tagline.
    pub subtitle: String,
    /// Primary call to action.
    pub primary: HomeLink,
    /// Secondary call to action.
    pub secondary: HomeLink,
    /// Feature cards in display order.
    pub features: Vec<HomeFeature>,
}

impl Default for HomePage {
    fn default() -> Self {
        Self {
            title: "Vadli Documentation".to_owned(),
            subtitle: "Learn how to build cross-platform applications with Vadli".to_owned(),
            primary: link("Get Started", "/docs/start-introduction"),
            secondary: link("API Reference", "/api/api-quick-reference"),
            features: vec![
                feature(
                    "Documentation",
                    "Comprehensive guides covering all aspects of Vadli development.",
                    "/docs/start-introduction",
                    "Read the docs",
                ),
                feature(
                    "Code Labs",
                    "Step-by-step tutorials to help you learn by doing.",
                    "/codelabs/getting_started/1-introduction",
                    "Start learning",
                ),
                feature(
                    "API Reference",
                    "Detailed API documentation for all elements and attributes.",
                    "/api/api-quick-reference",
                    "View API",
                ),
            ],
        }
    }
}

impl HomePage {
    /// Every link target on the page, calls to action first.
    pub fn hrefs(&self) -> impl Iterator<Item = &str> {
        [self.primary.href.as_str(), self.secondary.href.as_str()]
            .into_iter()
            .chain(self.features.iter().map(|f| f.href.as_str()))
    }
}

fn link(title: &str, href: &str) -> HomeLink {
    HomeLink {
        title: title.to_owned(),
        href: href.to_owned(),
    }
}

fn feature(title: &str, desc: &str, href: &str, label: &str) -> HomeFeature {
    HomeFeature {
        title: title.to_owned(),
        desc: desc.to_owned(),
        href: href.to_owned(),
        label: label.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_home_links_are_routed_paths() {
        let home = HomePage::default();

        let hrefs: Vec<_> = home.hrefs().collect();

        assert_eq!(hrefs.len(), 5);
        assert!(hrefs.iter().all(|h| {
            h.starts_with("/docs/") || h.starts_with("/api/") || h.starts_with("/codelabs/")
        }));
    }

    #[test]
    fn test_home_serializes_features() {
        let json = serde_json::to_value(HomePage::default()).unwrap();

        assert_eq!(json["primary"]["title"], "Get Started");
        assert_eq!(json["features"][1]["label"], "Start learning");
    }
}
