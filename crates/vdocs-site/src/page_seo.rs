//! SEO metadata of routed pages.

use serde::Serialize;
use serde_json::Value;
use vdocs_nav::display_title;
use vdocs_seo::{
    HeadTag, SeoMeta, SiteInfo, doc_seo, head_tags, render_head, render_json_ld, structured_data,
};
use vdocs_store::Document;

/// Everything a page needs in its document head.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageSeo {
    /// Metadata merged over the site defaults.
    pub meta: SeoMeta,
    /// Head tags in emission order.
    pub head: Vec<HeadTag>,
    /// `head` serialized to HTML.
    pub head_html: String,
    /// JSON-LD structured data, absent for the home page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_ld: Option<Value>,
    /// `json_ld` as a `<script type="application/ld+json">` element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_ld_html: Option<String>,
}

impl PageSeo {
    fn from_meta(site: &SiteInfo, path: &str, meta: SeoMeta) -> Self {
        let head = head_tags(&meta);
        let head_html = render_head(&head);
        let json_ld = structured_data(site, path, &meta);
        let json_ld_html = json_ld.as_ref().map(render_json_ld);
        Self {
            meta,
            head,
            head_html,
            json_ld,
            json_ld_html,
        }
    }
}

/// SEO for a document page.
///
/// A front-matter `description` replaces the one derived from the content.
#[must_use]
pub fn document_seo(site: &SiteInfo, doc: &Document) -> PageSeo {
    let (category, slug) = doc.slug.split_once('/').unwrap_or(("", doc.slug.as_str()));
    let title = display_title(doc);

    let mut meta = doc_seo(site, category, slug, &title, Some(&doc.content));
    if let Some(description) = doc.metadata.description() {
        meta.description = Some(description.to_owned());
    }

    PageSeo::from_meta(site, &doc.href(), meta.merged_over(&site.defaults))
}

/// SEO for the home page: site defaults with the canonical home URL.
#[must_use]
pub fn home_seo(site: &SiteInfo) -> PageSeo {
    let meta = SeoMeta {
        canonical: Some(site.url("/")),
        ..SeoMeta::default()
    };
    PageSeo::from_meta(site, "/", meta.merged_over(&site.defaults))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vdocs_store::Metadata;

    use super::*;

    #[test]
    fn test_document_seo() {
        let site = SiteInfo::default();
        let doc = Document::new(
            "docs/start-introduction",
            Metadata::new(),
            "# Introduction\n\nVadli builds native apps for every platform.\n",
        );

        let seo = document_seo(&site, &doc);

        assert_eq!(
            seo.meta.title.as_deref(),
            Some("Introduction - Docs | Vadli Documentation")
        );
        assert_eq!(
            seo.meta.description.as_deref(),
            Some("Vadli builds native apps for every platform....")
        );
        assert_eq!(seo.meta.author.as_deref(), Some("Vadli"));
        assert_eq!(seo.meta.robots.as_deref(), Some("index, follow"));
        assert!(seo.head_html.contains(r#"<link rel="canonical" href="https://vadli-docs.onecat.dev/docs/start-introduction">"#));
        let json_ld_html = seo.json_ld_html.unwrap();
        assert!(json_ld_html.starts_with(r#"<script type="application/ld+json">{"@context""#));
        assert!(json_ld_html.contains(r#""@type":"TechArticle""#));
        let json_ld = seo.json_ld.unwrap();
        assert_eq!(json_ld["@graph"][1]["@type"], "TechArticle");
    }

    #[test]
    fn test_document_seo_front_matter_overrides() {
        let site = SiteInfo::default();
        let meta = Metadata::new()
            .with("title", "Networking Deep Dive")
            .with("description", "All about sockets.");
        let doc = Document::new("docs/42-advanced-networking", meta, "");

        let seo = document_seo(&site, &doc);

        assert_eq!(
            seo.meta.title.as_deref(),
            Some("Networking Deep Dive - Docs | Vadli Documentation")
        );
        assert_eq!(seo.meta.description.as_deref(), Some("All about sockets."));
    }

    #[test]
    fn test_home_seo_has_no_structured_data() {
        let site = SiteInfo::default();

        let seo = home_seo(&site);

        assert_eq!(seo.json_ld, None);
        assert_eq!(seo.json_ld_html, None);
        assert_eq!(seo.meta.og_type.as_deref(), Some("website"));
        assert_eq!(
            seo.meta.canonical.as_deref(),
            Some("https://vadli-docs.onecat.dev")
        );
        assert!(seo.head_html.starts_with("<title>Vadli Documentation - Cross-Platform"));
    }
}
