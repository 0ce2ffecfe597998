//! Sitemap generation.
//!
//! Produces a `sitemap.xml` listing the home page and every document:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://vadli-docs.onecat.dev</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use vdocs_store::Document;

use crate::error::SeoError;
use crate::meta::SiteInfo;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Priority of the home page.
pub const HOME_PRIORITY: f32 = 1.0;

/// How often a page is expected to change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChangeFreq {
    /// Changes on every access.
    Always,
    /// Changes about every hour.
    Hourly,
    /// Changes about every day.
    Daily,
    /// Changes about every week.
    #[default]
    Weekly,
    /// Changes about every month.
    Monthly,
    /// Changes about every year.
    Yearly,
    /// Archived content.
    Never,
}

impl ChangeFreq {
    /// Sitemap protocol value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFreq {
    type Err = SeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            "never" => Ok(Self::Never),
            other => Err(SeoError::InvalidChangeFreq(other.to_owned())),
        }
    }
}

/// A single `<url>` entry.
#[derive(Clone, Debug, PartialEq)]
pub struct SitemapUrl {
    /// Absolute page URL.
    pub loc: String,
    /// Last modification date.
    pub lastmod: Option<NaiveDate>,
    /// Expected change frequency.
    pub changefreq: Option<ChangeFreq>,
    /// Crawl priority between 0.0 and 1.0.
    pub priority: Option<f32>,
}

/// Crawl priority of a site path.
///
/// Getting-started guides rank highest, then API reference and codelabs.
#[must_use]
pub fn priority_for(path: &str) -> f32 {
    if path.contains("/docs/start-") {
        0.9
    } else if path.contains("/api/") || path.contains("/codelabs/") {
        0.8
    } else {
        0.7
    }
}

/// Sitemap of the whole site.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sitemap {
    urls: Vec<SitemapUrl>,
}

impl Sitemap {
    /// Build a sitemap with the home page followed by every document.
    #[must_use]
    pub fn from_documents<'a>(
        site: &SiteInfo,
        documents: impl IntoIterator<Item = &'a Document>,
        lastmod: NaiveDate,
        changefreq: ChangeFreq,
    ) -> Self {
        let mut urls = vec![SitemapUrl {
            loc: site.url("/"),
            lastmod: Some(lastmod),
            changefreq: Some(changefreq),
            priority: Some(HOME_PRIORITY),
        }];

        urls.extend(documents.into_iter().map(|doc| {
            let path = doc.href();
            SitemapUrl {
                loc: site.url(&path),
                lastmod: Some(lastmod),
                changefreq: Some(changefreq),
                priority: Some(priority_for(&path)),
            }
        }));

        Self { urls }
    }

    /// Entries in output order.
    #[must_use]
    pub fn urls(&self) -> &[SitemapUrl] {
        &self.urls
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Check if the sitemap has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Serialize to sitemap XML.
    pub fn to_xml(&self) -> Result<String, SeoError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(SeoError::Xml)?;
        writer
            .write_event(Event::Start(
                BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)]),
            ))
            .map_err(SeoError::Xml)?;

        for url in &self.urls {
            write_url(&mut writer, url).map_err(SeoError::Xml)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("urlset")))
            .map_err(SeoError::Xml)?;

        let mut xml = String::from_utf8(writer.into_inner().into_inner())?;
        xml.push('\n');
        Ok(xml)
    }

    /// Write the sitemap XML to `path`, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<(), SeoError> {
        let xml = self.to_xml()?;
        let io_err = |source: std::io::Error| SeoError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, xml).map_err(io_err)?;

        tracing::info!(path = %path.display(), urls = self.urls.len(), "Wrote sitemap");
        Ok(())
    }
}

fn write_url(writer: &mut Writer<Cursor<Vec<u8>>>, url: &SitemapUrl) -> std::io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("url")))?;

    writer
        .create_element("loc")
        .write_text_content(BytesText::new(&url.loc))?;
    if let Some(lastmod) = url.lastmod {
        writer
            .create_element("lastmod")
            .write_text_content(BytesText::new(&lastmod.format("%Y-%m-%d").to_string()))?;
    }
    if let Some(changefreq) = url.changefreq {
        writer
            .create_element("changefreq")
            .write_text_content(BytesText::new(changefreq.as_str()))?;
    }
    if let Some(priority) = url.priority {
        writer
            .create_element("priority")
            .write_text_content(BytesText::new(&format!("{priority:.1}")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("url")))?;
    Ok(())
}
