//! Lazily loaded site.
//!
//! # Thread Safety
//!
//! `Site` is designed for concurrent access:
//! - `state()` returns `Arc<SiteState>`; the fast path is a read lock and an
//!   `Arc` clone
//! - the first access loads content under a load mutex with double-checked
//!   locking
//! - a failed load is not cached; the next access retries

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use chrono::{NaiveDate, Utc};
use vdocs_nav::{NavSection, NavTree, SiteNavigation};
use vdocs_seo::{ChangeFreq, SiteInfo, Sitemap};
use vdocs_store::{ContentSource, Document, DocumentStore, StoreError};

use crate::home::HomePage;
use crate::page_seo::{PageSeo, document_seo, home_seo};
use crate::route::{RouteData, RouteResult};
use crate::site_state::SiteState;

/// A routed page with its SEO head data.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageView {
    /// Page slug (`"docs/start-install"`).
    pub slug: String,
    /// Navigation title.
    pub title: String,
    /// Markdown body and front matter.
    #[serde(flatten)]
    pub data: RouteData,
    /// Head tags and structured data.
    pub seo: PageSeo,
}

/// Documentation site over a content source.
///
/// Content is loaded on first use and kept as an immutable [`SiteState`]
/// snapshot for the lifetime of the site.
pub struct Site {
    source: Arc<dyn ContentSource>,
    info: SiteInfo,
    home: HomePage,
    changefreq: ChangeFreq,
    /// Mutex for serializing load attempts.
    load_lock: Mutex<()>,
    /// Loaded snapshot, `None` until the first successful load.
    current_state: RwLock<Option<Arc<SiteState>>>,
}

impl Site {
    /// Create a site over `source` with default identity and home page.
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            info: SiteInfo::default(),
            home: HomePage::default(),
            changefreq: ChangeFreq::default(),
            load_lock: Mutex::new(()),
            current_state: RwLock::new(None),
        }
    }

    /// Set the site identity used for SEO and sitemap URLs.
    #[must_use]
    pub fn with_info(mut self, info: SiteInfo) -> Self {
        self.info = info;
        self
    }

    /// Set the home page content.
    #[must_use]
    pub fn with_home(mut self, home: HomePage) -> Self {
        self.home = home;
        self
    }

    /// Set the sitemap change frequency.
    #[must_use]
    pub fn with_changefreq(mut self, changefreq: ChangeFreq) -> Self {
        self.changefreq = changefreq;
        self
    }

    /// Site identity.
    #[must_use]
    pub fn info(&self) -> &SiteInfo {
        &self.info
    }

    /// Home page content.
    #[must_use]
    pub fn home(&self) -> &HomePage {
        &self.home
    }

    /// SEO head data of the home page.
    #[must_use]
    pub fn home_seo(&self) -> PageSeo {
        home_seo(&self.info)
    }

    /// Current site state, loading content if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the content source fails to load.
    pub fn state(&self) -> Result<Arc<SiteState>, StoreError> {
        // Fast path: already loaded
        if let Some(state) = self.snapshot() {
            return Ok(state);
        }

        // Slow path: acquire load lock
        let _guard = self
            .load_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Double-check after acquiring lock
        if let Some(state) = self.snapshot() {
            return Ok(state);
        }

        let store = DocumentStore::load(self.source.as_ref())?;
        tracing::info!(documents = store.len(), "Loaded site content");
        let state = Arc::new(SiteState::new(store));

        *self
            .current_state
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&state));

        Ok(state)
    }

    fn snapshot(&self) -> Option<Arc<SiteState>> {
        self.current_state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Resolve a slug to page content.
    ///
    /// Only slugs inside the `docs`, `api` and `codelabs` trees resolve.
    pub fn route(&self, slug: &str) -> RouteResult {
        let state = match self.state() {
            Ok(state) => state,
            Err(e) => {
                tracing::error!(slug, error = %e, "Failed to load site content");
                return RouteResult::Internal(e);
            }
        };

        match state.page(slug) {
            Some(doc) => RouteResult::Found(RouteData {
                content: doc.content.clone(),
                metadata: doc.metadata.clone(),
            }),
            None => RouteResult::NotFound,
        }
    }

    /// Attach the display title and SEO head data to routed page data.
    #[must_use]
    pub fn page_view(&self, slug: &str, data: RouteData) -> PageView {
        let doc = Document::new(slug, data.metadata, data.content);
        let title = vdocs_nav::display_title(&doc);
        let seo = document_seo(&self.info, &doc);

        PageView {
            slug: doc.slug,
            title,
            data: RouteData {
                content: doc.content,
                metadata: doc.metadata,
            },
            seo,
        }
    }

    /// Navigation of all trees.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the content source fails to load.
    pub fn navigation(&self) -> Result<SiteNavigation, StoreError> {
        Ok(self.state()?.navigation().clone())
    }

    /// Navigation sections of one tree.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the content source fails to load.
    pub fn navigation_tree(&self, tree: NavTree) -> Result<Vec<NavSection>, StoreError> {
        Ok(self.state()?.navigation().tree(tree).to_vec())
    }

    /// Sitemap dated today (UTC).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the content source fails to load.
    pub fn sitemap(&self) -> Result<Sitemap, StoreError> {
        self.sitemap_at(Utc::now().date_naive())
    }

    /// Sitemap with every `lastmod` set to `date`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the content source fails to load.
    pub fn sitemap_at(&self, date: NaiveDate) -> Result<Sitemap, StoreError> {
        let state = self.state()?;
        Ok(Sitemap::from_documents(
            &self.info,
            state.store().list_all(),
            date,
            self.changefreq,
        ))
    }
}

#[cfg(test)]
mod tests {
    // Ensure Site is Send + Sync for use with Arc
    static_assertions::assert_impl_all!(super::Site: Send, Sync);

    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;
    use vdocs_store::{ContentEntry, FsSource, MemorySource, Metadata, StoreErrorKind};

    use super::*;

    fn memory_site() -> Site {
        let source = MemorySource::new()
            .with_entry("docs/start-introduction.md", "# Intro", None)
            .with_entry(
                "docs/42-advanced-networking.md",
                "Sockets.",
                Some(Metadata::new().with("title", "Networking Deep Dive")),
            )
            .with_entry("api/api-quick-reference.md", "Reference.", None)
            .with_entry("codelabs/getting_started/1-introduction.md", "Lab.", None)
            .with_entry("notes/internal.md", "Unrouted.", None);
        Site::new(Arc::new(source))
    }

    /// Source that fails until `failures` reaches zero and counts loads.
    struct FlakySource {
        failures: AtomicUsize,
        loads: AtomicUsize,
    }

    impl ContentSource for FlakySource {
        fn load(&self) -> Result<Vec<ContentEntry>, StoreError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.failures.load(Ordering::SeqCst) > 0 {
                self.failures.fetch_sub(1, Ordering::SeqCst);
                return Err(StoreError::new(StoreErrorKind::Other));
            }
            Ok(vec![ContentEntry {
                slug: "docs/faq".to_owned(),
                body: "FAQ".to_owned(),
                front_matter: None,
            }])
        }
    }

    fn found(result: RouteResult) -> RouteData {
        match result {
            RouteResult::Found(data) => data,
            other => panic!("expected a routed page, got status {}", other.status()),
        }
    }

    #[test]
    fn test_route_found() {
        let site = memory_site();

        let result = site.route("docs/start-introduction");

        assert_eq!(result.status(), 200);
        assert_eq!(found(result).content, "# Intro");
    }

    #[test]
    fn test_route_found_with_metadata() {
        let site = memory_site();

        let result = site.route("docs/42-advanced-networking");

        assert_eq!(
            found(result).metadata.title(),
            Some("Networking Deep Dive")
        );
    }

    #[test]
    fn test_route_not_found() {
        let site = memory_site();

        assert_eq!(site.route("nonexistent/slug").status(), 404);
        assert_eq!(site.route("docs/missing").status(), 404);
        assert_eq!(site.route("").status(), 404);
    }

    #[test]
    fn test_route_unrouted_tree_is_not_found() {
        let site = memory_site();
        assert_eq!(site.route("notes/internal").status(), 404);
    }

    #[test]
    fn test_route_internal_on_load_failure() {
        let site = Site::new(Arc::new(FsSource::new(PathBuf::from("/nonexistent/content"))));

        let result = site.route("docs/start-introduction");

        assert_eq!(result.status(), 500);
        assert!(matches!(
            result,
            RouteResult::Internal(ref e) if e.kind == StoreErrorKind::NotFound
        ));
    }

    #[test]
    fn test_state_is_loaded_once() {
        let source = Arc::new(FlakySource {
            failures: AtomicUsize::new(0),
            loads: AtomicUsize::new(0),
        });
        let site = Site::new(Arc::clone(&source) as Arc<dyn ContentSource>);

        let first = site.state().unwrap();
        let second = site.state().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_load_is_retried() {
        let source = Arc::new(FlakySource {
            failures: AtomicUsize::new(1),
            loads: AtomicUsize::new(0),
        });
        let site = Site::new(Arc::clone(&source) as Arc<dyn ContentSource>);

        assert_eq!(site.route("docs/faq").status(), 500);
        assert_eq!(site.route("docs/faq").status(), 200);
        assert_eq!(source.loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_concurrent_first_access_loads_once() {
        let source = Arc::new(FlakySource {
            failures: AtomicUsize::new(0),
            loads: AtomicUsize::new(0),
        });
        let site = Arc::new(Site::new(Arc::clone(&source) as Arc<dyn ContentSource>));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let site = Arc::clone(&site);
                std::thread::spawn(move || site.route("docs/faq").status())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 200);
        }
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_page_view() {
        let site = memory_site();

        let slug = "docs/42-advanced-networking";

        let page = site.page_view(slug, found(site.route(slug)));

        assert_eq!(page.slug, slug);
        assert_eq!(page.title, "Networking Deep Dive");
        assert_eq!(page.data.content, "Sockets.");
        assert_eq!(page.data.metadata.title(), Some("Networking Deep Dive"));
        assert_eq!(
            page.seo.meta.canonical.as_deref(),
            Some("https://vadli-docs.onecat.dev/docs/42-advanced-networking")
        );
    }

    #[test]
    fn test_navigation() {
        let site = memory_site();

        let nav = site.navigation().unwrap();

        assert_eq!(nav.docs[0].key, "getting-started");
        assert_eq!(nav.api[0].title, "Quick Reference");
        assert_eq!(
            site.navigation_tree(NavTree::Codelabs).unwrap()[0].items[0].href,
            "/codelabs/getting_started/1-introduction"
        );
    }

    #[test]
    fn test_sitemap_includes_every_document() {
        let site = memory_site().with_changefreq(ChangeFreq::Monthly);
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

        let sitemap = site.sitemap_at(date).unwrap();

        assert_eq!(sitemap.len(), 6);
        assert_eq!(sitemap.urls()[0].loc, "https://vadli-docs.onecat.dev");
        assert!(
            sitemap
                .urls()
                .iter()
                .all(|u| u.changefreq == Some(ChangeFreq::Monthly))
        );
    }

    #[test]
    fn test_fs_site_end_to_end() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(
            docs.join("start-install.md"),
            "---\ntitle: Installing Vadli\norder: 1\n---\nRun the installer and follow the prompts.\n",
        )
        .unwrap();

        let site = Site::new(Arc::new(FsSource::new(temp_dir.path().to_path_buf())));

        let nav = site.navigation_tree(NavTree::Docs).unwrap();
        assert_eq!(nav[0].items[0].title, "Installing Vadli");
        assert_eq!(nav[0].items[0].order, Some(1));
        let page = site.page_view("docs/start-install", found(site.route("docs/start-install")));
        assert_eq!(
            page.seo.meta.description.as_deref(),
            Some("Run the installer and follow the prompts....")
        );
    }
}
