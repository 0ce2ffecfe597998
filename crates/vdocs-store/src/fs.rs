//! Filesystem content source.
//!
//! Walks a content directory for markdown files and reads each one into a
//! [`ContentEntry`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::source::{ContentEntry, ContentSource, entry_from_markdown, slug_from_path};

/// Filesystem content source.
///
/// Recursively collects `*.md` files under `content_dir`. Hidden files and
/// directories (names starting with `.`) are skipped. Entries are returned
/// in slug order so that the store's enumeration order is stable across
/// platforms.
///
/// # Example
///
/// ```no_run
/// use std::path::PathBuf;
/// use vdocs_store::{DocumentStore, FsSource};
///
/// let source = FsSource::new(PathBuf::from("content"));
/// let store = DocumentStore::load(&source)?;
/// println!("{} documents", store.len());
/// # Ok::<(), vdocs_store::StoreError>(())
/// ```
#[derive(Clone, Debug)]
pub struct FsSource {
    /// Root directory for markdown content.
    content_dir: PathBuf,
}

impl FsSource {
    /// Create a source rooted at `content_dir`.
    #[must_use]
    pub fn new(content_dir: PathBuf) -> Self {
        Self { content_dir }
    }

    /// Root directory of this source.
    #[must_use]
    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Collect markdown files below `dir`.
    fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), StoreError> {
        let entries = fs::read_dir(dir).map_err(|e| StoreError::io(e, dir))?;

        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(e, dir))?;
            let name = entry.file_name();
            if name.to_string_lossy().starts_with('.') {
                continue;
            }

            let path = entry.path();
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
            if is_dir {
                Self::collect_files(&path, files)?;
            } else if path.extension().is_some_and(|e| e == "md") {
                files.push(path);
            }
        }

        Ok(())
    }

    /// Read a single markdown file into an entry.
    fn read_entry(&self, path: &Path) -> Result<ContentEntry, StoreError> {
        let rel_path = path.strip_prefix(&self.content_dir).unwrap_or(path);
        let slug = slug_from_path(&rel_path.to_string_lossy(), "");
        let raw = fs::read_to_string(path).map_err(|e| StoreError::io(e, rel_path))?;
        entry_from_markdown(slug, &raw).map_err(|e| e.with_path(rel_path))
    }
}

impl ContentSource for FsSource {
    fn load(&self) -> Result<Vec<ContentEntry>, StoreError> {
        if !self.content_dir.is_dir() {
            return Err(StoreError::not_found(&self.content_dir));
        }

        let mut files = Vec::new();
        Self::collect_files(&self.content_dir, &mut files)?;

        let mut entries = files
            .iter()
            .map(|path| self.read_entry(path))
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort_by(|a, b| a.slug.cmp(&b.slug));

        tracing::debug!(
            dir = %self.content_dir.display(),
            count = entries.len(),
            "Loaded content files"
        );

        Ok(entries)
    }
}
