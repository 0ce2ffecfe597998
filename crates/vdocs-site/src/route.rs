//! Route resolution results.

use serde::Serialize;
use vdocs_store::{Metadata, StoreError};

/// Content of a resolved page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteData {
    /// Raw markdown body (front matter removed).
    pub content: String,
    /// Front-matter metadata.
    pub metadata: Metadata,
}

/// Outcome of resolving a slug.
///
/// Not-found is an expected outcome; `Internal` is reserved for failures to
/// load the site content and carries the cause.
#[derive(Debug)]
pub enum RouteResult {
    /// Page exists (HTTP 200).
    Found(RouteData),
    /// No routed page with this slug (HTTP 404).
    NotFound,
    /// Content could not be loaded (HTTP 500).
    Internal(StoreError),
}

impl RouteResult {
    /// HTTP status code of this outcome.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Found(_) => 200,
            Self::NotFound => 404,
            Self::Internal(_) => 500,
        }
    }
}
