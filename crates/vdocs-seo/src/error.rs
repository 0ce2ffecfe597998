//! SEO error types.

use std::path::PathBuf;

/// Error produced while exporting SEO artifacts.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SeoError {
    /// Serializing the sitemap XML failed.
    #[error("failed to write sitemap XML")]
    Xml(#[source] std::io::Error),

    /// Serialized XML is not valid UTF-8.
    #[error("sitemap XML is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Writing the sitemap file failed.
    #[error("failed to write {}", path.display())]
    Io {
        /// Target file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Unknown sitemap change frequency.
    #[error("invalid change frequency '{0}' (expected always, hourly, daily, weekly, monthly, yearly or never)")]
    InvalidChangeFreq(String),
}
