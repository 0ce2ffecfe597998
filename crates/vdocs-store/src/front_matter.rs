//! YAML front-matter handling.
//!
//! A markdown file may start with a YAML block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Installation
//! order: 2
//! ---
//! # Installing
//! ```

use std::collections::BTreeMap;

use serde_json::Value;

use crate::document::Metadata;

/// Error type for front-matter parsing.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    /// YAML block is malformed or not a mapping.
    #[error("Invalid YAML front matter: {0}")]
    Parse(String),
}

/// Split raw markdown into its front-matter block and body.
///
/// Returns `(None, raw)` when the text does not start with a `---` line or
/// the block is never closed.
pub fn split_front_matter(raw: &str) -> (Option<&str>, &str) {
    let Some(rest) = raw
        .strip_prefix("---\n")
        .or_else(|| raw.strip_prefix("---\r\n"))
    else {
        return (None, raw);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }

    (None, raw)
}

/// Parse a front-matter block into [`Metadata`].
///
/// Empty or whitespace-only blocks produce empty metadata.
///
/// # Errors
///
/// Returns [`FrontMatterError::Parse`] if the YAML is malformed or is not a
/// mapping with string keys.
pub fn parse_front_matter(yaml: &str) -> Result<Metadata, FrontMatterError> {
    let trimmed = yaml.trim();
    if trimmed.is_empty() {
        return Ok(Metadata::default());
    }

    serde_yaml::from_str::<BTreeMap<String, Value>>(trimmed)
        .map(Metadata::from)
        .map_err(|e| FrontMatterError::Parse(e.to_string()))
}
