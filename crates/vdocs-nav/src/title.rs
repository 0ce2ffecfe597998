//! Display title derivation.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use vdocs_store::Document;

/// Title used when nothing is left after prefix stripping.
pub const UNTITLED: &str = "Untitled";

static NUMERIC_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)-").unwrap());

static SEMANTIC_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:start|core|native|advanced|performance|workflow|help|stdlib|client-libraries|api)-")
        .unwrap()
});

/// Derive a human-readable title from a filename.
///
/// Strips a leading numeric ordering prefix (`"01-"`) and one known semantic
/// prefix (`"start-"`, `"api-"`, ...), then title-cases the remaining words.
/// Applying it to its own output yields the same string.
///
/// # Examples
///
/// ```
/// use vdocs_nav::derive_title;
///
/// assert_eq!(derive_title("start-introduction"), "Introduction");
/// assert_eq!(derive_title("1-getting-set-up"), "Getting Set Up");
/// assert_eq!(derive_title("api-"), "Untitled");
/// ```
#[must_use]
pub fn derive_title(file_name: &str) -> String {
    let name = NUMERIC_PREFIX_RE.replace(file_name, "");
    let name = SEMANTIC_PREFIX_RE.replace(&name, "");

    let mut title = String::with_capacity(name.len());
    for word in name.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !title.is_empty() {
            title.push(' ');
        }
        capitalize_first_into(word, &mut title);
    }

    if title.is_empty() {
        return UNTITLED.to_owned();
    }
    title
}

/// Capitalize the first character of a word, appending to `buf`.
fn capitalize_first_into(word: &str, buf: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        buf.extend(first.to_uppercase());
        buf.push_str(chars.as_str());
    }
}

/// Navigation title for a document.
///
/// A non-empty front-matter `title` wins; otherwise the title is derived
/// from the last slug segment.
#[must_use]
pub fn display_title(doc: &Document) -> String {
    doc.metadata
        .title()
        .map_or_else(|| derive_title(doc.file_name()), ToOwned::to_owned)
}

/// Ordering number encoded as a `"<digits>-"` filename prefix.
///
/// Returns `None` without a prefix or when the number does not fit `u32`.
#[must_use]
pub fn numeric_prefix(file_name: &str) -> Option<u32> {
    NUMERIC_PREFIX_RE
        .captures(file_name)
        .and_then(|caps| caps[1].parse().ok())
}

/// Compare titles case-insensitively, falling back to exact comparison.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vdocs_store::Metadata;

    use super::*;

    #[test]
    fn test_derive_title_strips_semantic_prefix() {
        assert_eq!(derive_title("start-introduction"), "Introduction");
        assert_eq!(derive_title("core-state-management"), "State Management");
        assert_eq!(derive_title("client-libraries-swift"), "Swift");
        assert_eq!(derive_title("api-quick-reference"), "Quick Reference");
    }

    #[test]
    fn test_derive_title_strips_numeric_prefix() {
        assert_eq!(derive_title("1-introduction"), "Introduction");
        assert_eq!(derive_title("42-advanced-networking"), "Networking");
    }

    #[test]
    fn test_derive_title_without_prefix() {
        assert_eq!(derive_title("faq"), "Faq");
        assert_eq!(derive_title("third-party"), "Third Party");
        assert_eq!(derive_title("getting_started"), "Getting Started");
    }

    #[test]
    fn test_derive_title_requires_hyphen_after_prefix() {
        assert_eq!(derive_title("starter-kit"), "Starter Kit");
        assert_eq!(derive_title("coreutils"), "Coreutils");
    }

    #[test]
    fn test_derive_title_empty_after_stripping() {
        assert_eq!(derive_title(""), UNTITLED);
        assert_eq!(derive_title("start-"), UNTITLED);
        assert_eq!(derive_title("7-"), UNTITLED);
        assert_eq!(derive_title("--"), UNTITLED);
    }

    #[test]
    fn test_derive_title_is_idempotent() {
        for name in [
            "start-introduction",
            "1-introduction",
            "42-advanced-networking",
            "client-libraries-kotlin",
            "third-party",
            "getting_started",
            "",
            "api-",
        ] {
            let once = derive_title(name);
            assert_eq!(derive_title(&once), once, "not idempotent for {name:?}");
        }
    }

    #[test]
    fn test_display_title_prefers_front_matter() {
        let meta = Metadata::new().with("title", "Networking Deep Dive");
        let doc = Document::new("docs/42-advanced-networking", meta, "");

        assert_eq!(display_title(&doc), "Networking Deep Dive");
    }

    #[test]
    fn test_display_title_keeps_whitespace_front_matter() {
        let meta = Metadata::new().with("title", "   ");
        let doc = Document::new("docs/start-introduction", meta, "");

        assert_eq!(display_title(&doc), "   ");
    }

    #[test]
    fn test_display_title_ignores_empty_front_matter() {
        let meta = Metadata::new().with("title", "");
        let doc = Document::new("docs/start-introduction", meta, "");

        assert_eq!(display_title(&doc), "Introduction");
    }

    #[test]
    fn test_display_title_derives_from_last_segment() {
        let doc = Document::new("codelabs/getting_started/2-first-screen", Metadata::new(), "");
        assert_eq!(display_title(&doc), "First Screen");
    }

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(numeric_prefix("1-introduction"), Some(1));
        assert_eq!(numeric_prefix("010-setup"), Some(10));
        assert_eq!(numeric_prefix("introduction"), None);
        assert_eq!(numeric_prefix("12"), None);
        assert_eq!(numeric_prefix("99999999999-overflow"), None);
    }

    #[test]
    fn test_numeric_prefix_is_ascii_only() {
        assert_eq!(numeric_prefix("٣-intro"), None);
        assert_eq!(derive_title("٣-intro"), "٣ Intro");
    }

    #[test]
    fn test_compare_titles() {
        assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_titles("Zeta", "alpha"), Ordering::Greater);
        assert_eq!(compare_titles("Same", "Same"), Ordering::Equal);
        assert_ne!(compare_titles("same", "Same"), Ordering::Equal);
    }
}
