//! Document head tags.
//!
//! [`head_tags`] turns merged [`SeoMeta`] into the ordered list of tags a
//! page head should carry; [`render_head`] serializes them to HTML.

use std::fmt::Write;

use serde::Serialize;

use crate::meta::SeoMeta;

/// Attribute that names a `<meta>` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaAttr {
    /// `<meta name="...">`
    Name,
    /// `<meta property="...">` (Open Graph)
    Property,
}

impl MetaAttr {
    fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// A single head element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
pub enum HeadTag {
    /// `<title>`
    Title { text: String },
    /// `<meta {attr}="{key}" content="{content}">`
    Meta {
        attr: MetaAttr,
        key: String,
        content: String,
    },
    /// `<link rel="{rel}" href="{href}">`
    Link { rel: String, href: String },
}

impl HeadTag {
    fn name(key: &str, content: &str) -> Self {
        Self::Meta {
            attr: MetaAttr::Name,
            key: key.to_owned(),
            content: content.to_owned(),
        }
    }

    fn property(key: &str, content: &str) -> Self {
        Self::Meta {
            attr: MetaAttr::Property,
            key: key.to_owned(),
            content: content.to_owned(),
        }
    }
}

/// Head tags for a page, in emission order.
///
/// Pass metadata already merged over the site defaults. Unset fields emit
/// nothing.
#[must_use]
pub fn head_tags(meta: &SeoMeta) -> Vec<HeadTag> {
    let mut tags = Vec::new();

    if let Some(title) = &meta.title {
        tags.push(HeadTag::Title {
            text: title.clone(),
        });
        tags.push(HeadTag::name("title", title));
        tags.push(HeadTag::property("og:title", title));
        tags.push(HeadTag::name("twitter:title", title));
    }

    if let Some(description) = &meta.description {
        tags.push(HeadTag::name("description", description));
        tags.push(HeadTag::property("og:description", description));
        tags.push(HeadTag::name("twitter:description", description));
    }

    if let Some(keywords) = &meta.keywords {
        tags.push(HeadTag::name("keywords", keywords));
    }

    if let Some(author) = &meta.author {
        tags.push(HeadTag::name("author", author));
    }

    if let Some(og_type) = &meta.og_type {
        tags.push(HeadTag::property("og:type", og_type));
    }

    if let Some(image) = &meta.og_image {
        tags.push(HeadTag::property("og:image", image));
        tags.push(HeadTag::name("twitter:image", image));
    }

    if let Some(card) = &meta.twitter_card {
        tags.push(HeadTag::name("twitter:card", card));
    }

    if let Some(robots) = &meta.robots {
        tags.push(HeadTag::name("robots", robots));
    }

    if let Some(canonical) = &meta.canonical {
        tags.push(HeadTag::Link {
            rel: "canonical".to_owned(),
            href: canonical.clone(),
        });
        tags.push(HeadTag::property("og:url", canonical));
        tags.push(HeadTag::name("twitter:url", canonical));
    }

    tags
}

/// Serialize head tags to HTML, one tag per line.
#[must_use]
pub fn render_head(tags: &[HeadTag]) -> String {
    let mut out = String::new();

    for tag in tags {
        match tag {
            HeadTag::Title { text } => {
                let _ = writeln!(out, "<title>{}</title>", escape_html(text));
            }
            HeadTag::Meta { attr, key, content } => {
                let _ = writeln!(
                    out,
                    r#"<meta {}="{}" content="{}">"#,
                    attr.as_str(),
                    escape_html(key),
                    escape_html(content)
                );
            }
            HeadTag::Link { rel, href } => {
                let _ = writeln!(
                    out,
                    r#"<link rel="{}" href="{}">"#,
                    escape_html(rel),
                    escape_html(href)
                );
            }
        }
    }

    out
}

/// Serialize JSON-LD data into a `<script type="application/ld+json">` tag.
///
/// `</` is escaped so that string values cannot close the script element.
#[must_use]
pub fn render_json_ld(data: &serde_json::Value) -> String {
    let json = data.to_string().replace("</", r"<\/");
    format!(r#"<script type="application/ld+json">{json}</script>"#)
}

fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn keys(tags: &[HeadTag]) -> Vec<String> {
        tags.iter()
            .map(|t| match t {
                HeadTag::Title { .. } => "<title>".to_owned(),
                HeadTag::Meta { key, .. } => key.clone(),
                HeadTag::Link { rel, .. } => format!("link:{rel}"),
            })
            .collect()
    }

    #[test]
    fn test_head_tags_full_order() {
        let meta = SeoMeta {
            title: Some("T".to_owned()),
            description: Some("D".to_owned()),
            keywords: Some("K".to_owned()),
            author: Some("A".to_owned()),
            og_type: Some("article".to_owned()),
            og_image: Some("https://x/og.png".to_owned()),
            twitter_card: Some("summary".to_owned()),
            canonical: Some("https://x/docs/a".to_owned()),
            robots: Some("index, follow".to_owned()),
        };

        let tags = head_tags(&meta);

        assert_eq!(
            keys(&tags),
            vec![
                "<title>",
                "title",
                "og:title",
                "twitter:title",
                "description",
                "og:description",
                "twitter:description",
                "keywords",
                "author",
                "og:type",
                "og:image",
                "twitter:image",
                "twitter:card",
                "robots",
                "link:canonical",
                "og:url",
                "twitter:url",
            ]
        );
    }

    #[test]
    fn test_head_tags_empty_meta() {
        assert!(head_tags(&SeoMeta::default()).is_empty());
    }

    #[test]
    fn test_head_tags_attr_kind() {
        let meta = SeoMeta {
            og_type: Some("website".to_owned()),
            ..SeoMeta::default()
        };

        assert_eq!(
            head_tags(&meta),
            vec![HeadTag::Meta {
                attr: MetaAttr::Property,
                key: "og:type".to_owned(),
                content: "website".to_owned(),
            }]
        );
    }

    #[test]
    fn test_render_head_escapes() {
        let tags = vec![
            HeadTag::Title {
                text: "A & B <C>".to_owned(),
            },
            HeadTag::name("description", r#"say "hi""#),
            HeadTag::Link {
                rel: "canonical".to_owned(),
                href: "https://x/?a=1&b=2".to_owned(),
            },
        ];

        assert_eq!(
            render_head(&tags),
            "<title>A &amp; B &lt;C&gt;</title>\n\
             <meta name=\"description\" content=\"say &quot;hi&quot;\">\n\
             <link rel=\"canonical\" href=\"https://x/?a=1&amp;b=2\">\n"
        );
    }

    #[test]
    fn test_render_json_ld_escapes_script_close() {
        let data = serde_json::json!({"headline": "</script><b>"});

        let html = render_json_ld(&data);

        assert_eq!(
            html,
            r#"<script type="application/ld+json">{"headline":"<\/script><b>"}</script>"#
        );
    }
}
