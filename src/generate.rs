//! Document rendering.
//!
//! Turns grouped snippets into the final Markdown document. The layout is a
//! fixed template compiled into the binary:
//!
//! ```text
//! # Proverbs                      ← document.title from proverbs.toml
//!
//! Optional intro paragraph.       ← document.intro
//!
//! ## code                         ← one section per group, sorted by name
//!
//! ### Clear is better than clever ← one entry per snippet, discovery order
//!
//! <img src="images/..." alt="..." />   ← only when an image matched
//!
//! <blockquote>...</blockquote>    ← snippet content, verbatim
//!
//! - #simplicity                   ← one line per tag
//! - #readability
//! ```

use crate::config::DocumentConfig;
use crate::template::{TemplateError, TemplateRenderer};
use crate::types::SnippetGroup;
use serde::Serialize;

const DOCUMENT_TEMPLATE_NAME: &str = "document.md";

const DOCUMENT_TEMPLATE: &str = r#"# {{ title }}
{% if intro %}
{{ intro }}
{% endif %}
{%- for group in groups %}
## {{ group.name }}
{% for snippet in group.snippets %}
### {{ snippet.title }}
{% if snippet.image %}
<img src="{{ snippet.image.rel_path | attr }}" alt="{{ snippet.image.text | attr }}" />
{% endif %}
{{ snippet.content }}
{% if snippet.tags %}
{% for tag in snippet.tags -%}
- #{{ tag }}
{% endfor -%}
{% endif %}
{%- endfor %}
{%- endfor %}
"#;

#[derive(Serialize)]
struct DocumentData<'a> {
    title: &'a str,
    intro: Option<&'a str>,
    groups: &'a [SnippetGroup],
}

/// Render the full document for already-grouped snippets.
pub fn render_document(
    groups: &[SnippetGroup],
    document: &DocumentConfig,
) -> Result<String, TemplateError> {
    let renderer = TemplateRenderer::from_source(DOCUMENT_TEMPLATE_NAME, DOCUMENT_TEMPLATE)?;
    let data = DocumentData {
        title: &document.title,
        intro: document.intro.as_deref(),
        groups,
    };
    let rendered = renderer.render(&data)?;
    tracing::debug!(
        groups = groups.len(),
        bytes = rendered.len(),
        "rendered document"
    );
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::group;
    use crate::types::{ImageInfo, Snippet};

    fn snippet(group: &str, title: &str, tags: &[&str], content: &str) -> Snippet {
        Snippet {
            title: title.to_string(),
            group: group.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            content: content.to_string(),
            image: None,
        }
    }

    fn document() -> DocumentConfig {
        DocumentConfig {
            title: "Proverbs".to_string(),
            intro: None,
        }
    }

    #[test]
    fn two_groups_end_to_end() {
        let groups = group(vec![
            snippet("life", "Be kind", &["people", "habits"], "<p>kindness</p>"),
            snippet("code", "Clear is better than clever", &["simplicity"], "<p>clarity</p>"),
        ]);
        let doc = render_document(&groups, &document()).unwrap();

        assert!(doc.starts_with("# Proverbs\n"));
        assert!(doc.contains("## code\n"));
        assert!(doc.contains("## life\n"));
        assert!(doc.contains("### Clear is better than clever\n"));
        assert!(doc.contains("### Be kind\n"));
        assert!(doc.contains("<p>clarity</p>"));
        assert!(doc.contains("<p>kindness</p>"));
        assert!(doc.contains("- #simplicity\n"));
        assert!(doc.contains("- #people\n"));
        assert!(doc.contains("- #habits\n"));

        // Sorted groups, and each snippet sits under its own group.
        let code = doc.find("## code").unwrap();
        let life = doc.find("## life").unwrap();
        let clear = doc.find("### Clear is better than clever").unwrap();
        let kind = doc.find("### Be kind").unwrap();
        assert!(code < clear && clear < life && life < kind);
    }

    #[test]
    fn members_render_in_stored_order() {
        let groups = group(vec![
            snippet("code", "Second by name", &[], "b"),
            snippet("code", "First by name", &[], "a"),
        ]);
        let doc = render_document(&groups, &document()).unwrap();
        let second = doc.find("### Second by name").unwrap();
        let first = doc.find("### First by name").unwrap();
        assert!(second < first);
    }

    #[test]
    fn content_is_not_escaped() {
        let groups = group(vec![snippet(
            "code",
            "Raw",
            &[],
            r#"<blockquote class="q">a &amp; b < c</blockquote>"#,
        )]);
        let doc = render_document(&groups, &document()).unwrap();
        assert!(doc.contains(r#"<blockquote class="q">a &amp; b < c</blockquote>"#));
    }

    #[test]
    fn tags_appear_in_declared_order() {
        let groups = group(vec![snippet("code", "T", &["zeta", "alpha"], "")]);
        let doc = render_document(&groups, &document()).unwrap();
        assert!(doc.contains("- #zeta\n- #alpha\n"));
    }

    #[test]
    fn image_rendered_when_present() {
        let mut s = snippet("code", "Pic", &[], "<p>x</p>");
        s.image = Some(ImageInfo {
            rel_path: "images/Pic|A gopher.png".to_string(),
            text: "A gopher".to_string(),
        });
        let doc = render_document(&group(vec![s]), &document()).unwrap();
        assert!(doc.contains(r#"<img src="images/Pic|A gopher.png" alt="A gopher" />"#));
    }

    #[test]
    fn image_attributes_are_escaped() {
        let mut s = snippet("code", "Foo", &[], "<p>x</p>");
        s.image = Some(ImageInfo {
            rel_path: r#"images/Foo|say "hi".png"#.to_string(),
            text: r#"say "hi""#.to_string(),
        });
        let doc = render_document(&group(vec![s]), &document()).unwrap();
        assert!(doc.contains(
            r#"<img src="images/Foo|say &quot;hi&quot;.png" alt="say &quot;hi&quot;" />"#
        ));
        assert!(doc.contains("<p>x</p>"));
    }

    #[test]
    fn no_image_tag_without_image() {
        let groups = group(vec![snippet("code", "Plain", &["a"], "<p>x</p>")]);
        let doc = render_document(&groups, &document()).unwrap();
        assert!(!doc.contains("<img"));
    }

    #[test]
    fn intro_rendered_when_configured() {
        let config = DocumentConfig {
            title: "Go Proverbs".to_string(),
            intro: Some("Simple, poetic, pithy.".to_string()),
        };
        let doc = render_document(&[], &config).unwrap();
        assert!(doc.starts_with("# Go Proverbs\n"));
        assert!(doc.contains("Simple, poetic, pithy."));
    }

    #[test]
    fn empty_document_has_only_header() {
        let doc = render_document(&[], &document()).unwrap();
        assert!(doc.starts_with("# Proverbs"));
        assert!(!doc.contains("##"));
    }
}
