//! Records shared by every pipeline step.
//!
//! These types are what the templates see (via their serde derives) and what
//! the `scan` command dumps as JSON, so field names are part of the template
//! contract: `snippet.title`, `snippet.tags`, `snippet.image.rel_path`, ...

use serde::Serialize;

/// Image metadata decoded from an image filename.
///
/// `images/Clear is better than clever|A squinting gopher.png` becomes
/// `rel_path = "images/Clear is better than clever|A squinting gopher.png"`,
/// `text = "A squinting gopher"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    /// Path relative to the root, kept verbatim for the output document.
    pub rel_path: String,
    /// Display text from the filename. Empty when the filename has no `|`.
    pub text: String,
}

/// One content fragment plus the metadata decoded from its path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub title: String,
    pub group: String,
    /// Never contains empty strings.
    pub tags: Vec<String>,
    /// Trusted HTML, rendered without escaping.
    pub content: String,
    /// Image whose key equals `title`, if any.
    pub image: Option<ImageInfo>,
}

impl Snippet {
    pub fn image_rel_path(&self) -> Option<&str> {
        self.image.as_ref().map(|i| i.rel_path.as_str())
    }

    pub fn image_text(&self) -> Option<&str> {
        self.image.as_ref().map(|i| i.text.as_str())
    }
}

/// A named group and its members in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetGroup {
    pub name: String,
    pub snippets: Vec<Snippet>,
}
