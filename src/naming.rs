//! Filename conventions for snippets and images.
//!
//! Metadata lives in the filesystem, not in front-matter. A snippet's group is
//! its parent folder and its title and tags are packed into the filename:
//!
//! ```text
//! proverbs/code/Clear is better than clever|simplicity,readability.html
//! ^^^^^^^^ ^^^^ ^^^^^^^^^^^^^^^^^^^^^^^^^^^ ^^^^^^^^^^^^^^^^^^^^^^
//! marker   group title                      tags
//! ```
//!
//! Images use the same `|` delimiter, with the title acting as the key that
//! correlates an image with its snippet:
//!
//! ```text
//! images/Clear is better than clever|A squinting gopher.png
//!        ^^^^^^^^^^^^^^^^^^^^^^^^^^^ ^^^^^^^^^^^^^^^^^^
//!        key                         display text
//! ```
//!
//! Only the first `|` splits; anything after it belongs to the second part.

use crate::types::ImageInfo;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Separates the title from the tag list or display text.
pub const FIELD_DELIMITER: char = '|';
/// Separates tags from each other.
pub const TAG_DELIMITER: char = ',';
/// Extension stripped from snippet filenames.
pub const SNIPPET_EXTENSION: &str = ".html";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NamingError {
    #[error("malformed path {}: {reason} (relative to {})", path.display(), root.display())]
    MalformedPath {
        path: PathBuf,
        root: PathBuf,
        reason: &'static str,
    },
}

/// Metadata decoded from a snippet path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetName {
    pub group: String,
    pub title: String,
    pub tags: Vec<String>,
}

/// Decode `<root>/<marker>/<group>/<title>[|<tags>].html`.
///
/// The path relative to `root` must have exactly three segments. The marker
/// segment (the proverbs directory) is not inspected. Tags are split on `,`
/// and empty tokens are dropped, so `a,,b,` yields `["a", "b"]`.
pub fn parse_snippet_path(path: &Path, root: &Path) -> Result<SnippetName, NamingError> {
    let malformed = |reason| NamingError::MalformedPath {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
        reason,
    };

    let rel = path
        .strip_prefix(root)
        .map_err(|_| malformed("not inside the root directory"))?;
    let segments = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| malformed("path is not valid UTF-8"))?;

    let [_, group, file_name] = segments.as_slice() else {
        return Err(malformed("must be nested within exactly one group folder"));
    };

    let stem = file_name
        .strip_suffix(SNIPPET_EXTENSION)
        .unwrap_or(file_name);
    let (title, tags) = split_snippet_stem(stem);
    if title.is_empty() {
        return Err(malformed("snippet title is empty"));
    }

    Ok(SnippetName {
        group: group.to_string(),
        title,
        tags,
    })
}

/// Split a snippet filename stem into title and tags.
///
/// - `"Title"` → `("Title", [])`
/// - `"Title|a,b"` → `("Title", ["a", "b"])`
/// - `"Title|"` → `("Title", [])`
/// - `"Title|a,,b"` → `("Title", ["a", "b"])`
pub fn split_snippet_stem(stem: &str) -> (String, Vec<String>) {
    match stem.split_once(FIELD_DELIMITER) {
        Some((title, tags)) => (
            title.to_string(),
            tags.split(TAG_DELIMITER)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect(),
        ),
        None => (stem.to_string(), Vec::new()),
    }
}

/// Decode `<root>/<images>/<key>[|<text>].<ext>` into its key and metadata.
///
/// The relative path is kept verbatim. Only the last extension is removed
/// before splitting, so `a|b.c.png` has key `a` and text `b.c`.
pub fn parse_image_path(path: &Path, root: &Path) -> Result<(String, ImageInfo), NamingError> {
    let malformed = |reason| NamingError::MalformedPath {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
        reason,
    };

    let rel = path
        .strip_prefix(root)
        .map_err(|_| malformed("not inside the root directory"))?;
    let rel_path = rel
        .to_str()
        .ok_or_else(|| malformed("path is not valid UTF-8"))?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| malformed("image file name is empty"))?;
    let (key, text) = match stem.split_once(FIELD_DELIMITER) {
        Some((key, text)) => (key.to_string(), text.to_string()),
        None => (stem.to_string(), String::new()),
    };

    Ok((
        key,
        ImageInfo {
            rel_path: rel_path.to_string(),
            text,
        },
    ))
}
