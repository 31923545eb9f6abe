//! Scaffolding for new snippets.
//!
//! `proverb-gen new` renders a project-local template with the requested
//! title and tags and prints the result, ready to be saved as a new snippet.
//! The template sees two variables:
//!
//! ```text
//! {{ title }}: {% for tag in tags %}#{{ tag }} {% endfor %}
//! ```
//!
//! This flow never touches the snippet or image directories.

use crate::template::{TemplateError, TemplateRenderer};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SCAFFOLD_TEMPLATE_NAME: &str = "scaffold";

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("could not read template {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Template(#[from] TemplateError),
}

#[derive(Serialize)]
struct ScaffoldData<'a> {
    title: &'a str,
    tags: &'a [String],
}

/// Render `template` with `title` and `tags`.
pub fn render_scaffold(
    template: &str,
    title: &str,
    tags: &[String],
) -> Result<String, TemplateError> {
    let renderer = TemplateRenderer::from_source(SCAFFOLD_TEMPLATE_NAME, template)?;
    renderer.render(&ScaffoldData { title, tags })
}

/// Read the template at `template_path` and render it.
pub fn scaffold(template_path: &Path, title: &str, tags: &[String]) -> Result<String, ScaffoldError> {
    let template = fs::read_to_string(template_path).map_err(|source| ScaffoldError::Io {
        path: template_path.to_path_buf(),
        source,
    })?;
    tracing::debug!(template = %template_path.display(), title, "rendering scaffold");
    Ok(render_scaffold(&template, title, tags)?)
}

/// Split a `--tags` value on `,`. No trimming, no filtering: `"a,,b"` gives
/// three tags, the middle one empty.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(String::from).collect()
}
