//! # proverb-gen
//!
//! Collects HTML proverb snippets into a single grouped Markdown document.
//! Your filesystem is the data source: folders become groups, filenames carry
//! titles and tags, and images attach themselves to snippets by title.
//!
//! # Pipeline
//!
//! ```text
//! 1. Index    images/            →  ImageIndex          (title → image)
//! 2. Assemble proverbs/<g>/*.html →  Vec<Snippet>        (decode path, look up image)
//! 3. Group    Vec<Snippet>       →  Vec<SnippetGroup>   (sorted by group name)
//! 4. Render   Vec<SnippetGroup>  →  Markdown on stdout  (fixed template)
//! ```
//!
//! The index is complete before the first snippet is assembled and is never
//! mutated afterwards. A separate scaffold flow (`proverb-gen new`) renders a
//! project-local template with a title and tags and does not touch the
//! pipeline above.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | Pipe-delimited filename convention for snippets and images |
//! | [`images`] | Title-keyed image index |
//! | [`scan`] | Directory discovery and snippet assembly |
//! | [`group`] | Partition snippets into sorted groups |
//! | [`generate`] | Fixed document template |
//! | [`scaffold`] | User template rendering for new snippets |
//! | [`template`] | Tera wrapper shared by both renderers |
//! | [`config`] | `proverbs.toml` loading and validation |
//! | [`types`] | Records shared across modules and templates |
//! | [`output`] | `check` report formatting |
//! | [`logging`] | tracing subscriber on stderr |
//!
//! # Design Decisions
//!
//! ## Deterministic Output
//!
//! Groups are sorted by name and files are discovered in file-name order, so
//! the same tree always produces the same document byte for byte, and "the
//! last image with a given title wins" means the same file on every machine.
//!
//! ## Trusted HTML
//!
//! Snippet content is written by the project's authors and is inserted into
//! the document verbatim. Templates are rendered with autoescaping off.
//!
//! ## Tera For Both Templates
//!
//! The scaffold template is supplied by the user at run time, so templates
//! are parsed at run time too. The document template uses the same engine so
//! both flows share one syntax and one error type.

pub mod config;
pub mod generate;
pub mod group;
pub mod images;
pub mod logging;
pub mod naming;
pub mod output;
pub mod scaffold;
pub mod scan;
pub mod template;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
