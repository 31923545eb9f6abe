//! Filesystem discovery and snippet assembly.
//!
//! Walks the project root and produces a [`Manifest`]: every snippet decoded,
//! correlated with its image, and grouped.
//!
//! ## Directory Structure
//!
//! ```text
//! ./                                            # Root
//! ├── proverbs.toml                             # Configuration (optional)
//! ├── _proverb_template.md                      # Scaffold template for `new`
//! ├── proverbs/                                 # proverbs_dir
//! │   ├── code/                                 # Group
//! │   │   ├── Clear is better than clever|simplicity,readability.html
//! │   │   └── Errors are values|errors.html
//! │   └── life/
//! │       └── Measure twice, cut once.html      # No tags
//! └── images/                                   # images_dir (optional)
//!     └── Clear is better than clever|A squinting gopher.png
//! ```
//!
//! ## Pipeline
//!
//! 1. Index every file under the images directory by title key.
//! 2. Read and decode every `.html` file under the proverbs directory, looking
//!    each title up in the finished index.
//! 3. Group the assembled snippets.
//!
//! Entries are visited in file-name order at every level, which makes both
//! member order and "last image wins" independent of the filesystem. The first
//! error aborts the scan.

use crate::config::SiteConfig;
use crate::group::group;
use crate::images::ImageIndex;
use crate::naming::{self, NamingError};
use crate::types::{Snippet, SnippetGroup};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not walk directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("directory not found: {}", .0.display())]
    MissingDir(PathBuf),
    #[error(transparent)]
    Naming(#[from] NamingError),
}

/// Result of a full scan.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub groups: Vec<SnippetGroup>,
    pub images: ImageIndex,
}

impl Manifest {
    pub fn snippet_count(&self) -> usize {
        self.groups.iter().map(|g| g.snippets.len()).sum()
    }
}

pub fn scan(root: &Path, config: &SiteConfig) -> Result<Manifest, ScanError> {
    let proverbs_dir = root.join(&config.proverbs_dir);
    if !proverbs_dir.is_dir() {
        return Err(ScanError::MissingDir(proverbs_dir));
    }

    let images = build_image_index(root, &root.join(&config.images_dir))?;

    let mut snippets = Vec::new();
    for path in discover_files(&proverbs_dir, is_snippet_file)? {
        let raw = read_snippet(&path)?;
        let snippet = assemble(&raw, &path, root, &images)?;
        tracing::debug!(
            group = %snippet.group,
            title = %snippet.title,
            tags = snippet.tags.len(),
            image = snippet.image.is_some(),
            "assembled snippet"
        );
        snippets.push(snippet);
    }

    warn_shared_images(&snippets);

    let groups = group(snippets);
    tracing::info!(
        groups = groups.len(),
        images = images.len(),
        "scanned {}",
        root.display()
    );

    Ok(Manifest { groups, images })
}

/// Build one snippet from its raw bytes and path.
///
/// Content is decoded lossily and otherwise passed through untouched. The
/// image, if any, is the index entry keyed by the decoded title.
pub fn assemble(
    raw: &[u8],
    path: &Path,
    root: &Path,
    images: &ImageIndex,
) -> Result<Snippet, NamingError> {
    let name = naming::parse_snippet_path(path, root)?;
    let image = images.lookup(&name.title).cloned();
    Ok(Snippet {
        title: name.title,
        group: name.group,
        tags: name.tags,
        content: String::from_utf8_lossy(raw).into_owned(),
        image,
    })
}

fn read_snippet(path: &Path) -> Result<Vec<u8>, ScanError> {
    fs::read(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Index every non-hidden file under `images_dir`. A missing directory yields
/// an empty index.
fn build_image_index(root: &Path, images_dir: &Path) -> Result<ImageIndex, ScanError> {
    if !images_dir.is_dir() {
        tracing::debug!(dir = %images_dir.display(), "no images directory");
        return Ok(ImageIndex::default());
    }
    let entries = discover_files(images_dir, |_| true)?
        .iter()
        .map(|path| naming::parse_image_path(path, root))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ImageIndex::build(entries))
}

/// Files under `dir` accepted by `keep`, skipping hidden entries, in
/// file-name order.
fn discover_files(dir: &Path, keep: fn(&Path) -> bool) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && keep(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

fn is_snippet_file(path: &Path) -> bool {
    path.extension().map(|e| e == "html").unwrap_or(false)
}

/// Titles are the only correlation key, so two snippets with the same title
/// in different groups both receive the same image.
fn warn_shared_images(snippets: &[Snippet]) {
    for (image, groups) in shared_images(snippets) {
        tracing::warn!(
            image,
            groups = ?groups,
            "image attached to more than one snippet with the same title"
        );
    }
}

/// Images attached to more than one snippet, with the groups of those
/// snippets, in image path order.
fn shared_images(snippets: &[Snippet]) -> Vec<(&str, Vec<&str>)> {
    let mut by_image: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for snippet in snippets {
        if let Some(path) = snippet.image_rel_path() {
            by_image.entry(path).or_default().push(&snippet.group);
        }
    }
    by_image
        .into_iter()
        .filter(|(_, groups)| groups.len() > 1)
        .collect()
}
