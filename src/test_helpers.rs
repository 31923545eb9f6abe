//! Shared test utilities.
//!
//! Fixture setup plus lookup helpers over scan results.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path(), &SiteConfig::default()).unwrap();
//!
//! let code = find_group(&manifest, "code");
//! assert_eq!(snippet_titles(code), vec!["Clear is better than clever", "Errors are values"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::Manifest;
use crate::types::{Snippet, SnippetGroup};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Manifest lookups (panic with a clear message on miss)
// =========================================================================

/// Find a group by name. Panics if not found.
pub fn find_group<'a>(manifest: &'a Manifest, name: &str) -> &'a SnippetGroup {
    manifest
        .groups
        .iter()
        .find(|g| g.name == name)
        .unwrap_or_else(|| {
            let names = group_names(manifest);
            panic!("group '{name}' not found. Available: {names:?}")
        })
}

/// Find a snippet by title in any group. Panics if not found.
pub fn find_snippet<'a>(manifest: &'a Manifest, title: &str) -> &'a Snippet {
    manifest
        .groups
        .iter()
        .flat_map(|g| g.snippets.iter())
        .find(|s| s.title == title)
        .unwrap_or_else(|| {
            let titles: Vec<&str> = manifest
                .groups
                .iter()
                .flat_map(snippet_titles)
                .collect();
            panic!("snippet '{title}' not found. Available: {titles:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All group names in manifest order.
pub fn group_names(manifest: &Manifest) -> Vec<&str> {
    manifest.groups.iter().map(|g| g.name.as_str()).collect()
}

/// All snippet titles in group order.
pub fn snippet_titles(group: &SnippetGroup) -> Vec<&str> {
    group.snippets.iter().map(|s| s.title.as_str()).collect()
}
