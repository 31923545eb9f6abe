//! Partition snippets into named groups.

use crate::types::{Snippet, SnippetGroup};
use std::collections::BTreeMap;

/// Group snippets by their `group` field.
///
/// Groups come out sorted by name so the rendered document is reproducible.
/// Members keep their input order. Nothing is filtered or deduplicated.
pub fn group(snippets: Vec<Snippet>) -> Vec<SnippetGroup> {
    let mut groups: BTreeMap<String, Vec<Snippet>> = BTreeMap::new();
    for snippet in snippets {
        groups.entry(snippet.group.clone()).or_default().push(snippet);
    }
    groups
        .into_iter()
        .map(|(name, snippets)| SnippetGroup { name, snippets })
        .collect()
}
