//! Title-keyed index of discovered images.
//!
//! Built once per run, before any snippet is assembled, and only borrowed
//! immutably afterwards. Most snippets have no image, so a lookup miss is an
//! ordinary `None` rather than an error.

use crate::types::{ImageInfo, SnippetGroup};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct ImageIndex {
    entries: BTreeMap<String, ImageInfo>,
}

impl ImageIndex {
    /// Aggregate `(key, info)` pairs. When two images share a key the later
    /// one replaces the earlier one.
    pub fn build<I>(images: I) -> Self
    where
        I: IntoIterator<Item = (String, ImageInfo)>,
    {
        let mut entries = BTreeMap::new();
        for (key, info) in images {
            if let Some(previous) = entries.insert(key.clone(), info) {
                tracing::debug!(
                    key = %key,
                    replaced = %previous.rel_path,
                    "image key seen more than once, keeping the later file"
                );
            }
        }
        Self { entries }
    }

    pub fn lookup(&self, key: &str) -> Option<&ImageInfo> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ImageInfo)> {
        self.entries.iter().map(|(key, info)| (key.as_str(), info))
    }

    /// Keys that no snippet title matched, in key order.
    pub fn unused<'a>(&'a self, groups: &[SnippetGroup]) -> Vec<&'a str> {
        let titles: HashSet<&str> = groups
            .iter()
            .flat_map(|g| g.snippets.iter())
            .map(|s| s.title.as_str())
            .collect();
        self.entries
            .keys()
            .map(String::as_str)
            .filter(|k| !titles.contains(k))
            .collect()
    }
}
