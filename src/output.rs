//! CLI output formatting for the `check` command.
//!
//! The report is information-first: each group and snippet leads with its
//! positional index and title, with tags and images as indented context lines.
//!
//! ```text
//! Groups
//! 001 code (2 snippets)
//!     001 Clear is better than clever
//!         Tags: #simplicity #readability
//!         Image: images/Clear is better than clever|A squinting gopher.png
//!     002 Errors are values
//!         Tags: #errors
//! 002 life (1 snippet)
//!     001 Measure twice, cut once
//!
//! Images
//! 001 Clear is better than clever
//!     images/Clear is better than clever|A squinting gopher.png
//! 002 Unused picture (unused)
//!     images/Unused picture.png
//!     2 indexed, 1 unused
//! ```
//!
//! `format_*` functions are pure and return lines; `print_*` writes them to
//! stdout.

use crate::scan::Manifest;
use std::collections::HashSet;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

pub fn format_check_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Groups".to_string()];

    for (gi, group) in manifest.groups.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(gi + 1),
            group.name,
            plural(group.snippets.len(), "snippet")
        ));
        for (si, snippet) in group.snippets.iter().enumerate() {
            lines.push(format!(
                "{}{} {}",
                indent(1),
                format_index(si + 1),
                snippet.title
            ));
            if !snippet.tags.is_empty() {
                let tags: Vec<String> = snippet.tags.iter().map(|t| format!("#{t}")).collect();
                lines.push(format!("{}Tags: {}", indent(2), tags.join(" ")));
            }
            if let Some(path) = snippet.image_rel_path() {
                lines.push(format!("{}Image: {}", indent(2), path));
            }
        }
    }

    let unused: HashSet<&str> = manifest.images.unused(&manifest.groups).into_iter().collect();
    lines.push(String::new());
    lines.push("Images".to_string());
    for (ii, (key, info)) in manifest.images.iter().enumerate() {
        let marker = if unused.contains(key) { " (unused)" } else { "" };
        lines.push(format!("{} {}{}", format_index(ii + 1), key, marker));
        lines.push(format!("{}{}", indent(1), info.rel_path));
    }
    lines.push(format!(
        "{}{} indexed, {} unused",
        indent(1),
        manifest.images.len(),
        unused.len()
    ));

    lines
}

pub fn print_check_output(manifest: &Manifest) {
    for line in format_check_output(manifest) {
        println!("{}", line);
    }
}
