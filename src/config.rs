//! Project configuration.
//!
//! Settings live in an optional `proverbs.toml` at the project root. Every
//! key has a default, so the file only needs the values you want to change:
//!
//! ```toml
//! proverbs_dir = "proverbs"               # <root>/<proverbs_dir>/<group>/<title>.html
//! images_dir = "images"                   # <root>/<images_dir>/<title>.<ext>
//! template_file = "_proverb_template.md"  # scaffold template for `new`
//!
//! [document]
//! title = "Proverbs"
//! # intro = "A paragraph under the title."
//!
//! [scaffold]
//! title = "Some Title"
//! tags = "general,code-design"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "proverbs.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory (one segment, relative to the root) holding group folders.
    pub proverbs_dir: String,
    /// Directory (one segment, relative to the root) holding images.
    pub images_dir: String,
    /// Scaffold template path, relative to the root.
    pub template_file: String,
    pub document: DocumentConfig,
    pub scaffold: ScaffoldConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            proverbs_dir: "proverbs".to_string(),
            images_dir: "images".to_string(),
            template_file: "_proverb_template.md".to_string(),
            document: DocumentConfig::default(),
            scaffold: ScaffoldConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_single_segment("proverbs_dir", &self.proverbs_dir)?;
        check_single_segment("images_dir", &self.images_dir)?;
        if self.template_file.is_empty() {
            return Err(ConfigError::Validation(
                "template_file must not be empty".into(),
            ));
        }
        if self.document.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "document.title must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Snippet paths are decoded by segment count, so the content directories
/// must be exactly one plain path segment.
fn check_single_segment(key: &str, value: &str) -> Result<(), ConfigError> {
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(ConfigError::Validation(format!(
            "{key} must be a single directory name, got {value:?}"
        ))),
    }
}

/// Header settings for the generated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentConfig {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: "Proverbs".to_string(),
            intro: None,
        }
    }
}

/// Fallbacks for `new` when `--title` / `--tags` are not given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    pub title: String,
    /// Comma separated, split the same way as `--tags`.
    pub tags: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            title: "Some Title".to_string(),
            tags: "general,code-design".to_string(),
        }
    }
}

/// Load `proverbs.toml` from `root`, falling back to defaults when the file
/// does not exist.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// A fully-commented stock `proverbs.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# proverb-gen configuration
# =========================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Directory holding one folder per group. Snippet files live at
#   <proverbs_dir>/<group>/<title>|<tag>,<tag>.html
# Must be a single directory name.
proverbs_dir = "proverbs"

# Directory holding images. An image is attached to the snippet whose title
# matches the part of its filename before "|":
#   <images_dir>/<title>|<alt text>.png
# Must be a single directory name. It may be missing.
images_dir = "images"

# Template used by `proverb-gen new` to scaffold a snippet.
# Available variables: title (string), tags (list of strings).
template_file = "_proverb_template.md"

# ---------------------------------------------------------------------------
# Generated document
# ---------------------------------------------------------------------------
[document]
# Top-level heading.
title = "Proverbs"

# Optional paragraph printed under the heading.
# intro = "A collection of proverbs."

# ---------------------------------------------------------------------------
# Scaffold defaults (used when --title / --tags are not given)
# ---------------------------------------------------------------------------
[scaffold]
title = "Some Title"
tags = "general,code-design"
"##
}
