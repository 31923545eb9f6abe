//! Thin wrapper over Tera shared by the document and scaffold renderers.
//!
//! Parsing and rendering are separate steps so a broken template is reported
//! as a parse error before any data is involved. Autoescaping is off for every
//! template: snippet content is trusted HTML and must come out verbatim.
//! Values placed inside a double-quoted attribute go through the `attr`
//! filter instead.

use serde::Serialize;
use std::collections::HashMap;
use std::error::Error as _;
use tera::{Context, Tera, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("could not parse template {name}: {cause}")]
    Parse {
        name: String,
        cause: String,
        #[source]
        source: tera::Error,
    },
    #[error("could not render template {name}: {cause}")]
    Render {
        name: String,
        cause: String,
        #[source]
        source: tera::Error,
    },
}

/// A single parsed template.
pub struct TemplateRenderer {
    tera: Tera,
    name: String,
}

impl TemplateRenderer {
    pub fn from_source(name: &str, source: &str) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.register_filter("attr", attr_filter);
        tera.add_raw_template(name, source)
            .map_err(|source| TemplateError::Parse {
                name: name.to_string(),
                cause: cause_chain(&source),
                source,
            })?;
        Ok(Self {
            tera,
            name: name.to_string(),
        })
    }

    /// Render with `data` as the context. `data` must serialize to a map;
    /// its top-level fields become template variables.
    pub fn render<T: Serialize>(&self, data: &T) -> Result<String, TemplateError> {
        let render_err = |source: tera::Error| TemplateError::Render {
            name: self.name.clone(),
            cause: cause_chain(&source),
            source,
        };
        let context = Context::from_serialize(data).map_err(render_err)?;
        self.tera.render(&self.name, &context).map_err(render_err)
    }
}

/// Escape a string for use inside a double-quoted HTML attribute.
fn attr_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("attr filter expects a string"))?;
    Ok(Value::String(
        html_escape::encode_quoted_attribute(text).into_owned(),
    ))
}

/// Tera's top-level message is often just "Failed to render 'x'"; the useful
/// part sits further down the source chain.
fn cause_chain(err: &tera::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut current = err.source();
    while let Some(inner) = current {
        parts.push(inner.to_string());
        current = inner.source();
    }
    parts.join(": ")
}
