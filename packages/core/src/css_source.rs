//! CSS source
//!
//! What a consumer presents to the registry: raw CSS written against the
//! scope marker, or a descriptor produced by a build step whose `styles`
//! are already scoped.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, ScopeError};

/// Separator used by the build step's tagged text form
/// `<id>||KREMLING||<namespace>||KREMLING||<styles>`.
pub const TAGGED_DELIMITER: &str = "||KREMLING||";

/// Precomputed styles emitted by a build step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssDescriptor {
    pub id: String,
    pub styles: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl CssDescriptor {
    pub fn new(id: impl Into<String>, styles: impl Into<String>) -> Self {
        CssDescriptor {
            id: id.into(),
            styles: styles.into(),
            namespace: None,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssSource {
    Raw(String),
    Precomputed(CssDescriptor),
}

impl CssSource {
    /// The registry key. Textually identical CSS shares one resource no
    /// matter where it comes from.
    pub fn cache_key(&self) -> &str {
        match self {
            CssSource::Raw(css) => css,
            CssSource::Precomputed(descriptor) => &descriptor.styles,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, CssSource::Raw(_))
    }

    /// Namespace carried by the source itself, if any.
    pub fn namespace(&self) -> Option<&str> {
        match self {
            CssSource::Raw(_) => None,
            CssSource::Precomputed(descriptor) => descriptor.namespace.as_deref(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            CssSource::Raw(_) => Ok(()),
            CssSource::Precomputed(descriptor) if descriptor.id.is_empty() => {
                Err(ScopeError::invalid_input(
                    "precomputed css requires a non-empty \"id\"",
                ))
            }
            CssSource::Precomputed(_) => Ok(()),
        }
    }

    /// Accept either a JSON string (raw CSS) or a `{ id, styles, namespace? }`
    /// object as written by the build step.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(css) => Ok(CssSource::Raw(css.clone())),
            Value::Object(map) => {
                let id = match map.get("id") {
                    Some(Value::String(id)) if !id.is_empty() => id.clone(),
                    _ => {
                        return Err(ScopeError::invalid_input(
                            "precomputed css requires a non-empty \"id\"",
                        ))
                    }
                };
                let styles = match map.get("styles") {
                    Some(Value::String(styles)) => styles.clone(),
                    _ => {
                        return Err(ScopeError::invalid_input(
                            "precomputed css requires a string \"styles\"",
                        ))
                    }
                };
                let namespace = match map.get("namespace") {
                    Some(Value::String(ns)) => Some(ns.clone()),
                    _ => None,
                };
                Ok(CssSource::Precomputed(CssDescriptor {
                    id,
                    styles,
                    namespace,
                }))
            }
            other => Err(ScopeError::invalid_input(format!(
                "expected a css string or a {{ id, styles }} object, got {}",
                json_kind(other)
            ))),
        }
    }

    /// Decode the tagged text form. Anything that does not carry all three
    /// non-empty parts is treated as raw CSS.
    pub fn from_tagged(text: &str) -> Self {
        let mut parts = text.split(TAGGED_DELIMITER);
        if let (Some(id), Some(namespace), Some(styles)) = (parts.next(), parts.next(), parts.next())
        {
            if !id.is_empty() && !namespace.is_empty() && !styles.is_empty() {
                return CssSource::Precomputed(
                    CssDescriptor::new(id, styles).with_namespace(namespace),
                );
            }
        }
        CssSource::Raw(text.to_string())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<&str> for CssSource {
    fn from(css: &str) -> Self {
        CssSource::Raw(css.to_string())
    }
}

impl From<String> for CssSource {
    fn from(css: String) -> Self {
        CssSource::Raw(css)
    }
}

impl From<CssDescriptor> for CssSource {
    fn from(descriptor: CssDescriptor) -> Self {
        CssSource::Precomputed(descriptor)
    }
}
