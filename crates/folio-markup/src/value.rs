//! Scalar value parsing for front-matter fields.

use serde::{Deserialize, Serialize};

/// A scalar front-matter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Text(String),
}

impl Scalar {
    /// The text content, if this is a text scalar.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            Scalar::Bool(_) => None,
        }
    }

    /// The boolean, if this is a boolean scalar.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            Scalar::Text(_) => None,
        }
    }
}

/// Parse a raw scalar token.
///
/// Trims, strips a ` #` inline comment when the value is unquoted, recognizes
/// literal `true`/`false`, and removes one layer of matching single or double
/// quotes (no escape processing). Anything else comes back as trimmed text.
pub fn parse_scalar(raw: &str) -> Scalar {
    let mut raw = raw.trim();

    // Inline comments only apply outside quotes
    if !raw.starts_with('"') && !raw.starts_with('\'') {
        if let Some(idx) = raw.find(" #") {
            raw = raw[..idx].trim_end();
        }
    }

    match raw {
        "true" => return Scalar::Bool(true),
        "false" => return Scalar::Bool(false),
        _ => {}
    }

    if raw.len() >= 2
        && ((raw.starts_with('"') && raw.ends_with('"'))
            || (raw.starts_with('\'') && raw.ends_with('\'')))
    {
        return Scalar::Text(raw[1..raw.len() - 1].to_string());
    }

    Scalar::Text(raw.to_string())
}
