//! Front-matter reading
//!
//! Reads documents of the form `---\n<meta>\n---\n<body>`. The metadata block
//! is a restricted YAML shape: top-level scalar keys, plus list-valued keys
//! whose items are flat maps (`links` in practice). When no block is present
//! the whole text is the body and the meta map is empty.
//!
//! Line shapes outside this grammar are ignored, not errors — a stray line in
//! a hand-edited hero file should never take the page down.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value::{parse_scalar, Scalar};

/// A front-matter value: a scalar, or a list of flat maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Scalar(Scalar),
    List(Vec<HashMap<String, Scalar>>),
}

/// One element of the `links` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    pub label: String,
    pub url: String,
    /// `"primary"` selects the filled button treatment
    pub style: Option<String>,
}

/// Parsed front-matter: the metadata map plus the trimmed body text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrontMatter {
    pub meta: HashMap<String, MetaValue>,
    pub body: String,
}

impl FrontMatter {
    /// Text value of a scalar key.
    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.meta.get(key)? {
            MetaValue::Scalar(s) => s.as_text(),
            MetaValue::List(_) => None,
        }
    }

    /// Boolean value of a scalar key.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.meta.get(key)? {
            MetaValue::Scalar(s) => s.as_bool(),
            MetaValue::List(_) => None,
        }
    }

    /// The `links` list as typed items. Items missing `label` or `url` get
    /// empty strings; non-text `style` values are dropped.
    pub fn links(&self) -> Vec<LinkItem> {
        let Some(MetaValue::List(items)) = self.meta.get("links") else {
            return Vec::new();
        };
        items
            .iter()
            .map(|item| {
                let text = |key: &str| {
                    item.get(key)
                        .and_then(Scalar::as_text)
                        .unwrap_or_default()
                        .to_string()
                };
                LinkItem {
                    label: text("label"),
                    url: text("url"),
                    style: item.get("style").and_then(Scalar::as_text).map(String::from),
                }
            })
            .collect()
    }
}

/// Parse a document with an optional leading front-matter block.
pub fn parse_front_matter(text: &str) -> FrontMatter {
    let Some((meta_text, body)) = split_front_matter(text) else {
        return FrontMatter {
            meta: HashMap::new(),
            body: text.to_string(),
        };
    };

    let mut meta: HashMap<String, MetaValue> = HashMap::new();
    // Key whose list is currently accepting `- ` items
    let mut current_key: Option<String> = None;
    // Key of the list whose last item is still open for continuation lines
    let mut open_item: Option<String> = None;

    for line in meta_text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let starts_word = line
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');

        if starts_word && line.contains(": ") {
            // Scalar key: "name: Ollie Liu"
            let (key, raw) = split_first(line, ": ");
            let key = key.trim().to_string();
            meta.insert(key.clone(), MetaValue::Scalar(parse_scalar(raw)));
            current_key = Some(key);
        } else if starts_word && trimmed.ends_with(':') {
            // List key with no inline value: "links:"
            let key = trimmed[..trimmed.len() - 1].to_string();
            meta.insert(key.clone(), MetaValue::List(Vec::new()));
            current_key = Some(key);
        } else if let Some(rest) = line.strip_prefix("  - ") {
            // List item under the current key
            let Some(key) = current_key.as_ref() else {
                continue;
            };
            if let Some(MetaValue::List(items)) = meta.get_mut(key) {
                let mut item = HashMap::new();
                if rest.contains(": ") {
                    let (field, raw) = split_first(rest, ": ");
                    item.insert(field.trim().to_string(), parse_scalar(raw));
                }
                items.push(item);
                open_item = Some(key.clone());
            }
        } else if line.starts_with("    ") && line[4..].starts_with(|c: char| !c.is_whitespace()) {
            // Continuation field of the open list item
            let Some(key) = open_item.as_ref() else {
                continue;
            };
            if trimmed.contains(": ") {
                let (field, raw) = split_first(trimmed, ": ");
                if let Some(MetaValue::List(items)) = meta.get_mut(key) {
                    if let Some(item) = items.last_mut() {
                        item.insert(field.trim().to_string(), parse_scalar(raw));
                    }
                }
            }
        }
        // Any other line shape is ignored
    }

    FrontMatter {
        meta,
        body: body.trim().to_string(),
    }
}

/// Split off the metadata block: text must start with `---\n` and contain a
/// later line starting with `---`.
fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix("---\n")?;
    let end = rest.find("\n---")?;
    Some((&rest[..end], &rest[end + 4..]))
}

/// Split at the first occurrence of `sep`.
fn split_first<'a>(s: &'a str, sep: &str) -> (&'a str, &'a str) {
    match s.find(sep) {
        Some(idx) => (&s[..idx], &s[idx + sep.len()..]),
        None => (s, ""),
    }
}
