//! Author list formatting
//!
//! Reformats a BibTeX author field ("Last, First and Last, First" or
//! "First Last and ...") into display order. The sentinel token `others`
//! becomes "et al.", and the site owner's name is wrapped in Markdown bold so
//! the publication renderer can emphasize it.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref AND_SEPARATOR: Regex = Regex::new(r"\s+and\s+").unwrap();
    // Word-boundary, case-sensitive: "Liu" plus an "Ollie"/"Oliver" given name
    static ref OWNER_LAST: Regex = Regex::new(r"\bLiu\b").unwrap();
    static ref OWNER_FIRST: Regex = Regex::new(r"\b(Ollie|Oliver)\b").unwrap();
}

/// Format a raw BibTeX author string for display.
///
/// Authors are joined with `", "`; empty tokens are dropped.
pub fn format_authors(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    AND_SEPARATOR
        .split(raw)
        .filter_map(format_author)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format one author token, or `None` for an empty token.
fn format_author(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    if token == "others" {
        return Some("et al.".to_string());
    }

    // Detach one trailing publication asterisk before reordering, so
    // "Liu, Oliver*" keeps its marker at the end of the display name;
    // re-appended after emphasis wrapping.
    let (token, star) = match token.strip_suffix('*') {
        Some(stripped) => (stripped.trim_end(), "*"),
        None => (token, ""),
    };

    // "Last, First" reorders to "First Last"; only the first comma splits,
    // any later commas stay attached to the given-name part.
    let display = match token.split_once(',') {
        Some((last, first)) => format!("{} {}", first.trim(), last.trim()),
        None => token.to_string(),
    };
    let display = collapse_whitespace(display.trim());

    if OWNER_LAST.is_match(&display) && OWNER_FIRST.is_match(&display) {
        Some(format!("**{}**{}", display, star))
    } else {
        Some(format!("{}{}", display, star))
    }
}

/// Collapse whitespace runs into single spaces.
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(c);
            prev_was_space = false;
        }
    }
    result
}
