//! BibTeX scanner and field parser
//!
//! Two layers:
//! - the entry scanner walks the whole bibliography text looking for
//!   `@type{key,` headers (nom) and consumes each entry body with brace-depth
//!   matching;
//! - the field parser splits one entry body into `key = value` pairs, where a
//!   value is braced (nesting allowed), quoted, or a bare token.
//!
//! Malformed text between entries is skipped. Structural failures that would
//! otherwise be swallowed — an unbalanced entry body, a header with an empty
//! cite key — are reported in `BibParseResult::errors` with the byte offset
//! where the entry started.

use std::collections::HashMap;

use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace0},
    IResult,
};
use tracing::debug;

use crate::entry::BibEntry;

/// A structural problem found while scanning a bibliography.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("bibtex parse error at offset {offset}: {message}")]
pub struct BibParseError {
    /// Byte offset of the `@` that opened the offending entry
    pub offset: usize,
    pub message: String,
}

/// Result of scanning a bibliography: the entries that parsed, in source
/// order, plus any structural errors encountered along the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BibParseResult {
    pub entries: Vec<BibEntry>,
    pub errors: Vec<BibParseError>,
}

impl BibParseResult {
    /// True when scanning finished without structural errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Scan a full bibliography text for entries.
///
/// Entries are emitted in source order. Text that is not part of a
/// recognizable `@type{key,` header is skipped without error; an entry whose
/// body never closes its braces consumes the rest of the text, emits no
/// entry, and is reported in `errors`.
pub fn parse_bibliography(input: &str) -> BibParseResult {
    let mut result = BibParseResult::default();
    let mut pos = 0;

    while let Some(found) = input[pos..].find('@') {
        let at = pos + found;
        let (rest, entry_type, cite_key) = match entry_header(&input[at..]) {
            Ok((rest, (entry_type, cite_key))) => (rest, entry_type, cite_key),
            Err(_) => {
                debug!(offset = at, "skipping '@' that is not an entry header");
                pos = at + 1;
                continue;
            }
        };

        // Body starts right after the header's comma, at depth 1.
        let body_start = input.len() - rest.len();
        let Some(body_len) = balanced_body_len(rest) else {
            result.errors.push(BibParseError {
                offset: at,
                message: "unterminated entry body (unbalanced braces)".to_string(),
            });
            break;
        };

        let cite_key = cite_key.trim();
        if cite_key.is_empty() {
            result.errors.push(BibParseError {
                offset: at,
                message: "entry header has an empty cite key".to_string(),
            });
        } else {
            let mut entry = BibEntry::new(entry_type, cite_key);
            entry.fields = parse_fields(&rest[..body_len]);
            result.entries.push(entry);
        }

        // Skip past the closing brace of this entry.
        pos = body_start + body_len + 1;
    }

    result
}

/// Parse an `@type{key,` entry header.
fn entry_header(input: &str) -> IResult<&str, (&str, &str)> {
    let (rest, _) = char('@')(input)?;
    let (rest, entry_type) =
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('{')(rest)?;
    let (rest, cite_key) = take_while(|c: char| c != ',')(rest)?;
    let (rest, _) = char(',')(rest)?;
    Ok((rest, (entry_type, cite_key)))
}

/// Length of the entry body in `input`, assuming scanning starts at brace
/// depth 1. The returned span excludes the closing brace. `None` when the
/// braces never balance.
fn balanced_body_len(input: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, b) in input.bytes().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse the `key = value` pairs inside one entry body.
///
/// Keys are case-folded; a duplicate key overwrites the earlier value. A
/// braced value whose closing brace is missing takes the remaining body text
/// as its value — the scanner has already guaranteed the outer braces
/// balance, so this only happens when parsing a body in isolation.
pub fn parse_fields(body: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    let bytes = body.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        // Skip whitespace and commas between fields
        while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b',') {
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }

        // Read key up to '=', whitespace, '}' or ','
        let key_start = i;
        while i < bytes.len()
            && bytes[i] != b'='
            && bytes[i] != b','
            && bytes[i] != b'}'
            && !bytes[i].is_ascii_whitespace()
        {
            i += 1;
        }
        let key = body[key_start..i].trim().to_lowercase();
        if key.is_empty() {
            break;
        }

        // Skip to '='; a key without one is dropped
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() || bytes[i] != b'=' {
            continue;
        }
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }

        let value = match bytes[i] {
            b'{' => {
                i += 1;
                let mut depth = 1usize;
                let val_start = i;
                while i < bytes.len() && depth > 0 {
                    match bytes[i] {
                        b'{' => depth += 1,
                        b'}' => depth -= 1,
                        _ => {}
                    }
                    if depth > 0 {
                        i += 1;
                    }
                }
                let value = body[val_start..i].to_string();
                i += 1; // closing }
                value
            }
            b'"' => {
                i += 1;
                let val_start = i;
                while i < bytes.len() && bytes[i] != b'"' {
                    // An escaped quote does not terminate the value
                    if bytes[i] == b'\\' && i + 1 < bytes.len() {
                        i += 1;
                    }
                    i += 1;
                }
                let value = body[val_start..i].to_string();
                i += 1; // closing "
                value
            }
            _ => {
                let val_start = i;
                while i < bytes.len() && bytes[i] != b',' && bytes[i] != b'}' {
                    i += 1;
                }
                body[val_start..i].trim().to_string()
            }
        };

        fields.insert(key, value);
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parse_simple_entry() {
        let input = r#"
@article{Smith2024,
    author = {John Smith},
    title = {A Great Paper},
    year = {2024},
}
"#;
        let result = parse_bibliography(input);
        assert!(result.is_clean());
        assert_eq!(result.entries.len(), 1);

        let entry = &result.entries[0];
        assert_eq!(entry.entry_type, "article");
        assert_eq!(entry.cite_key, "Smith2024");
        assert_eq!(entry.author(), Some("John Smith"));
        assert_eq!(entry.title(), Some("A Great Paper"));
        assert_eq!(entry.year(), Some("2024"));
    }

    #[test]
    fn parse_multiple_entries_in_source_order() {
        let input = r#"
@inproceedings{First2024, title = {First}}
@misc{Second2024, title = {Second}}
"#;
        let result = parse_bibliography(input);
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[0].cite_key, "First2024");
        assert_eq!(result.entries[1].cite_key, "Second2024");
    }

    #[rstest]
    #[case("title = {value}", "value")]
    #[case(r#"title = "value""#, "value")]
    #[case("title = value", "value")]
    #[case("title = {a {nested} value}", "a {nested} value")]
    #[case("title = {Smith, {J.}}", "Smith, {J.}")]
    #[case("title = {a {{deeply {nested}}} one}", "a {{deeply {nested}}} one")]
    fn field_value_forms(#[case] body: &str, #[case] expected: &str) {
        let fields = parse_fields(body);
        assert_eq!(fields.get("title").map(String::as_str), Some(expected));
    }

    #[test]
    fn field_keys_case_folded() {
        let fields = parse_fields("Title = {X}, YEAR = 2024");
        assert_eq!(fields.get("title").map(String::as_str), Some("X"));
        assert_eq!(fields.get("year").map(String::as_str), Some("2024"));
    }

    #[test]
    fn duplicate_key_last_wins() {
        let fields = parse_fields("year = {2023}, year = {2024}");
        assert_eq!(fields.get("year").map(String::as_str), Some("2024"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn bare_value_stops_at_comma() {
        let fields = parse_fields("year = 2024, month = 6");
        assert_eq!(fields.get("year").map(String::as_str), Some("2024"));
        assert_eq!(fields.get("month").map(String::as_str), Some("6"));
    }

    #[test]
    fn escaped_quote_does_not_terminate() {
        let fields = parse_fields(r#"title = "say \"hi\" now""#);
        assert_eq!(
            fields.get("title").map(String::as_str),
            Some(r#"say \"hi\" now"#)
        );
    }

    #[test]
    fn unterminated_brace_takes_rest_of_body() {
        let fields = parse_fields("title = {never closed, year = 2024");
        assert_eq!(
            fields.get("title").map(String::as_str),
            Some("never closed, year = 2024")
        );
        assert!(!fields.contains_key("year"));
    }

    #[test]
    fn text_between_entries_is_skipped() {
        let input = r#"
Some stray prose, even with an email@example.com in it.
@misc{Only2024, title = {Kept}}
trailing junk
"#;
        let result = parse_bibliography(input);
        assert!(result.is_clean());
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].cite_key, "Only2024");
    }

    #[test]
    fn header_without_comma_emits_nothing() {
        let result = parse_bibliography("@misc{NoComma}");
        assert!(result.entries.is_empty());
        assert!(result.is_clean());
    }

    #[test]
    fn unbalanced_braces_reported_as_error() {
        let input = "@article{Broken2024, title = {never closed";
        let result = parse_bibliography(input);
        assert!(result.entries.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].offset, 0);
        assert!(result.errors[0].message.contains("unbalanced"));
    }

    #[test]
    fn empty_cite_key_reported_as_error() {
        let input = "@article{ , title = {X}}\n@misc{Good, title = {Y}}";
        let result = parse_bibliography(input);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].cite_key, "Good");
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].message.contains("cite key"));
    }

    #[test]
    fn nested_braces_inside_entry_body() {
        let input = "@article{K, title = {The {LaTeX} Guide}, year = {2024}}";
        let result = parse_bibliography(input);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].title(), Some("The {LaTeX} Guide"));
        assert_eq!(result.entries[0].year(), Some("2024"));
    }
}
