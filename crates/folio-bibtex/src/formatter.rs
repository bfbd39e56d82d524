//! BibTeX formatting
//!
//! Serializes entries back to BibTeX text. Fields are written in sorted key
//! order (the entry holds a map, so source order is gone by this point);
//! parsing the output recovers the same field map.

use crate::entry::BibEntry;

/// Format a single entry as BibTeX text.
pub fn format_entry(entry: &BibEntry) -> String {
    let mut result = String::new();
    result.push('@');
    result.push_str(&entry.entry_type);
    result.push('{');
    result.push_str(&entry.cite_key);
    result.push_str(",\n");

    let mut keys: Vec<&String> = entry.fields.keys().collect();
    keys.sort();
    for key in keys {
        result.push_str("    ");
        result.push_str(key);
        result.push_str(" = ");
        result.push_str(&format_field_value(&entry.fields[key]));
        result.push_str(",\n");
    }

    result.push('}');
    result
}

/// Format multiple entries separated by blank lines.
pub fn format_entries(entries: &[BibEntry]) -> String {
    entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Purely numeric values go bare; everything else is braced, which preserves
/// nested braces as-is.
fn format_field_value(value: &str) -> String {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        return value.to_string();
    }
    format!("{{{}}}", value)
}
