//! HTML escaping for plain-text fields.

/// Escape `&`, `<`, `>`, and `"` for use in HTML text or attribute values.
///
/// Replacement is sequential with `&` first, so applying it to already
/// escaped text re-escapes the entities. Callers escape exactly once.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
