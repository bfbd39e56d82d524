//! Restricted inline Markdown rendering
//!
//! Supports exactly what the hero copy uses: `**bold**` spans, `[text](url)`
//! links, and blank-line paragraph breaks. Substitution is single-pass and
//! non-recursive; overlapping or nested markers are not specially handled.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\n+").unwrap();
    static ref BOLD: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();
}

/// Render the inline Markdown subset to HTML.
///
/// Paragraphs are joined with `</p><p>`; the caller supplies the outer
/// paragraph tags. Text is not HTML-escaped here — hero copy is trusted
/// content, and escaping it would break the generated markup.
pub fn render_markdown_inline(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    PARAGRAPH_BREAK
        .split(text)
        .map(|para| {
            let para = para.trim();
            let para = BOLD.replace_all(para, "<strong>$1</strong>");
            LINK.replace_all(&para, r#"<a href="$2">$1</a>"#).into_owned()
        })
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("</p><p>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_and_link_in_separate_paragraphs() {
        let html = render_markdown_inline("Hi **there**\n\nSecond [link](http://x)");
        assert_eq!(
            html,
            r#"Hi <strong>there</strong></p><p>Second <a href="http://x">link</a>"#
        );
    }

    #[test]
    fn bold_applied_before_links() {
        let html = render_markdown_inline("**[both](http://x)**");
        assert_eq!(
            html,
            r#"<strong><a href="http://x">both</a></strong>"#
        );
    }

    #[test]
    fn multiple_bold_spans_non_greedy() {
        let html = render_markdown_inline("**a** and **b**");
        assert_eq!(html, "<strong>a</strong> and <strong>b</strong>");
    }

    #[test]
    fn runs_of_blank_lines_make_one_break() {
        let html = render_markdown_inline("one\n\n\n\ntwo");
        assert_eq!(html, "one</p><p>two");
    }

    #[test]
    fn single_newline_is_not_a_paragraph_break() {
        let html = render_markdown_inline("line one\nline two");
        assert_eq!(html, "line one\nline two");
    }

    #[test]
    fn empty_paragraphs_dropped() {
        let html = render_markdown_inline("  \n\nonly");
        assert_eq!(html, "only");
    }

    #[test]
    fn empty_input() {
        assert_eq!(render_markdown_inline(""), "");
    }
}
