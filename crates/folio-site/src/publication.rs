//! Publication records
//!
//! Maps parsed bibliography entries into the normalized, render-ready form.
//! The mapping is deterministic per entry; a publication has no identity of
//! its own beyond the entry it came from.

use folio_bibtex::BibEntry;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::authors::format_authors;

lazy_static! {
    // Leading "[Oral]" / "[Spotlight]" style tag on a booktitle
    static ref NOTE_TAG: Regex = Regex::new(r"^\[([^\]]+)\]").unwrap();
}

/// Publication classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PubType {
    Preprint,
    Conference,
}

impl PubType {
    /// The `data-type` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            PubType::Preprint => "preprint",
            PubType::Conference => "conference",
        }
    }
}

/// A normalized publication record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Title with literal braces stripped
    pub title: String,
    /// Display-formatted author list (may carry `**bold**` markers)
    pub authors: String,
    pub pub_type: PubType,
    /// Venue label like "NeurIPS 2024"; empty for preprints
    pub venue_short: String,
    /// True when the entry is selected for the featured filter
    pub featured: bool,
    /// Inner text of a leading `[...]` tag on the booktitle, e.g. "Oral"
    pub note: String,
    /// PDF link: arXiv abstract URL when an `arxiv` field is present,
    /// otherwise the raw `url` field
    pub pdf: String,
    pub code: String,
    pub website: String,
}

/// Map one bibliography entry to a publication record.
pub fn map_entry(entry: &BibEntry) -> Publication {
    let field = |key: &str| entry.get(key).unwrap_or("");

    let title = field("title").replace(['{', '}'], "");
    let authors = format_authors(field("author"));

    let abbr = field("abbr");
    let is_preprint = abbr == "Preprint" || (field("booktitle").is_empty() && abbr.is_empty());

    let venue_short = if !is_preprint && !abbr.is_empty() {
        let year = field("year");
        if year.is_empty() {
            abbr.to_string()
        } else {
            format!("{} {}", abbr, year)
        }
    } else {
        String::new()
    };

    let note = NOTE_TAG
        .captures(field("booktitle"))
        .map(|c| c[1].to_string())
        .unwrap_or_default();

    let pdf = if !field("arxiv").is_empty() {
        format!("https://arxiv.org/abs/{}", field("arxiv"))
    } else {
        field("url").to_string()
    };

    Publication {
        title,
        authors,
        pub_type: if is_preprint {
            PubType::Preprint
        } else {
            PubType::Conference
        },
        venue_short,
        featured: field("selected") == "true",
        note,
        pdf,
        code: field("code").to_string(),
        website: field("website").to_string(),
    }
}

/// Map a batch of entries, preserving source order.
pub fn map_entries(entries: &[BibEntry]) -> Vec<Publication> {
    entries.iter().map(map_entry).collect()
}
