//! Interactive behavior decision logic
//!
//! The page's two behaviors — publication filtering and scroll-based nav
//! highlighting — reduced to pure functions over records. The host page wires
//! DOM events to these decisions; nothing here touches rendering.

use serde::{Deserialize, Serialize};

use crate::publication::{PubType, Publication};

/// Publication filter selected by the filter buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PubFilter {
    All,
    Featured,
    Preprint,
    Conference,
}

impl PubFilter {
    /// Parse a `data-filter` attribute value.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "featured" => Some(Self::Featured),
            "preprint" => Some(Self::Preprint),
            "conference" => Some(Self::Conference),
            _ => None,
        }
    }

    /// The `data-filter` attribute value.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Featured => "featured",
            Self::Preprint => "preprint",
            Self::Conference => "conference",
        }
    }

    /// Whether a publication stays visible under this filter.
    pub fn matches(&self, publication: &Publication) -> bool {
        match self {
            Self::All => true,
            Self::Featured => publication.featured,
            Self::Preprint => publication.pub_type == PubType::Preprint,
            Self::Conference => publication.pub_type == PubType::Conference,
        }
    }
}

/// Hidden-state flags for a publication list under a filter, in item order.
pub fn hidden_states(filter: PubFilter, publications: &[Publication]) -> Vec<bool> {
    publications.iter().map(|p| !filter.matches(p)).collect()
}

/// A page section's anchor id and its vertical offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionAnchor {
    pub id: String,
    pub top: i64,
}

/// Lead-in before a section's top at which it becomes the active one.
const SCROLL_LEAD_PX: i64 = 100;

/// The nav link to highlight for a scroll position: the last section (in page
/// order) whose top, less the lead-in, has been passed. `None` above the
/// first section.
pub fn active_section(scroll_y: i64, sections: &[SectionAnchor]) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if scroll_y >= section.top - SCROLL_LEAD_PX {
            current = Some(section.id.as_str());
        }
    }
    current
}
