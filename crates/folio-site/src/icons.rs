//! Link icons
//!
//! An explicit mapping from link kinds to inline SVG, keyed by the exact
//! label strings the front matter uses. Unknown labels render without an
//! icon.

const ICON_SCHOLAR: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor"><path d="M12 3L1 9l4 2.18v6L12 21l7-3.82v-6l2-1.09V17h2V9L12 3zm6.82 6L12 12.72 5.18 9 12 5.28 18.82 9zM17 15.99l-5 2.73-5-2.73v-3.72L12 15l5-2.73v3.72z"/></svg>"#;

const ICON_GITHUB: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor"><path d="M12 0C5.37 0 0 5.37 0 12c0 5.31 3.435 9.795 8.205 11.385.6.105.825-.255.825-.57 0-.285-.015-1.23-.015-2.235-3.015.555-3.795-.735-4.035-1.41-.135-.345-.72-1.41-1.23-1.695-.42-.225-1.02-.78-.015-.795.945-.015 1.62.87 1.845 1.23 1.08 1.815 2.805 1.305 3.495.99.105-.78.42-1.305.765-1.605-2.67-.3-5.46-1.335-5.46-5.925 0-1.305.465-2.385 1.23-3.225-.12-.3-.54-1.53.12-3.18 0 0 1.005-.315 3.3 1.23.96-.27 1.98-.405 3-.405s2.04.135 3 .405c2.295-1.56 3.3-1.23 3.3-1.23.66 1.65.24 2.88.12 3.18.765.84 1.23 1.905 1.23 3.225 0 4.605-2.805 5.625-5.475 5.925.435.375.81 1.095.81 2.22 0 1.605-.015 2.895-.015 3.3 0 .315.225.69.825.57A12.02 12.02 0 0 0 24 12c0-6.63-5.37-12-12-12z"/></svg>"#;

const ICON_TWITTER: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor"><path d="M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z"/></svg>"#;

/// Kinds of hero links that carry an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    GoogleScholar,
    GitHub,
    Twitter,
}

impl LinkKind {
    /// Resolve a front-matter link label to a kind.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Google Scholar" => Some(Self::GoogleScholar),
            "GitHub" => Some(Self::GitHub),
            "X / Twitter" => Some(Self::Twitter),
            _ => None,
        }
    }

    /// Inline SVG markup for this kind.
    pub fn icon_svg(&self) -> &'static str {
        match self {
            Self::GoogleScholar => ICON_SCHOLAR,
            Self::GitHub => ICON_GITHUB,
            Self::Twitter => ICON_TWITTER,
        }
    }
}

/// Icon markup for a label, or empty when the label has no icon.
pub fn icon_for_label(label: &str) -> &'static str {
    LinkKind::from_label(label)
        .map(|kind| kind.icon_svg())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_resolve() {
        assert_eq!(LinkKind::from_label("GitHub"), Some(LinkKind::GitHub));
        assert_eq!(
            LinkKind::from_label("Google Scholar"),
            Some(LinkKind::GoogleScholar)
        );
        assert_eq!(LinkKind::from_label("X / Twitter"), Some(LinkKind::Twitter));
    }

    #[test]
    fn unknown_labels_get_no_icon() {
        assert_eq!(LinkKind::from_label("Email"), None);
        assert_eq!(icon_for_label("Email"), "");
    }

    #[test]
    fn icons_are_svg() {
        assert!(icon_for_label("GitHub").starts_with("<svg"));
    }
}
