//! Site orchestration
//!
//! Loads the two content files concurrently, runs the parse → map → render
//! pipeline, and produces the page fragments. The load join is all-or-nothing
//! and isolated here, so a partial-success policy would only change this
//! module. Bibliography parse errors are best-effort: they are logged and the
//! entries that did parse are rendered.

use std::path::Path;

use folio_bibtex::parse_bibliography;
use folio_markup::{parse_front_matter, render_markdown_inline};
use tracing::{info, warn};

use crate::error::SiteError;
use crate::loader::load_content;
use crate::publication::map_entries;
use crate::render::{render_hero, render_publications};

/// Front-matter Markdown file with the hero content.
pub const HERO_FILE: &str = "hero.md";
/// BibTeX bibliography file.
pub const BIB_FILE: &str = "publications.bib";

/// The rendered page fragments, ready for assembly into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePage {
    /// Page title, from the hero's `name` field
    pub title: String,
    pub hero_html: String,
    pub publications_html: String,
}

/// Load both content files and build the page fragments.
///
/// The two loads run concurrently; a failure of either aborts the build (no
/// partial render).
pub async fn build_site(content_dir: &Path) -> Result<SitePage, SiteError> {
    let (hero_text, bib_text) = tokio::try_join!(
        load_content(content_dir, HERO_FILE),
        load_content(content_dir, BIB_FILE),
    )?;
    Ok(assemble(&hero_text, &bib_text))
}

/// Run the parse → map → render pipeline on already-loaded text.
pub fn assemble(hero_text: &str, bib_text: &str) -> SitePage {
    let hero = parse_front_matter(hero_text);

    let parsed = parse_bibliography(bib_text);
    for error in &parsed.errors {
        warn!(%error, "skipping malformed bibliography entry");
    }
    let publications = map_entries(&parsed.entries);
    info!(
        publications = publications.len(),
        errors = parsed.errors.len(),
        "content parsed"
    );

    let body_html = render_markdown_inline(&hero.body);
    SitePage {
        title: hero
            .get_text("name")
            .filter(|n| !n.is_empty())
            .unwrap_or("folio")
            .to_string(),
        hero_html: render_hero(&hero, &body_html),
        publications_html: render_publications(&publications),
    }
}
