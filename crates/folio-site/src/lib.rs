//! folio-site: turns parsed content into a rendered personal site.
//!
//! The pipeline: load `hero.md` and `publications.bib` from a content
//! directory (concurrently, all-or-nothing), parse them with folio-markup and
//! folio-bibtex, normalize bibliography entries into publication records, and
//! render HTML fragments into a full page. Interactive behaviors (publication
//! filtering, scroll highlighting, theme toggling) are modeled as pure
//! decision logic over the same records.

pub mod authors;
pub mod error;
pub mod icons;
pub mod interact;
pub mod loader;
pub mod page;
pub mod publication;
pub mod render;
pub mod site;
pub mod theme;

pub use authors::format_authors;
pub use error::SiteError;
pub use icons::LinkKind;
pub use interact::{active_section, PubFilter, SectionAnchor};
pub use loader::{load_content, LoadError};
pub use page::render_page;
pub use publication::{map_entries, map_entry, PubType, Publication};
pub use render::{
    render_awards, render_education, render_experience, render_hero, render_publications,
    render_service, render_teaching, AwardItem, EducationItem, ExperienceItem, ServiceItem,
    TeachingItem,
};
pub use site::{assemble, build_site, SitePage, BIB_FILE, HERO_FILE};
pub use theme::{load_theme, set_theme, toggle_theme, JsonFileStore, KvStore, MemoryStore, StoreError, Theme};
