//! folio-markup: front-matter reading and restricted inline Markdown.
//!
//! Covers the two text shapes a folio content directory uses besides BibTeX:
//! - Markdown documents with a leading `---`-delimited metadata block, where
//!   values are scalars plus one list-of-maps shape (`links`);
//! - a restricted inline Markdown subset (`**bold**`, `[text](url)`,
//!   blank-line paragraph breaks).
//!
//! Plus the HTML escaping used by every renderer.

pub mod escape;
pub mod frontmatter;
pub mod markdown;
pub mod value;

pub use escape::escape_html;
pub use frontmatter::{parse_front_matter, FrontMatter, LinkItem, MetaValue};
pub use markdown::render_markdown_inline;
pub use value::{parse_scalar, Scalar};
