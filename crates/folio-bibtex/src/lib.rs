//! BibTeX parsing and formatting for folio
//!
//! A deliberately small BibTeX reader: it scans `@type{key, ...}` blocks with
//! brace-depth matching and splits each body into a case-folded field map. No
//! @string macros, no concatenation, no LaTeX decoding — bibliography files
//! for a personal site don't use them.

mod entry;
mod formatter;
pub mod parser;

pub use entry::BibEntry;
pub use formatter::{format_entries, format_entry};
pub use parser::{parse_bibliography, parse_fields, BibParseError, BibParseResult};
