//! Error types for folio-site

use thiserror::Error;

use crate::loader::LoadError;
use crate::theme::StoreError;

/// Failures that abort a site build.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A content file could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The theme store could not be read or written
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The output file could not be written
    #[error("failed to write {name}: {source}")]
    Write {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
