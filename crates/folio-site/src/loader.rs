//! Content loading
//!
//! Reads named text files from the content directory. Each load is an
//! independent future; the orchestrator decides how failures combine.

use std::path::Path;

use tracing::debug;

/// A content file that could not be loaded. Carries the file name so the
/// top-level log line says which one.
#[derive(Debug, thiserror::Error)]
#[error("failed to load {name}: {source}")]
pub struct LoadError {
    pub name: String,
    #[source]
    pub source: std::io::Error,
}

/// Load one named file from the content directory as text.
pub async fn load_content(content_dir: &Path, name: &str) -> Result<String, LoadError> {
    let path = content_dir.join(name);
    debug!(path = %path.display(), "loading content file");
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| LoadError {
            name: name.to_string(),
            source,
        })
}
