//! Theme persistence
//!
//! The page theme is one key in a small key-value store. The store is a
//! capability trait so the page pipeline never touches storage directly; the
//! JSON-file store backs the CLI, the in-memory store backs tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Storage key for the persisted theme.
pub const THEME_KEY: &str = "theme";

/// Store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Page color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The persisted / `data-theme` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value; anything but `"dark"` is light.
    pub fn from_saved(value: &str) -> Self {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Minimal key-value persistence capability.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and throwaway runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A key-value store persisted as a flat JSON object on disk.
///
/// Writes go straight through on every `set`; a missing file on open is an
/// empty store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no store file yet, starting empty");
                HashMap::new()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, values })
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        std::fs::write(&self.path, serde_json::to_string_pretty(&self.values)?)?;
        Ok(())
    }
}

/// Read the persisted theme, defaulting to light.
pub fn load_theme(store: &dyn KvStore) -> Theme {
    store
        .get(THEME_KEY)
        .map(|v| Theme::from_saved(&v))
        .unwrap_or_default()
}

/// Persist a theme choice.
pub fn set_theme(store: &mut dyn KvStore, theme: Theme) -> Result<(), StoreError> {
    store.set(THEME_KEY, theme.as_str())
}

/// Flip the persisted theme and return the new value.
pub fn toggle_theme(store: &mut dyn KvStore) -> Result<Theme, StoreError> {
    let next = load_theme(store).toggled();
    set_theme(store, next)?;
    Ok(next)
}
