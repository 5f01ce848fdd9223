//! Persisted calendar preferences (view mode and split ratio).
//!
//! Stores are plain string key/value maps; typed accessors live on
//! [`CalendarPreferences`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{SplitBounds, ViewMode};

pub const VIEW_MODE_KEY: &str = "calendar.viewMode";
pub const SPLIT_RATIO_KEY: &str = "calendar.splitRatio";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to read preferences file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write preferences file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("preferences file {path} is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`PreferenceError`] if the backing storage cannot be updated.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// JSON-object file store. Every `set` rewrites the whole file.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::Read`] or [`PreferenceError::Parse`] if an
    /// existing file cannot be loaded.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| PreferenceError::Parse {
                    path: path.display().to_string(),
                    source: e,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(PreferenceError::Read {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };
        Ok(Self { path, values })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), PreferenceError> {
        let write_err = |e| PreferenceError::Write {
            path: self.path.display().to_string(),
            source: e,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let body = serde_json::to_string_pretty(&self.values).map_err(|e| {
            PreferenceError::Write {
                path: self.path.display().to_string(),
                source: std::io::Error::other(e),
            }
        })?;
        std::fs::write(&self.path, body).map_err(write_err)
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.persist()
    }
}

/// Typed access to the calendar's fixed preference keys.
///
/// Unparseable stored values read as absent rather than failing the screen.
pub struct CalendarPreferences<S> {
    store: S,
}

impl<S: PreferenceStore> CalendarPreferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn view_mode(&self) -> Option<ViewMode> {
        self.store.get(VIEW_MODE_KEY)?.parse().ok()
    }

    /// # Errors
    ///
    /// Propagates store write failures.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> Result<(), PreferenceError> {
        self.store.set(VIEW_MODE_KEY, &mode.to_string())
    }

    /// Stored split ratio, clamped into `bounds`.
    pub fn split_ratio(&self, bounds: SplitBounds) -> Option<f64> {
        let raw: f64 = self.store.get(SPLIT_RATIO_KEY)?.trim().parse().ok()?;
        raw.is_finite().then(|| bounds.clamp(raw))
    }

    /// Clamp and store a split ratio, returning the stored value.
    ///
    /// # Errors
    ///
    /// Propagates store write failures.
    pub fn set_split_ratio(
        &mut self,
        ratio: f64,
        bounds: SplitBounds,
    ) -> Result<f64, PreferenceError> {
        let clamped = bounds.clamp(ratio);
        self.store.set(SPLIT_RATIO_KEY, &clamped.to_string())?;
        Ok(clamped)
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
