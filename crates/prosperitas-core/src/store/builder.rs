//! Builder for creating and configuring ProgressStore instances.

use std::path::{Path, PathBuf};

use super::ProgressStore;
use crate::{
    db::Database,
    error::{Result, TrackerError},
};

/// Builder for creating and configuring ProgressStore instances.
#[derive(Debug, Clone)]
pub struct ProgressStoreBuilder {
    database_path: Option<PathBuf>,
}

impl ProgressStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/prosperitas/prosperitas.db` or
    /// `~/.local/share/prosperitas/prosperitas.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the database and loads the persisted state.
    ///
    /// Corrupt or missing records do not fail the build: they are replaced
    /// by the seed catalog and an empty progress.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the data directory cannot be
    /// created, `TrackerError::XdgDirectory` if no default path can be
    /// determined, and `TrackerError::Database` if the database cannot be
    /// opened.
    pub fn build(self) -> Result<ProgressStore> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        log::debug!("Opening progress database at {}", db_path.display());
        let db = Database::new(&db_path)?;
        Ok(ProgressStore::initialize(db))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("prosperitas")
            .place_data_file("prosperitas.db")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}

impl Default for ProgressStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
