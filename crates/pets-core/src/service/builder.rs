//! Builder for creating and configuring PetService instances.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tokio::task;

use super::PetService;
use crate::{
    contract::{DATABASE_NAME, DATABASE_VERSION},
    db::Database,
    error::{PetError, Result},
    notify::ChangeBroadcaster,
    provider::PetProvider,
};

/// Builder for creating and configuring PetService instances.
#[derive(Debug, Clone)]
pub struct PetServiceBuilder {
    database_path: Option<PathBuf>,
    schema_version: u32,
    broadcaster: Option<ChangeBroadcaster>,
}

impl PetServiceBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            schema_version: DATABASE_VERSION,
            broadcaster: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/pets/shelter.db` or `~/.local/share/pets/shelter.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the store at a specific schema version instead of the current
    /// one. Opening at a higher version than the file holds is destructive.
    pub fn with_schema_version(mut self, version: u32) -> Self {
        self.schema_version = version;
        self
    }

    /// Shares an existing broadcaster instead of creating a fresh one.
    pub fn with_broadcaster(mut self, broadcaster: ChangeBroadcaster) -> Self {
        self.broadcaster = Some(broadcaster);
        self
    }

    /// Builds the configured service.
    ///
    /// # Errors
    ///
    /// Returns `PetError::FileSystem` if the database directory cannot be
    /// created, `PetError::XdgDirectory` if no default location exists, and
    /// `PetError::StorageUnavailable` if the database cannot be opened.
    pub async fn build(self) -> Result<PetService> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PetError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let broadcaster = self.broadcaster.unwrap_or_default();
        let notifier = broadcaster.clone();
        let version = self.schema_version;
        let db_path_clone = db_path.clone();
        let provider = task::spawn_blocking(move || {
            let db = Database::open_with_version(&db_path_clone, version)?;
            Ok::<_, PetError>(PetProvider::new(db, notifier))
        })
        .await
        .map_err(PetError::join)??;

        Ok(PetService {
            provider: Arc::new(Mutex::new(provider)),
            broadcaster,
            db_path,
        })
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("pets")
            .place_data_file(DATABASE_NAME)
            .map_err(|e| PetError::XdgDirectory(e.to_string()))
    }
}

impl Default for PetServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
