//! Storage engine adapter for the pets table.
//!
//! [`Database`] owns the single SQLite connection backing the store. Opening
//! it creates the table on first use and brings an older schema up to the
//! requested version. Statement-level helpers live in [`pet_queries`].

use std::path::{Path, PathBuf};

use log::info;
use rusqlite::Connection;

use crate::{
    contract::DATABASE_VERSION,
    error::{PetError, Result},
};

pub mod pet_queries;
pub mod schema;

const IN_MEMORY_PATH: &str = ":memory:";

/// Database connection handler.
pub struct Database {
    connection: Connection,
    path: PathBuf,
}

impl Database {
    /// Opens the database at `path` with the current schema version.
    ///
    /// # Errors
    ///
    /// Returns `PetError::StorageUnavailable` if the file cannot be opened or
    /// its schema cannot be applied, and `PetError::SchemaDowngrade` if the
    /// file was written by a newer schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_version(path, DATABASE_VERSION)
    }

    /// Opens the database at `path`, creating or upgrading the schema to
    /// `version`.
    pub fn open_with_version<P: AsRef<Path>>(path: P, version: u32) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let connection = Connection::open(&path).map_err(|source| PetError::StorageUnavailable {
            path: path.clone(),
            source,
        })?;
        Self::bootstrap(connection, path, version)
    }

    /// Opens a private in-memory database with the current schema.
    pub fn open_in_memory() -> Result<Self> {
        let path = PathBuf::from(IN_MEMORY_PATH);
        let connection =
            Connection::open_in_memory().map_err(|source| PetError::StorageUnavailable {
                path: path.clone(),
                source,
            })?;
        Self::bootstrap(connection, path, DATABASE_VERSION)
    }

    fn bootstrap(connection: Connection, path: PathBuf, version: u32) -> Result<Self> {
        let mut db = Self { connection, path };
        match db.initialize_schema(version) {
            Ok(()) => {
                info!(
                    "Opened pets database at {} (schema version {version})",
                    db.path.display()
                );
                Ok(db)
            }
            Err(PetError::Database { source, .. }) => Err(PetError::StorageUnavailable {
                path: db.path,
                source,
            }),
            Err(e) => Err(e),
        }
    }

    /// Handle for read-only statements.
    pub fn readable(&self) -> &Connection {
        &self.connection
    }

    /// Handle for statements that modify the store.
    pub fn writable(&mut self) -> &mut Connection {
        &mut self.connection
    }

    /// Location of the database file, `:memory:` for in-memory stores.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Closes the connection, reporting any error the close produces.
    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.connection
            .close()
            .map_err(|(_, source)| PetError::StorageUnavailable { path, source })
    }
}
