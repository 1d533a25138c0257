//! Schema creation and version upgrades.

use std::cmp::Ordering;

use log::{info, warn};

use crate::{
    contract::TABLE_NAME,
    error::{DatabaseResultExt, PetError, Result},
};

const SCHEMA_SQL: &str = include_str!("../../assets/schema.sql");

impl super::Database {
    /// Brings the schema to `target`, creating the table if needed.
    pub(super) fn initialize_schema(&mut self, target: u32) -> Result<()> {
        let current = self.version()?;
        match current.cmp(&target) {
            Ordering::Equal => self
                .connection
                .execute_batch(SCHEMA_SQL)
                .db_context("Failed to initialize database schema"),
            Ordering::Less if current == 0 => {
                info!("Creating pets table at schema version {target}");
                let tx = self
                    .connection
                    .transaction()
                    .db_context("Failed to begin transaction")?;
                tx.execute_batch(SCHEMA_SQL)
                    .db_context("Failed to initialize database schema")?;
                tx.execute_batch(&format!("PRAGMA user_version = {target}"))
                    .db_context("Failed to record schema version")?;
                tx.commit().db_context("Failed to commit transaction")
            }
            Ordering::Less => self.upgrade(current, target),
            Ordering::Greater => Err(PetError::SchemaDowngrade {
                found: current,
                supported: target,
            }),
        }
    }

    /// Schema version recorded in the database file.
    pub fn version(&self) -> Result<u32> {
        self.connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")
    }

    /// Moves the schema from `old_version` to `new_version`.
    ///
    /// The upgrade drops and recreates the table: rows stored under the old
    /// version do not survive.
    pub fn upgrade(&mut self, old_version: u32, new_version: u32) -> Result<()> {
        if new_version < old_version {
            return Err(PetError::SchemaDowngrade {
                found: old_version,
                supported: new_version,
            });
        }

        warn!(
            "Upgrading pets schema from version {old_version} to {new_version}; existing rows are discarded"
        );

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        tx.execute_batch(&format!("DROP TABLE IF EXISTS {TABLE_NAME}"))
            .db_context("Failed to drop pets table")?;
        tx.execute_batch(SCHEMA_SQL)
            .db_context("Failed to recreate pets table")?;
        tx.execute_batch(&format!("PRAGMA user_version = {new_version}"))
            .db_context("Failed to record schema version")?;
        tx.commit().db_context("Failed to commit transaction")
    }
}
