//! Record access component for pets.
//!
//! [`PetProvider`] is the only path to the pets table. Every operation first
//! resolves its identifier to a [`PetUri`]; single-pet identifiers replace any
//! caller filter with `_id = ?`. Writes are validated before anything reaches
//! the store and announce their changes through the injected
//! [`ChangeNotifier`].

use std::borrow::Cow;

use log::{debug, info};

use crate::{
    contract::{is_known_column, ALL_COLUMNS},
    db::Database,
    error::{PetError, Result},
    models::{Filter, PetValues, ResultSet},
    notify::ChangeNotifier,
    uri::PetUri,
};

/// Query/insert/update/delete over pet identifiers.
pub struct PetProvider {
    db: Database,
    notifier: Box<dyn ChangeNotifier>,
}

impl PetProvider {
    /// Creates a provider over an opened database.
    pub fn new(db: Database, notifier: impl ChangeNotifier + 'static) -> Self {
        info!("Pet provider ready on {}", db.path().display());
        Self {
            db,
            notifier: Box::new(notifier),
        }
    }

    /// Parses `identifier` into its shape.
    pub fn resolve(identifier: &str) -> Result<PetUri> {
        PetUri::resolve(identifier)
    }

    /// MIME type of the rows `identifier` addresses.
    pub fn get_type(&self, identifier: &str) -> Result<&'static str> {
        Ok(Self::resolve(identifier)?.mime_type())
    }

    /// Reads pets.
    ///
    /// `projection` of `None` selects every column. On a single-pet identifier
    /// the caller's `filter` is ignored.
    ///
    /// # Errors
    ///
    /// `UnrecognizedIdentifier` for unknown shapes, `Validation` for a
    /// projection naming a column the table does not have.
    pub fn query(
        &self,
        identifier: &str,
        projection: Option<&[&str]>,
        filter: Option<&Filter>,
        sort_order: Option<&str>,
    ) -> Result<ResultSet> {
        let uri = Self::resolve(identifier)?;
        let projection = match projection {
            Some(columns) if !columns.is_empty() => {
                check_projection(columns)?;
                columns
            }
            _ => &ALL_COLUMNS[..],
        };

        let filter = scoped_filter(uri, filter);

        let (columns, rows) = self.db.select_rows(projection, filter.as_deref(), sort_order)?;
        debug!("Query on {uri} returned {} rows", rows.len());
        Ok(ResultSet::new(columns, rows, uri))
    }

    /// Adds a pet to the collection.
    ///
    /// Missing gender or weight are stored as 0. Returns the new pet's
    /// identifier, or `None` if the store refused the row; nothing is
    /// announced in that case.
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` unless `identifier` is the collection;
    /// `Validation` naming the first offending field.
    pub fn insert(&mut self, identifier: &str, values: PetValues) -> Result<Option<PetUri>> {
        let uri = Self::resolve(identifier)?;
        if uri != PetUri::Collection {
            return Err(PetError::UnsupportedOperation {
                operation: "Insertion",
                identifier: identifier.to_string(),
            });
        }

        values.validate_for_insert()?;
        let columns = values.with_insert_defaults().columns();

        let Some(id) = self.db.insert_row(&columns)? else {
            return Ok(None);
        };

        info!("Saved pet with id {id}");
        self.notifier.notify_change(&uri);
        Ok(Some(PetUri::Item(id)))
    }

    /// Changes the supplied fields on every matching pet.
    ///
    /// Fields absent from `values` keep their stored value. An empty `values`
    /// returns 0 without touching the store.
    pub fn update(
        &mut self,
        identifier: &str,
        values: PetValues,
        filter: Option<&Filter>,
    ) -> Result<usize> {
        let uri = Self::resolve(identifier)?;
        values.validate_for_update()?;
        if values.is_empty() {
            return Ok(0);
        }

        let filter = scoped_filter(uri, filter);

        let updated = self.db.update_rows(&values.columns(), filter.as_deref())?;
        if updated > 0 {
            debug!("Updated {updated} pets through {uri}");
            self.notifier.notify_change(&uri);
        }
        Ok(updated)
    }

    /// Removes every matching pet.
    pub fn delete(&mut self, identifier: &str, filter: Option<&Filter>) -> Result<usize> {
        let uri = Self::resolve(identifier)?;

        let filter = scoped_filter(uri, filter);

        let deleted = self.db.delete_rows(filter.as_deref())?;
        if deleted > 0 {
            debug!("Deleted {deleted} pets through {uri}");
            self.notifier.notify_change(&uri);
        }
        Ok(deleted)
    }

    /// Releases the provider and closes its database.
    pub fn shutdown(self) -> Result<()> {
        info!("Closing pet provider on {}", self.db.path().display());
        self.db.close()
    }

    /// Storage adapter this provider runs against.
    pub fn database(&self) -> &Database {
        &self.db
    }
}

/// Single-pet identifiers always address exactly their own row.
fn scoped_filter(uri: PetUri, filter: Option<&Filter>) -> Option<Cow<'_, Filter>> {
    match uri {
        PetUri::Collection => filter.map(Cow::Borrowed),
        PetUri::Item(id) => Some(Cow::Owned(Filter::by_id(id))),
    }
}

fn check_projection(columns: &[&str]) -> Result<()> {
    match columns.iter().find(|c| !is_known_column(c)) {
        Some(unknown) => Err(PetError::validation(*unknown).with_reason("unknown column")),
        None => Ok(()),
    }
}
