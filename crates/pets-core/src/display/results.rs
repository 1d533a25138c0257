//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{models::Pet, uri::PetUri};

/// Wrapper type for displaying the result of an insert.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Pet> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created pet with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of an update.
///
/// Carries the record as read back after the update and a list of the
/// changes that were applied.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Pet> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated pet with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of a delete.
pub struct DeleteResult {
    pub uri: PetUri,
    pub count: usize,
}

impl DeleteResult {
    pub fn new(uri: PetUri, count: usize) -> Self {
        Self { uri, count }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.uri, self.count) {
            (PetUri::Item(id), 0) => writeln!(f, "No pet with ID {id}."),
            (PetUri::Item(id), _) => writeln!(f, "Deleted pet with ID: {id}"),
            (PetUri::Collection, 1) => writeln!(f, "Deleted 1 pet."),
            (PetUri::Collection, n) => writeln!(f, "Deleted {n} pets."),
        }
    }
}
