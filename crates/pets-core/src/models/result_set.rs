//! Query results.

use rusqlite::types::Value;

use super::{Gender, Pet};
use crate::{
    contract::{COLUMN_BREED, COLUMN_GENDER, COLUMN_ID, COLUMN_NAME, COLUMN_WEIGHT},
    error::{PetError, Result},
    uri::PetUri,
};

/// Rows returned by a query, together with the identifier they were read
/// through.
///
/// The result set is fully materialized: it holds no connection and does not
/// refresh itself. Observers interested in later changes subscribe to
/// [`ResultSet::notification_uri`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    notification_uri: PetUri,
}

impl ResultSet {
    pub(crate) fn new(columns: Vec<String>, rows: Vec<Vec<Value>>, notification_uri: PetUri) -> Self {
        Self {
            columns,
            rows,
            notification_uri,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Identifier whose changes invalidate this result.
    pub fn notification_uri(&self) -> PetUri {
        self.notification_uri
    }

    /// Position of `column` in the projection.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Value at `row` for `column`, if both exist.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }

    /// Integer value at `row` for `column`.
    pub fn get_i64(&self, row: usize, column: &str) -> Option<i64> {
        match self.get(row, column)? {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Text value at `row` for `column`.
    pub fn get_str(&self, row: usize, column: &str) -> Option<&str> {
        match self.get(row, column)? {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Converts every row into a [`Pet`].
    ///
    /// # Errors
    ///
    /// Fails with a validation error naming the column when the projection
    /// lacks a column or a stored value has the wrong type.
    pub fn to_pets(&self) -> Result<Vec<Pet>> {
        (0..self.rows.len()).map(|row| self.pet_at(row)).collect()
    }

    fn pet_at(&self, row: usize) -> Result<Pet> {
        let int = |column: &str| {
            self.get_i64(row, column)
                .ok_or_else(|| unreadable(column))
        };
        let text = |column: &str| {
            self.get_str(row, column)
                .map(String::from)
                .ok_or_else(|| unreadable(column))
        };

        // Read in table order; the first missing column is reported.
        let raw_id = int(COLUMN_ID)?;
        let name = text(COLUMN_NAME)?;
        let breed = text(COLUMN_BREED)?;
        let gender_code = int(COLUMN_GENDER)?;
        let weight = int(COLUMN_WEIGHT)?;

        let id = u64::try_from(raw_id).map_err(|_| {
            PetError::validation(COLUMN_ID).with_reason(format!("stored id {raw_id} is negative"))
        })?;
        let gender = Gender::from_code(gender_code).ok_or_else(|| {
            PetError::validation(COLUMN_GENDER)
                .with_reason(format!("stored gender code {gender_code} is invalid"))
        })?;

        Ok(Pet {
            id,
            name,
            breed,
            gender,
            weight,
        })
    }
}

fn unreadable(column: &str) -> PetError {
    PetError::validation(column).with_reason("column missing from result set or has the wrong type")
}
