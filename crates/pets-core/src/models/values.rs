//! Partial pet records used as write payloads.
//!
//! [`PetValues`] is what callers hand to insert and update. Every field keeps
//! track of whether it was supplied at all, supplied as an explicit null, or
//! supplied with a value, so an update can touch exactly the columns it names.

use rusqlite::types::Value;

use super::Pet;
use crate::{
    contract::{
        is_valid_gender, COLUMN_BREED, COLUMN_GENDER, COLUMN_NAME, COLUMN_WEIGHT,
        GENDER_UNKNOWN,
    },
    error::{PetError, Result},
};

/// Presence-tracking slot for one column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field<T> {
    /// Not supplied; the column is left alone
    #[default]
    Absent,
    /// Supplied as an explicit null
    Null,
    /// Supplied with a value
    Value(T),
}

impl<T> Field<T> {
    pub fn is_present(&self) -> bool {
        !matches!(self, Field::Absent)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            Field::Absent | Field::Null => None,
        }
    }
}

impl<T: Clone + Into<Value>> Field<T> {
    fn to_sql_value(&self) -> Option<Value> {
        match self {
            Field::Absent => None,
            Field::Null => Some(Value::Null),
            Field::Value(v) => Some(v.clone().into()),
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    /// `None` maps to an explicit null, not to absence.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Value(v),
            None => Field::Null,
        }
    }
}

/// A partial pet record.
///
/// Gender and weight are carried as raw integers so that out-of-range codes
/// reach validation instead of being unrepresentable.
///
/// ```rust
/// use pets_core::models::{Field, PetValues};
///
/// let values = PetValues::new().name("Toto").breed("Terrier").gender(1).weight(7);
/// assert_eq!(values.name, Field::Value("Toto".to_string()));
/// assert!(!PetValues::new().weight(3).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PetValues {
    pub name: Field<String>,
    pub breed: Field<String>,
    pub gender: Field<i64>,
    pub weight: Field<i64>,
}

impl PetValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Field::Value(name.into());
        self
    }

    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Field::Value(breed.into());
        self
    }

    pub fn gender(mut self, gender: impl Into<i64>) -> Self {
        self.gender = Field::Value(gender.into());
        self
    }

    pub fn weight(mut self, weight: i64) -> Self {
        self.weight = Field::Value(weight);
        self
    }

    pub fn null_name(mut self) -> Self {
        self.name = Field::Null;
        self
    }

    pub fn null_breed(mut self) -> Self {
        self.breed = Field::Null;
        self
    }

    pub fn null_gender(mut self) -> Self {
        self.gender = Field::Null;
        self
    }

    pub fn null_weight(mut self) -> Self {
        self.weight = Field::Null;
        self
    }

    /// Returns true if no field was supplied.
    pub fn is_empty(&self) -> bool {
        !(self.name.is_present()
            || self.breed.is_present()
            || self.gender.is_present()
            || self.weight.is_present())
    }

    /// Checks a payload destined for a new row.
    ///
    /// Checks run in a fixed order: name, breed, weight, gender. The first
    /// violation wins.
    pub fn validate_for_insert(&self) -> Result<()> {
        if !self.name.is_present() {
            return Err(PetError::validation(COLUMN_NAME).with_reason("missing name"));
        }
        if !self.breed.is_present() {
            return Err(PetError::validation(COLUMN_BREED).with_reason("missing breed"));
        }
        self.validate_for_update()
    }

    /// Checks only the fields that are present, with the insert rules.
    pub fn validate_for_update(&self) -> Result<()> {
        match &self.name {
            Field::Absent => {}
            Field::Value(name) if !name.is_empty() => {}
            _ => return Err(PetError::validation(COLUMN_NAME).with_reason("missing name")),
        }
        if let Field::Null = self.breed {
            return Err(PetError::validation(COLUMN_BREED).with_reason("missing breed"));
        }
        match self.weight {
            Field::Absent => {}
            Field::Null => {
                return Err(PetError::validation(COLUMN_WEIGHT).with_reason("missing weight"))
            }
            Field::Value(w) if w < 0 => {
                return Err(PetError::validation(COLUMN_WEIGHT).with_reason("negative weight"))
            }
            Field::Value(_) => {}
        }
        match self.gender {
            Field::Absent => {}
            Field::Value(g) if is_valid_gender(g) => {}
            _ => return Err(PetError::validation(COLUMN_GENDER).with_reason("invalid gender")),
        }
        Ok(())
    }

    /// Column/value pairs for every present field, in table order.
    pub(crate) fn columns(&self) -> Vec<(&'static str, Value)> {
        [
            (COLUMN_NAME, self.name.to_sql_value()),
            (COLUMN_BREED, self.breed.to_sql_value()),
            (COLUMN_GENDER, self.gender.to_sql_value()),
            (COLUMN_WEIGHT, self.weight.to_sql_value()),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.map(|v| (column, v)))
        .collect()
    }

    /// Fills the columns an insert may omit.
    pub(crate) fn with_insert_defaults(mut self) -> Self {
        if !self.gender.is_present() {
            self.gender = Field::Value(GENDER_UNKNOWN);
        }
        if !self.weight.is_present() {
            self.weight = Field::Value(0);
        }
        self
    }
}

impl From<&Pet> for PetValues {
    fn from(pet: &Pet) -> Self {
        PetValues::new()
            .name(pet.name.clone())
            .breed(pet.breed.clone())
            .gender(pet.gender)
            .weight(pet.weight)
    }
}
