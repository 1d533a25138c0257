//! Pet model definition.

use serde::{Deserialize, Serialize};

use super::Gender;

/// A stored pet record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pet {
    /// Store-assigned identifier
    pub id: u64,

    /// Name of the pet, never empty
    pub name: String,

    /// Breed, possibly empty
    pub breed: String,

    #[serde(default)]
    pub gender: Gender,

    /// Weight in whole kilograms
    pub weight: i64,
}
