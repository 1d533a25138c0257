//! Collection wrapper types for displaying groups of pets.

use std::fmt;

use crate::models::Pet;

/// Newtype wrapper for displaying a list of pets.
///
/// Each pet is a compact one-line bullet; an empty list prints
/// "No pets found.".
pub struct Pets(pub Vec<Pet>);

impl Pets {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pet> {
        self.0.iter()
    }
}

impl IntoIterator for Pets {
    type Item = Pet;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pets {
    type Item = &'a Pet;
    type IntoIter = std::slice::Iter<'a, Pet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Pets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No pets found.");
        }
        for pet in &self.0 {
            let breed = if pet.breed.is_empty() {
                "unknown breed"
            } else {
                pet.breed.as_str()
            };
            writeln!(
                f,
                "- **{}. {}**: {}, {}, {} kg",
                pet.id, pet.name, breed, pet.gender, pet.weight
            )?;
        }
        Ok(())
    }
}
