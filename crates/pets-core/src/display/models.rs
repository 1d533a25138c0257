//! Display implementations for domain models.

use std::fmt;

use crate::{
    models::{Gender, Pet},
    uri::PetUri,
};

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        if self.breed.is_empty() {
            writeln!(f, "- Breed: unknown breed")?;
        } else {
            writeln!(f, "- Breed: {}", self.breed)?;
        }
        writeln!(f, "- Gender: {}", self.gender)?;
        writeln!(f, "- Weight: {} kg", self.weight)?;
        writeln!(f, "- URI: {}", PetUri::Item(self.id))
    }
}
