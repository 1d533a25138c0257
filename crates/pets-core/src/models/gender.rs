//! Gender enumeration for pets.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::contract::{GENDER_FEMALE, GENDER_MALE, GENDER_UNKNOWN};

/// Type-safe enumeration of the stored gender codes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Unknown,
    Male,
    Female,
}

impl Gender {
    /// Maps a stored code back to a gender.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            GENDER_UNKNOWN => Some(Gender::Unknown),
            GENDER_MALE => Some(Gender::Male),
            GENDER_FEMALE => Some(Gender::Female),
            _ => None,
        }
    }

    /// Code stored in the `gender` column.
    pub fn code(self) -> i64 {
        match self {
            Gender::Unknown => GENDER_UNKNOWN,
            Gender::Male => GENDER_MALE,
            Gender::Female => GENDER_FEMALE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Unknown => "unknown",
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" | "0" => Ok(Gender::Unknown),
            "male" | "m" | "1" => Ok(Gender::Male),
            "female" | "f" | "2" => Ok(Gender::Female),
            _ => Err(format!("Invalid gender: {s}")),
        }
    }
}

impl From<Gender> for i64 {
    fn from(gender: Gender) -> Self {
        gender.code()
    }
}
