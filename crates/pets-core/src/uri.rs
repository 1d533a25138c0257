//! Resource identifiers for pet records.
//!
//! An identifier names either the whole collection
//! (`content://com.example.android.pets/pets`) or one pet
//! (`content://com.example.android.pets/pets/7`). Parsing is pure: the result
//! is a closed [`PetUri`] variant, and every other shape is rejected with
//! [`PetError::UnrecognizedIdentifier`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    contract::{
        CONTENT_AUTHORITY, CONTENT_ITEM_TYPE, CONTENT_LIST_TYPE, CONTENT_SCHEME, PATH_PETS,
    },
    error::{PetError, Result},
};

/// A resolved pet identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetUri {
    /// Every pet in the store
    Collection,
    /// One pet addressed by its id
    Item(u64),
}

impl PetUri {
    /// Parses an identifier into its shape.
    ///
    /// A single trailing slash is tolerated. The id segment must be plain
    /// ASCII digits within the SQLite rowid range (at most `i64::MAX`).
    pub fn resolve(identifier: &str) -> Result<Self> {
        let rest = identifier
            .strip_prefix(CONTENT_SCHEME)
            .and_then(|s| s.strip_prefix("://"))
            .and_then(|s| s.strip_prefix(CONTENT_AUTHORITY))
            .and_then(|s| s.strip_prefix('/'))
            .ok_or_else(|| PetError::unrecognized(identifier))?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let mut segments = rest.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(PATH_PETS), None, None) => Ok(Self::Collection),
            (Some(PATH_PETS), Some(id), None) => parse_id(id)
                .map(Self::Item)
                .ok_or_else(|| PetError::unrecognized(identifier)),
            _ => Err(PetError::unrecognized(identifier)),
        }
    }

    /// The record id for single-pet identifiers.
    pub fn id(&self) -> Option<u64> {
        match self {
            Self::Collection => None,
            Self::Item(id) => Some(*id),
        }
    }

    /// MIME type describing what a query on this identifier returns.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Collection => CONTENT_LIST_TYPE,
            Self::Item(_) => CONTENT_ITEM_TYPE,
        }
    }

    /// Returns true if `other` lies under this identifier.
    pub fn is_ancestor_of(&self, other: &PetUri) -> bool {
        matches!((self, other), (Self::Collection, Self::Item(_)))
    }
}

fn parse_id(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let id: i64 = segment.parse().ok()?;
    u64::try_from(id).ok()
}

impl FromStr for PetUri {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl fmt::Display for PetUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CONTENT_SCHEME}://{CONTENT_AUTHORITY}/{PATH_PETS}")?;
        if let Self::Item(id) = self {
            write!(f, "/{id}")?;
        }
        Ok(())
    }
}
