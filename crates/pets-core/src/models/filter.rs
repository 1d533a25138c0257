//! Parameterized row filters.

use rusqlite::types::Value;

use crate::contract::COLUMN_ID;

/// A SQL predicate with positional `?` placeholders and their arguments.
///
/// The clause is passed to the store as written; only the arguments are
/// bound. Numbered placeholders (`?1`) are not supported because the filter is
/// appended after other bound values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filter {
    pub clause: String,
    pub args: Vec<Value>,
}

impl Filter {
    pub fn new(clause: impl Into<String>) -> Self {
        Self {
            clause: clause.into(),
            args: Vec::new(),
        }
    }

    /// Binds the next positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Filter matching exactly one row id.
    ///
    /// Ids beyond the rowid range match no row.
    pub fn by_id(id: u64) -> Self {
        match i64::try_from(id) {
            Ok(id) => Self::new(format!("{COLUMN_ID} = ?")).arg(id),
            Err(_) => Self::new("0"),
        }
    }

    /// Returns true if the clause is blank and would match every row.
    pub fn is_empty(&self) -> bool {
        self.clause.trim().is_empty()
    }
}
