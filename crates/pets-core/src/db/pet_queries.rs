//! Statement builders for the pets table.
//!
//! These helpers take already-validated input: column names come from the
//! schema contract and filters are bound positionally. Field validation is the
//! provider's job.

use log::error;
use rusqlite::{params_from_iter, types::Value, ErrorCode};

use crate::{
    contract::TABLE_NAME,
    error::{DatabaseResultExt, Result},
    models::Filter,
};

/// SQLite failures that mean "the store refused this row" rather than "the
/// store is broken". Inserts report these as a missing row id.
const REJECTED_ROW_CODES: [ErrorCode; 3] = [
    ErrorCode::ConstraintViolation,
    ErrorCode::ReadOnly,
    ErrorCode::DiskFull,
];

impl super::Database {
    /// Runs a select over the pets table.
    ///
    /// Returns the projected column names and the materialized rows.
    pub fn select_rows(
        &self,
        projection: &[&str],
        filter: Option<&Filter>,
        sort_order: Option<&str>,
    ) -> Result<(Vec<String>, Vec<Vec<Value>>)> {
        let mut sql = format!("SELECT {} FROM {TABLE_NAME}", projection.join(", "));
        let args = push_where(&mut sql, filter);
        if let Some(order) = sort_order.filter(|o| !o.trim().is_empty()) {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }

        let mut stmt = self
            .readable()
            .prepare(&sql)
            .db_context("Failed to prepare query")?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let width = columns.len();

        let rows = stmt
            .query_map(params_from_iter(args), |row| {
                (0..width)
                    .map(|i| row.get::<_, Value>(i))
                    .collect::<rusqlite::Result<Vec<Value>>>()
            })
            .db_context("Failed to query pets")?
            .collect::<std::result::Result<Vec<Vec<Value>>, _>>()
            .db_context("Failed to fetch pets")?;

        Ok((columns, rows))
    }

    /// Inserts one row and returns its id.
    ///
    /// Returns `Ok(None)` when the store rejects the row (constraint,
    /// read-only, or full database) instead of raising.
    pub fn insert_row(&mut self, columns: &[(&str, Value)]) -> Result<Option<u64>> {
        let names: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
        let placeholders = vec!["?"; columns.len()].join(", ");
        let sql = format!(
            "INSERT INTO {TABLE_NAME} ({}) VALUES ({placeholders})",
            names.join(", ")
        );

        let tx = self
            .writable()
            .transaction()
            .db_context("Failed to begin transaction")?;

        match tx.execute(&sql, params_from_iter(columns.iter().map(|(_, v)| v))) {
            Ok(_) => {}
            Err(e) if is_rejected_row(&e) => {
                error!("Store rejected pet row: {e}");
                return Ok(None);
            }
            Err(e) => return Err(e).db_context("Failed to insert pet"),
        }

        let Ok(id) = u64::try_from(tx.last_insert_rowid()) else {
            error!("Store assigned a negative row id");
            return Ok(None);
        };
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(Some(id))
    }

    /// Sets `columns` on every row matching `filter` and returns the count.
    pub fn update_rows(
        &mut self,
        columns: &[(&str, Value)],
        filter: Option<&Filter>,
    ) -> Result<usize> {
        let assignments: Vec<String> = columns.iter().map(|(name, _)| format!("{name} = ?")).collect();
        let mut sql = format!("UPDATE {TABLE_NAME} SET {}", assignments.join(", "));
        let filter_args = push_where(&mut sql, filter);

        let args = columns.iter().map(|(_, v)| v).chain(filter_args);
        self.writable()
            .execute(&sql, params_from_iter(args))
            .db_context("Failed to update pets")
    }

    /// Deletes every row matching `filter` and returns the count.
    pub fn delete_rows(&mut self, filter: Option<&Filter>) -> Result<usize> {
        let mut sql = format!("DELETE FROM {TABLE_NAME}");
        let args = push_where(&mut sql, filter);
        self.writable()
            .execute(&sql, params_from_iter(args))
            .db_context("Failed to delete pets")
    }
}

/// Appends a WHERE clause for a non-blank filter and returns its arguments.
fn push_where<'a>(sql: &mut String, filter: Option<&'a Filter>) -> std::slice::Iter<'a, Value> {
    match filter.filter(|f| !f.is_empty()) {
        Some(f) => {
            sql.push_str(" WHERE ");
            sql.push_str(&f.clause);
            f.args.iter()
        }
        None => {
            let empty: &'a [Value] = &[];
            empty.iter()
        }
    }
}

fn is_rejected_row(e: &rusqlite::Error) -> bool {
    matches!(e, rusqlite::Error::SqliteFailure(failure, _) if REJECTED_ROW_CODES.contains(&failure.code))
}
