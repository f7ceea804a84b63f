//! An in-memory record store.
//!
//! Holds tables as plain row vectors. Mostly useful in tests, or anywhere
//! a fixed set of rows should stand in for the flat-file store.

use std::collections::HashMap;

use crate::store::{RecordStore, Row, StoreError, Table};

/// A record store holding its tables in memory.
///
/// Rows are schemaless: unlike [`CsvStore`](super::CsvStore), a cell
/// update may name any column and the column springs into existence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: HashMap<Table, Vec<Row>>,
}

impl MemoryStore {
    /// Creates a store with no tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of `table`.
    pub fn insert(&mut self, table: Table, rows: Vec<Row>) {
        self.tables.insert(table, rows);
    }

    /// Drops `table` from the store entirely.
    pub fn remove(&mut self, table: Table) {
        self.tables.remove(&table);
    }
}

impl RecordStore for MemoryStore {
    fn read(&self, table: Table) -> Result<Vec<Row>, StoreError> {
        self.tables
            .get(&table)
            .cloned()
            .ok_or(StoreError::MissingTable { table })
    }

    fn write_cell(
        &mut self,
        table: Table,
        row: usize,
        column: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        let rows = self
            .tables
            .get_mut(&table)
            .ok_or(StoreError::MissingTable { table })?;

        let count = rows.len();
        if row == 0 || row > count {
            return Err(StoreError::RowOutOfBounds {
                table,
                row,
                rows: count,
            });
        }

        rows[row - 1].set(column, value);
        Ok(())
    }
}
