//! Record stores backing the dispatch tables.
//!
//! A [`RecordStore`] is where the pilot, drone and mission tables actually
//! live. [`CsvStore`] reads them from flat CSV files; [`MemoryStore`]
//! holds them in memory for tests. Matching always runs against a
//! [`Snapshot`] read in one go.

/// Flat-file CSV store.
pub mod csv_file;
pub use csv_file::CsvStore;

/// In-memory store.
pub mod memory;
pub use memory::MemoryStore;

mod row;
pub use row::Row;

mod snapshot;
pub use snapshot::Snapshot;

use std::{fmt, io, path::PathBuf};

/// The three tables held by a record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// The pilot roster.
    Pilots,
    /// The drone fleet.
    Drones,
    /// The mission list.
    Missions,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pilots => "pilots",
            Self::Drones => "drones",
            Self::Missions => "missions",
        };
        f.write_str(name)
    }
}

/// Errors raised by a record store.
///
/// Store failures surface to the caller as hard errors: nothing is
/// retried, since acting on a stale partial view could double-assign a
/// pilot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file for a table could not be read.
    #[error("failed to read the {table} table from {}: {source}", path.display())]
    Read {
        /// The table whose read failed.
        table: Table,
        /// The backing file.
        path: PathBuf,
        /// The underlying IO error.
        source: io::Error,
    },

    /// The backing file for a table could not be written.
    #[error("failed to write the {table} table to {}: {source}", path.display())]
    Write {
        /// The table whose write failed.
        table: Table,
        /// The backing file.
        path: PathBuf,
        /// The underlying IO error.
        source: io::Error,
    },

    /// A cell update referenced a column the table does not have.
    #[error("the {table} table has no '{column}' column")]
    UnknownColumn {
        /// The table addressed by the update.
        table: Table,
        /// The column that was not found.
        column: String,
    },

    /// A cell update referenced a row beyond the end of the table.
    #[error("row {row} is out of bounds for the {table} table ({rows} rows)")]
    RowOutOfBounds {
        /// The table addressed by the update.
        table: Table,
        /// The 1-based row locator that was requested.
        row: usize,
        /// The number of data rows the table actually has.
        rows: usize,
    },

    /// The store holds no such table at all.
    #[error("this store holds no {table} table")]
    MissingTable {
        /// The table that was requested.
        table: Table,
    },
}

/// A tabular store holding the pilot, drone and mission rosters.
///
/// Reads return a full copy of one table. Writes touch a single cell,
/// addressed by a 1-based data-row locator and a column name; no batch or
/// multi-cell transaction exists. There is no locking either: a snapshot
/// read before a concurrent operator's write simply goes stale, and the
/// last write wins.
pub trait RecordStore {
    /// Reads every row of `table`.
    ///
    /// # Errors
    ///
    /// Fails when the table's backing storage cannot be read.
    fn read(&self, table: Table) -> Result<Vec<Row>, StoreError>;

    /// Overwrites one cell of `table`.
    ///
    /// `row` is 1-based and counts data rows only; the header is not
    /// addressable.
    ///
    /// # Errors
    ///
    /// Fails when the row or column does not exist, or when the backing
    /// storage cannot be written.
    fn write_cell(
        &mut self,
        table: Table,
        row: usize,
        column: &str,
        value: &str,
    ) -> Result<(), StoreError>;
}

/// Sets the status of the first pilot whose name matches exactly.
///
/// Returns `Ok(false)` without writing when no pilot has that name. The
/// update is write-through: the next [`Snapshot`] read observes the new
/// value.
///
/// # Errors
///
/// Fails when the pilot table cannot be read or the cell cannot be
/// written.
pub fn update_pilot_status<S: RecordStore>(
    store: &mut S,
    pilot_name: &str,
    new_status: &str,
) -> Result<bool, StoreError> {
    let rows = store.read(Table::Pilots)?;
    for (index, row) in rows.iter().enumerate() {
        if row.get("name") == pilot_name {
            tracing::debug!("setting status of pilot '{pilot_name}' to '{new_status}'");
            store.write_cell(Table::Pilots, index + 1, "status", new_status)?;
            return Ok(true);
        }
    }
    Ok(false)
}
