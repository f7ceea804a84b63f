//! A record store backed by flat CSV files.
//!
//! Each table lives in one file under the data directory; the first
//! record names the columns. Reads re-parse the whole file and writes
//! rewrite it, so there is no caching between operations and no
//! transaction around a cell update.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    domain::Config,
    store::{RecordStore, Row, StoreError, Table},
};

/// A record store rooted in a directory of CSV files.
#[derive(Debug, Clone)]
pub struct CsvStore {
    root: PathBuf,
    config: Config,
}

impl CsvStore {
    /// Opens the store rooted at `root`.
    ///
    /// Reads `config.toml` from the root to find the table files, falling
    /// back to the default layout when the file is missing or unreadable.
    #[must_use]
    pub fn open(root: PathBuf) -> Self {
        let config = load_config(&root);
        Self { root, config }
    }

    /// The configuration in effect for this store.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    fn path(&self, table: Table) -> PathBuf {
        let file = match table {
            Table::Pilots => self.config.pilots_file(),
            Table::Drones => self.config.drones_file(),
            Table::Missions => self.config.missions_file(),
        };
        self.root.join(file)
    }
}

impl RecordStore for CsvStore {
    fn read(&self, table: Table) -> Result<Vec<Row>, StoreError> {
        let path = self.path(table);
        let text = fs::read_to_string(&path).map_err(|source| StoreError::Read {
            table,
            path: path.clone(),
            source,
        })?;

        let mut records = parse(&text);
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let headers = records.remove(0);
        let rows = records
            .into_iter()
            .map(|record| headers.iter().cloned().zip(record).collect())
            .collect();
        Ok(rows)
    }

    fn write_cell(
        &mut self,
        table: Table,
        row: usize,
        column: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        let path = self.path(table);
        let text = fs::read_to_string(&path).map_err(|source| StoreError::Read {
            table,
            path: path.clone(),
            source,
        })?;

        let mut records = parse(&text);
        let Some(headers) = records.first() else {
            return Err(StoreError::RowOutOfBounds {
                table,
                row,
                rows: 0,
            });
        };

        let Some(column_index) = headers.iter().position(|header| header == column) else {
            return Err(StoreError::UnknownColumn {
                table,
                column: column.to_string(),
            });
        };

        let rows = records.len() - 1;
        if row == 0 || row > rows {
            return Err(StoreError::RowOutOfBounds { table, row, rows });
        }

        let record = &mut records[row];
        if record.len() <= column_index {
            record.resize(column_index + 1, String::new());
        }
        record[column_index] = value.to_string();

        fs::write(&path, render(&records)).map_err(|source| StoreError::Write {
            table,
            path,
            source,
        })?;
        Ok(())
    }
}

fn load_config(root: &Path) -> Config {
    let path = root.join("config.toml");
    Config::load(&path).unwrap_or_else(|e| {
        tracing::debug!("Failed to load config: {e}");
        Config::default()
    })
}

/// Parses CSV text into records of fields.
///
/// Handles RFC-4180-style quoting: quoted fields may contain commas,
/// newlines and doubled quotes. Blank lines are skipped.
fn parse(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => record.push(std::mem::take(&mut field)),
                '\r' => {}
                '\n' => {
                    record.push(std::mem::take(&mut field));
                    if record.len() == 1 && record[0].is_empty() {
                        record.clear();
                    } else {
                        records.push(std::mem::take(&mut record));
                    }
                }
                _ => field.push(c),
            }
        }
    }

    // Final record without a trailing newline.
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    records
}

fn render(records: &[Vec<String>]) -> String {
    let mut out = String::new();
    for record in records {
        let line = record
            .iter()
            .map(|field| escape(field))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use super::CsvStore;
    use crate::store::{RecordStore, StoreError, Table};

    fn seed(root: &Path) {
        fs::write(
            root.join("pilot_roster.csv"),
            "name,status,skills,location,current_assignment\n\
             Asha,Available,\"drone,rope rescue\",Leh,\n\
             Bir,On Leave,survey,Goa\n",
        )
        .unwrap();
        fs::write(
            root.join("drone_fleet.csv"),
            "drone_id,status,capabilities,location\nD1,Available,\"Camera, IP67\",Leh\n",
        )
        .unwrap();
        fs::write(
            root.join("missions.csv"),
            "project_id,required_skills,weather\nM-1,rope,Sunny\n",
        )
        .unwrap();
    }

    #[test]
    fn read_parses_quoted_fields() {
        let tmp = tempfile::tempdir().unwrap();
        seed(tmp.path());
        let store = CsvStore::open(tmp.path().to_path_buf());

        let rows = store.read(Table::Pilots).unwrap();
        assert_eq!(rows[0].get("skills"), "drone,rope rescue");
        assert_eq!(rows[1].get("name"), "Bir");
    }

    #[test]
    fn short_rows_read_missing_columns_as_empty() {
        let tmp = tempfile::tempdir().unwrap();
        seed(tmp.path());
        let store = CsvStore::open(tmp.path().to_path_buf());

        // Bir's row carries no current_assignment field at all.
        let rows = store.read(Table::Pilots).unwrap();
        assert_eq!(rows[1].get("current_assignment"), "");
    }

    #[test]
    fn missing_file_is_a_hard_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let store = CsvStore::open(tmp.path().to_path_buf());

        let error = store.read(Table::Missions).unwrap_err();
        assert!(matches!(
            error,
            StoreError::Read {
                table: Table::Missions,
                ..
            }
        ));
    }

    #[test]
    fn write_cell_updates_one_cell_and_preserves_quoting() {
        let tmp = tempfile::tempdir().unwrap();
        seed(tmp.path());
        let mut store = CsvStore::open(tmp.path().to_path_buf());

        store
            .write_cell(Table::Pilots, 1, "status", "Unavailable")
            .unwrap();

        let rows = store.read(Table::Pilots).unwrap();
        assert_eq!(rows[0].get("status"), "Unavailable");
        // The quoted skills field survives the rewrite.
        assert_eq!(rows[0].get("skills"), "drone,rope rescue");
        assert_eq!(rows[1].get("status"), "On Leave");
    }

    #[test]
    fn write_cell_rejects_unknown_column() {
        let tmp = tempfile::tempdir().unwrap();
        seed(tmp.path());
        let mut store = CsvStore::open(tmp.path().to_path_buf());

        let error = store
            .write_cell(Table::Pilots, 1, "callsign", "Eagle")
            .unwrap_err();
        assert!(matches!(error, StoreError::UnknownColumn { .. }));
    }

    #[test]
    fn write_cell_rejects_out_of_bounds_rows() {
        let tmp = tempfile::tempdir().unwrap();
        seed(tmp.path());
        let mut store = CsvStore::open(tmp.path().to_path_buf());

        let error = store
            .write_cell(Table::Drones, 2, "status", "Maintenance")
            .unwrap_err();
        assert!(matches!(
            error,
            StoreError::RowOutOfBounds { row: 2, rows: 1, .. }
        ));
    }

    #[test]
    fn write_cell_extends_short_rows() {
        let tmp = tempfile::tempdir().unwrap();
        seed(tmp.path());
        let mut store = CsvStore::open(tmp.path().to_path_buf());

        // Bir's row is one field short of the header.
        store
            .write_cell(Table::Pilots, 2, "current_assignment", "M-1")
            .unwrap();

        let rows = store.read(Table::Pilots).unwrap();
        assert_eq!(rows[1].get("current_assignment"), "M-1");
    }

    #[test]
    fn config_redirects_table_files() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "_version = \"1\"\npilots_file = \"crew.csv\"\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join("crew.csv"),
            "name,status\nAsha,Available\n",
        )
        .unwrap();

        let store = CsvStore::open(tmp.path().to_path_buf());
        let rows = store.read(Table::Pilots).unwrap();
        assert_eq!(rows[0].get("name"), "Asha");
    }

    #[test]
    fn header_only_file_reads_as_no_rows() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("missions.csv"),
            "project_id,required_skills,weather\n",
        )
        .unwrap();

        let store = CsvStore::open(tmp.path().to_path_buf());
        assert!(store.read(Table::Missions).unwrap().is_empty());
    }
}
