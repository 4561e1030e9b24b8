//! SQLite record store implementation

use rusqlite::{Connection, params, types::Value};
use std::path::{Path, PathBuf};

use super::schema;
use crate::record::{NewCase, NewClient, NewLawyer, TableData, TableKind};
use crate::{Error, Result};

/// Data-access layer over the three record tables.
///
/// Holds only the database path. Every operation opens a fresh connection,
/// executes, commits and drops it before returning; no connection or lock
/// is held across operations.
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Open a store at the given path, creating the file and schema if
    /// missing. Schema creation is idempotent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        let conn = store.connect()?;
        for stmt in schema::all_schema_statements() {
            conn.execute(stmt, [])?;
        }
        Ok(store)
    }

    /// Path of the underlying database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        // Foreign keys are declarations only; writes never check them and
        // dangling references are tolerated. Some SQLite builds default the
        // pragma on, so disable it explicitly rather than relying on the
        // default.
        conn.execute_batch("PRAGMA foreign_keys = OFF")?;
        Ok(conn)
    }

    // ========== Read Operations ==========

    /// All rows and column names for a table. No filtering, sorting or
    /// pagination; NULL cells come back as `None`.
    pub fn list(&self, table: TableKind) -> Result<TableData> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("SELECT * FROM {}", table.as_str()))?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let width = columns.len();

        let rows = stmt
            .query_map([], |row| {
                let mut cells = Vec::with_capacity(width);
                for i in 0..width {
                    let value: Value = row.get(i)?;
                    cells.push(render_value(value));
                }
                Ok(cells)
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(TableData { columns, rows })
    }

    /// Row counts for all three tables
    pub fn counts(&self) -> Result<TableCounts> {
        let conn = self.connect()?;
        Ok(TableCounts {
            clients: count_rows(&conn, TableKind::Clients)?,
            lawyers: count_rows(&conn, TableKind::Lawyers)?,
            cases: count_rows(&conn, TableKind::Cases)?,
        })
    }

    // ========== Insert Operations ==========

    /// Insert a client; returns the assigned id
    pub fn add_client(&self, client: &NewClient) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO clients (name, contact, email) VALUES (?1, ?2, ?3)",
            params![client.name, client.contact, client.email],
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!("added client {}", id);
        Ok(id)
    }

    /// Insert a lawyer; returns the assigned id
    pub fn add_lawyer(&self, lawyer: &NewLawyer) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO lawyers (name, specialization, contact) VALUES (?1, ?2, ?3)",
            params![lawyer.name, lawyer.specialization, lawyer.contact],
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!("added lawyer {}", id);
        Ok(id)
    }

    /// Insert a case; returns the assigned id.
    /// The client and lawyer references are stored as given, whether or not
    /// such rows exist.
    pub fn add_case(&self, case: &NewCase) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO cases (title, client_id, lawyer_id, status, description) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                case.title,
                case.client_id,
                case.lawyer_id,
                case.status,
                case.description,
            ],
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!("added case {}", id);
        Ok(id)
    }

    // ========== Update / Delete Operations ==========

    /// Rewrite a single column of a single row, identified by primary key.
    ///
    /// A column name outside the table's column list is rejected with
    /// `Error::UnknownColumn`. An id matching no row is not an error; zero
    /// rows affected is treated the same as one.
    pub fn update(&self, table: TableKind, id: i64, column: &str, value: &str) -> Result<()> {
        if !table.has_column(column) {
            return Err(Error::UnknownColumn {
                table,
                column: column.to_string(),
            });
        }

        let conn = self.connect()?;
        // column was checked against the table's static column list, so it
        // can be spliced into the statement text
        let sql = format!(
            "UPDATE {} SET {} = ?1 WHERE {} = ?2",
            table.as_str(),
            column,
            table.id_column()
        );
        let affected = conn.execute(&sql, params![value, id])?;
        tracing::debug!("update {} id={} column={} affected={}", table, id, column, affected);
        Ok(())
    }

    /// Remove the row matching the primary key. An id matching no row is
    /// not an error.
    pub fn delete(&self, table: TableKind, id: i64) -> Result<()> {
        let conn = self.connect()?;
        let sql = format!(
            "DELETE FROM {} WHERE {} = ?1",
            table.as_str(),
            table.id_column()
        );
        let affected = conn.execute(&sql, params![id])?;
        tracing::debug!("delete {} id={} affected={}", table, id, affected);
        Ok(())
    }
}

fn count_rows(conn: &Connection, table: TableKind) -> Result<usize> {
    let count: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM {}", table.as_str()),
        [],
        |row| row.get(0),
    )?;
    Ok(count as usize)
}

/// Render a SQL value for display; NULL becomes `None`
fn render_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Integer(i) => Some(i.to_string()),
        Value::Real(f) => Some(f.to_string()),
        Value::Text(s) => Some(s),
        Value::Blob(b) => Some(format!("<{} byte blob>", b.len())),
    }
}

/// Row counts per table
#[derive(Debug, Clone, serde::Serialize)]
pub struct TableCounts {
    pub clients: usize,
    pub lawyers: usize,
    pub cases: usize,
}

impl std::fmt::Display for TableCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Record counts:")?;
        writeln!(f, "  Clients: {}", self.clients)?;
        writeln!(f, "  Lawyers: {}", self.lawyers)?;
        write!(f, "  Cases: {}", self.cases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, RecordStore) {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open(dir.path().join("docket.db")).unwrap();
        (dir, store)
    }

    fn sample_client(name: &str) -> NewClient {
        NewClient {
            name: name.to_string(),
            contact: Some("555-0100".to_string()),
            email: Some(format!("{}@example.com", name.to_lowercase())),
        }
    }

    #[test]
    fn test_list_columns_match_row_width() {
        let (_dir, store) = temp_store();
        store.add_client(&sample_client("Ada")).unwrap();
        store
            .add_lawyer(&NewLawyer {
                name: "Sam Ito".to_string(),
                specialization: Some("Tax".to_string()),
                contact: None,
            })
            .unwrap();
        store
            .add_case(&NewCase {
                title: "Ito v. State".to_string(),
                ..Default::default()
            })
            .unwrap();

        for table in TableKind::all() {
            let data = store.list(*table).unwrap();
            assert_eq!(data.columns.len(), table.columns().len());
            for row in &data.rows {
                assert_eq!(row.len(), data.columns.len());
            }
        }
    }

    #[test]
    fn test_add_then_list_shows_new_row() {
        let (_dir, store) = temp_store();
        store.add_client(&sample_client("Ada")).unwrap();
        let before = store.list(TableKind::Clients).unwrap();

        let id = store.add_client(&sample_client("Grace")).unwrap();
        let after = store.list(TableKind::Clients).unwrap();

        assert_eq!(after.rows.len(), before.rows.len() + 1);
        let row = after
            .rows
            .iter()
            .find(|r| r[0].as_deref() == Some(&id.to_string()))
            .expect("inserted row missing");
        assert_eq!(row[1].as_deref(), Some("Grace"));
        assert_eq!(row[2].as_deref(), Some("555-0100"));
        assert_eq!(row[3].as_deref(), Some("grace@example.com"));
    }

    #[test]
    fn test_ids_increase_monotonically() {
        let (_dir, store) = temp_store();
        let a = store.add_client(&sample_client("Ada")).unwrap();
        let b = store.add_client(&sample_client("Grace")).unwrap();
        assert!(b > a);

        // AUTOINCREMENT: ids are not reused after deleting the newest row
        store.delete(TableKind::Clients, b).unwrap();
        let c = store.add_client(&sample_client("Joan")).unwrap();
        assert!(c > b);
    }

    #[test]
    fn test_update_changes_single_cell() {
        let (_dir, store) = temp_store();
        let a = store.add_client(&sample_client("Ada")).unwrap();
        let b = store.add_client(&sample_client("Grace")).unwrap();

        store
            .update(TableKind::Clients, b, "contact", "555-0199")
            .unwrap();

        let data = store.list(TableKind::Clients).unwrap();
        let row_a = data
            .rows
            .iter()
            .find(|r| r[0].as_deref() == Some(&a.to_string()))
            .unwrap();
        let row_b = data
            .rows
            .iter()
            .find(|r| r[0].as_deref() == Some(&b.to_string()))
            .unwrap();

        assert_eq!(row_b[2].as_deref(), Some("555-0199"));
        assert_eq!(row_b[1].as_deref(), Some("Grace"));
        assert_eq!(row_a[2].as_deref(), Some("555-0100"));
    }

    #[test]
    fn test_update_unknown_column_rejected() {
        let (_dir, store) = temp_store();
        let id = store.add_client(&sample_client("Ada")).unwrap();
        let before = store.list(TableKind::Clients).unwrap();

        let err = store
            .update(TableKind::Clients, id, "specialization", "Tax")
            .unwrap_err();
        assert!(matches!(err, Error::UnknownColumn { .. }));

        let after = store.list(TableKind::Clients).unwrap();
        assert_eq!(before.rows, after.rows);
    }

    #[test]
    fn test_update_missing_id_is_success() {
        let (_dir, store) = temp_store();
        store.add_client(&sample_client("Ada")).unwrap();
        store
            .update(TableKind::Clients, 9999, "name", "Nobody")
            .unwrap();
        let data = store.list(TableKind::Clients).unwrap();
        assert_eq!(data.rows.len(), 1);
        assert_eq!(data.rows[0][1].as_deref(), Some("Ada"));
    }

    #[test]
    fn test_delete_removes_exactly_one_row() {
        let (_dir, store) = temp_store();
        let a = store.add_client(&sample_client("Ada")).unwrap();
        let b = store.add_client(&sample_client("Grace")).unwrap();

        store.delete(TableKind::Clients, a).unwrap();

        let data = store.list(TableKind::Clients).unwrap();
        assert_eq!(data.rows.len(), 1);
        assert_eq!(data.rows[0][0].as_deref(), Some(&*b.to_string()));
    }

    #[test]
    fn test_delete_missing_id_is_success() {
        let (_dir, store) = temp_store();
        store.add_client(&sample_client("Ada")).unwrap();
        store.delete(TableKind::Clients, 9999).unwrap();
        assert_eq!(store.list(TableKind::Clients).unwrap().rows.len(), 1);
    }

    #[test]
    fn test_schema_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docket.db");

        let store = RecordStore::open(&path).unwrap();
        let id = store.add_client(&sample_client("Ada")).unwrap();
        drop(store);

        // Reopening runs the schema statements again; data survives
        let reopened = RecordStore::open(&path).unwrap();
        let data = reopened.list(TableKind::Clients).unwrap();
        assert_eq!(data.rows.len(), 1);
        assert_eq!(data.rows[0][0].as_deref(), Some(&*id.to_string()));
    }

    #[test]
    fn test_dangling_case_reference_tolerated() {
        let (_dir, store) = temp_store();
        let client_id = store.add_client(&sample_client("Ada")).unwrap();
        store
            .add_case(&NewCase {
                title: "Estate of Ada".to_string(),
                client_id: Some(client_id),
                status: Some("open".to_string()),
                ..Default::default()
            })
            .unwrap();

        store.delete(TableKind::Clients, client_id).unwrap();

        // The case still lists, reference intact
        let cases = store.list(TableKind::Cases).unwrap();
        assert_eq!(cases.rows.len(), 1);
        assert_eq!(cases.rows[0][2].as_deref(), Some(&*client_id.to_string()));
    }

    #[test]
    fn test_null_cells_listed_as_none() {
        let (_dir, store) = temp_store();
        store
            .add_client(&NewClient {
                name: "Ada".to_string(),
                contact: None,
                email: None,
            })
            .unwrap();
        let data = store.list(TableKind::Clients).unwrap();
        assert_eq!(data.rows[0][2], None);
        assert_eq!(data.rows[0][3], None);
    }

    #[test]
    fn test_counts_follow_adds_and_deletes() {
        let (_dir, store) = temp_store();
        let counts = store.counts().unwrap();
        assert_eq!(
            (counts.clients, counts.lawyers, counts.cases),
            (0, 0, 0)
        );

        let id = store.add_client(&sample_client("Ada")).unwrap();
        store
            .add_case(&NewCase {
                title: "Estate of Ada".to_string(),
                ..Default::default()
            })
            .unwrap();
        let counts = store.counts().unwrap();
        assert_eq!((counts.clients, counts.lawyers, counts.cases), (1, 0, 1));

        store.delete(TableKind::Clients, id).unwrap();
        assert_eq!(store.counts().unwrap().clients, 0);
    }
}
