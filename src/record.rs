//! Record types for the three docket tables.
//!
//! The browser rotates through the tables in a fixed order:
//! clients -> lawyers -> cases -> clients.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The three record tables docket manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Clients,
    Lawyers,
    Cases,
}

impl TableKind {
    /// Get the SQL table name
    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Clients => "clients",
            TableKind::Lawyers => "lawyers",
            TableKind::Cases => "cases",
        }
    }

    /// All tables, in browser rotation order
    pub fn all() -> &'static [TableKind] {
        &[TableKind::Clients, TableKind::Lawyers, TableKind::Cases]
    }

    /// Column names, id column first (matches the on-disk schema order)
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            TableKind::Clients => &["client_id", "name", "contact", "email"],
            TableKind::Lawyers => &["lawyer_id", "name", "specialization", "contact"],
            TableKind::Cases => &[
                "case_id",
                "title",
                "client_id",
                "lawyer_id",
                "status",
                "description",
            ],
        }
    }

    /// The auto-assigned primary key column
    pub fn id_column(&self) -> &'static str {
        self.columns()[0]
    }

    /// Columns offered for editing (everything but the id column)
    pub fn editable_columns(&self) -> &'static [&'static str] {
        &self.columns()[1..]
    }

    /// Check whether `column` is one of this table's columns
    pub fn has_column(&self, column: &str) -> bool {
        self.columns().contains(&column)
    }

    /// Next table in rotation order (wraps around)
    pub fn next(&self) -> TableKind {
        match self {
            TableKind::Clients => TableKind::Lawyers,
            TableKind::Lawyers => TableKind::Cases,
            TableKind::Cases => TableKind::Clients,
        }
    }

    /// Previous table in rotation order (wraps around)
    pub fn prev(&self) -> TableKind {
        match self {
            TableKind::Clients => TableKind::Cases,
            TableKind::Lawyers => TableKind::Clients,
            TableKind::Cases => TableKind::Lawyers,
        }
    }
}

impl FromStr for TableKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "clients" | "client" => Ok(TableKind::Clients),
            "lawyers" | "lawyer" => Ok(TableKind::Lawyers),
            "cases" | "case" => Ok(TableKind::Cases),
            _ => Err(Error::UnknownTable(s.to_string())),
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A client record to insert (id is assigned by the store)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub contact: Option<String>,
    pub email: Option<String>,
}

/// A lawyer record to insert (id is assigned by the store)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewLawyer {
    pub name: String,
    pub specialization: Option<String>,
    pub contact: Option<String>,
}

/// A case record to insert (id is assigned by the store).
///
/// `client_id` and `lawyer_id` are soft references: the store does not
/// check that they point at existing rows, and readers display whatever
/// is stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCase {
    pub title: String,
    pub client_id: Option<i64>,
    pub lawyer_id: Option<i64>,
    pub status: Option<String>,
    pub description: Option<String>,
}

/// Column metadata plus stringified rows, as returned by `RecordStore::list`.
///
/// Every cell is the SQL value rendered to text; NULL is `None`.
#[derive(Debug, Clone, Serialize)]
pub struct TableData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl TableData {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
