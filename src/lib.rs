//! # Docket - Law practice record manager
//!
//! Three related tables (clients, lawyers, cases) in a single-file SQLite
//! store, browsed and edited from the terminal.
//!
//! Docket provides:
//! - A record store exposing list/add/update/delete per table
//! - An interactive table-rotation browser for the terminal
//! - One-shot CLI subcommands for scripted callers and other front ends

pub mod browser;
pub mod config;
pub mod record;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use record::{NewCase, NewClient, NewLawyer, TableData, TableKind};
pub use storage::{RecordStore, TableCounts};

/// Result type alias for docket operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for docket operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Unknown column '{column}' for table {table}")]
    UnknownColumn { table: TableKind, column: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
