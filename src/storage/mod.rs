//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite file with tables:
//! - clients(client_id, name, contact, email)
//! - lawyers(lawyer_id, name, specialization, contact)
//! - cases(case_id, title, client_id, lawyer_id, status, description)
//!
//! The case reference columns are declared foreign keys but are not
//! enforced; dangling references are displayed as-is.

pub mod schema;
pub mod store;

pub use store::{RecordStore, TableCounts};
