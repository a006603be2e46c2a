//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite file with one table:
//! - candidates(id, name, email, experience, status, salary)

pub mod schema;
pub mod sqlite;

pub use schema::ensure_schema;
pub use sqlite::SqliteStore;
