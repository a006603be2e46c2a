//! # Resume Tracker - candidate tracking for hh.ru resume searches
//!
//! Pulls resume summaries from the hh.ru search API, keeps them in a local
//! SQLite file and lets a reviewer walk them through a small hiring pipeline.
//!
//! Resume Tracker provides:
//! - Normalization of raw hh.ru resume items into a fixed candidate shape
//! - SQLite-backed storage with an idempotent schema
//! - Status updates restricted to New / Shortlisted / Rejected / Interview
//! - CSV spreadsheet export of the whole candidate table
//! - A web form UI and a CLI over the same operations

pub mod candidate;
pub mod storage;
pub mod source;
pub mod export;
pub mod tracker;
pub mod config;
pub mod server;
pub mod output;
pub mod ui;


// Re-exports for convenient access
pub use candidate::{Candidate, CandidateStatus, NewCandidate};
pub use storage::SqliteStore;
pub use source::{HhResumeSource, RawResume, ResumeSource};
pub use tracker::Tracker;

/// Result type alias for Resume Tracker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Resume Tracker operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export error: {0}")]
    Export(#[from] csv::Error),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
