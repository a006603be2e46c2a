//! Tracker - the fetch → insert → load → export cycle
//!
//! Both the web UI and the CLI go through [`Tracker`]. It keeps no state
//! between calls beyond its configuration: every method reads or writes
//! the store directly.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use crate::Result;
use crate::candidate::{Candidate, CandidateStatus};
use crate::config::TrackerConfig;
use crate::export;
use crate::source::{self, FetchFailure, HhResumeSource, ResumeSource};
use crate::storage::SqliteStore;

/// What a fetch did
#[derive(Debug, Clone)]
pub struct FetchReport {
    pub query: String,
    /// Ids of the rows created, in search order
    pub inserted: Vec<i64>,
    pub failure: Option<FetchFailure>,
}

impl FetchReport {
    pub fn saved(&self) -> usize {
        self.inserted.len()
    }
}

/// What an export wrote
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub path: PathBuf,
    pub rows: usize,
}

#[derive(Clone)]
pub struct Tracker {
    store: SqliteStore,
    source: Arc<dyn ResumeSource>,
    export_path: PathBuf,
}

impl Tracker {
    pub fn new(store: SqliteStore, source: Arc<dyn ResumeSource>, export_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            source,
            export_path: export_path.into(),
        }
    }

    /// Open the configured store (creating the schema) and wire up hh.ru
    pub fn from_config(config: &TrackerConfig) -> Result<Self> {
        config.validate()?;
        let store = SqliteStore::open(&config.database)?;
        let source = HhResumeSource::new(config.api.clone());
        Ok(Self::new(store, Arc::new(source), config.export_path.clone()))
    }

    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    /// Search, normalize, and append every result as a `New` candidate.
    ///
    /// A failed search stores nothing and reports the reason on the
    /// returned report instead of erroring.
    pub fn fetch_and_store(&self, query: &str) -> Result<FetchReport> {
        let outcome = self.source.search(query);
        let candidates = source::normalize_all(&outcome.items);
        let inserted = self.store.insert_many(&candidates)?;

        tracing::info!("Saved {} candidates for '{}'", inserted.len(), query);
        Ok(FetchReport {
            query: query.to_string(),
            inserted,
            failure: outcome.failure,
        })
    }

    pub fn candidates(&self) -> Result<Vec<Candidate>> {
        self.store.load_all()
    }

    /// Returns false when no candidate has that id
    pub fn set_status(&self, id: i64, status: CandidateStatus) -> Result<bool> {
        let changed = self.store.update_status(id, status)?;
        if changed > 0 {
            tracing::info!("Candidate {} moved to {}", id, status);
        }
        Ok(changed > 0)
    }

    /// Export the current table to the configured destination
    pub fn export(&self) -> Result<ExportReport> {
        self.export_to(&self.export_path)
    }

    pub fn export_to(&self, destination: &Path) -> Result<ExportReport> {
        let rows = self.store.load_all()?;
        export::export(&rows, destination)?;
        Ok(ExportReport {
            path: destination.to_path_buf(),
            rows: rows.len(),
        })
    }
}
