//! SQLite storage implementation

use std::path::{Path, PathBuf};
use rusqlite::{Connection, params, OptionalExtension};
use crate::{Result, Error};
use crate::candidate::{Candidate, CandidateStatus, NewCandidate};
use super::schema::{self, CANDIDATE_COLUMNS};

/// SQLite-backed storage for candidates.
///
/// Holds only the database path. Every operation opens its own connection
/// and drops it before returning, so no handle outlives a single call.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Open a database file (creates it and its parent directory if missing)
    /// and make sure the schema exists
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let store = Self { path: path.to_path_buf() };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Run the schema manager against the backing file
    pub fn ensure_schema(&self) -> Result<()> {
        let conn = self.connect()?;
        schema::ensure_schema(&conn)
    }

    // ========== Candidate Operations ==========

    /// Append candidates as new rows and return their ids in input order.
    ///
    /// Status is always stored as `New`; whatever stage the upstream record
    /// claimed is not carried over. No dedup is done against existing rows,
    /// so fetching the same query twice stores the candidates twice.
    ///
    /// The batch is one transaction: if any row fails, none are kept.
    pub fn insert_many(&self, records: &[NewCandidate]) -> Result<Vec<i64>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let mut ids = Vec::with_capacity(records.len());
        {
            let mut stmt = tx.prepare(
                r#"
                INSERT INTO candidates (name, email, experience, status, salary)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )?;

            for record in records {
                stmt.execute(params![
                    record.name,
                    record.email,
                    record.experience,
                    CandidateStatus::New.as_str(),
                    record.salary,
                ])?;
                ids.push(tx.last_insert_rowid());
            }
        }
        tx.commit()?;

        tracing::debug!("Inserted {} candidates into {}", ids.len(), self.path.display());
        Ok(ids)
    }

    /// Load every candidate, ordered by id
    pub fn load_all(&self) -> Result<Vec<Candidate>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates ORDER BY id ASC"
        ))?;

        let candidates = stmt
            .query_map([], row_to_candidate)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(candidates)
    }

    /// Get a candidate by id
    pub fn get(&self, id: i64) -> Result<Option<Candidate>> {
        let conn = self.connect()?;
        conn.query_row(
            &format!("SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE id = ?1"),
            [id],
            row_to_candidate,
        )
        .optional()
        .map_err(Into::into)
    }

    /// Set the status of one candidate.
    ///
    /// Returns the number of rows touched: 1, or 0 when no candidate has
    /// that id. An unknown id is not an error.
    pub fn update_status(&self, id: i64, status: CandidateStatus) -> Result<usize> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE candidates SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )?;

        if changed == 0 {
            tracing::debug!("No candidate with id {}; status left untouched", id);
        }
        Ok(changed)
    }

    /// Count all candidates
    pub fn count(&self) -> Result<usize> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM candidates", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Column names of the candidates table, in declaration order
    pub fn table_columns(&self) -> Result<Vec<String>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("PRAGMA table_info(candidates)")?;
        let columns = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(columns)
    }
}

/// Helper to convert a row to a Candidate
fn row_to_candidate(row: &rusqlite::Row) -> rusqlite::Result<Candidate> {
    let status_str: String = row.get(4)?;
    let status: CandidateStatus = status_str.parse().map_err(|e: Error| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Candidate {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        experience: row.get(3)?,
        status,
        salary: row.get(5)?,
    })
}
