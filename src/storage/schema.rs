//! Database schema definitions

use rusqlite::Connection;
use crate::Result;

/// SQL to create the candidates table
///
/// AUTOINCREMENT keeps ids monotonic: SQLite never hands out an id again,
/// even after the highest row is gone.
pub const CREATE_CANDIDATES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS candidates (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    experience INTEGER NOT NULL DEFAULT 0 CHECK (experience >= 0),
    status TEXT NOT NULL DEFAULT 'New'
        CHECK (status IN ('New', 'Shortlisted', 'Rejected', 'Interview')),
    salary TEXT NOT NULL
)
"#;

/// Column order shared by every SELECT against `candidates`
pub const CANDIDATE_COLUMNS: &str = "id, name, email, experience, status, salary";

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_CANDIDATES_TABLE]
}

/// Create the candidates table if it is missing. Safe to call on every start.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    for stmt in all_schema_statements() {
        conn.execute(stmt, [])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_count(conn: &Connection) -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'candidates'",
            [],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        ensure_schema(&conn).unwrap();
        ensure_schema(&conn).unwrap();

        assert_eq!(table_count(&conn), 1);
    }

    #[test]
    fn test_status_check_rejects_unknown_values() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO candidates (name, email, experience, status, salary) VALUES ('a', 'b', 1, 'Hired', 'N/A')",
            [],
        );
        assert!(result.is_err());
    }
}
