//! Spreadsheet export
//!
//! Writes candidates as CSV, one row per candidate, with the same columns
//! as the candidates table. The destination is always overwritten.

use std::path::Path;
use crate::Result;
use crate::candidate::Candidate;

/// Default export file, relative to the working directory
pub const DEFAULT_EXPORT_FILE: &str = "candidates.csv";

/// Header row, in table column order
pub const EXPORT_HEADER: [&str; 6] = ["id", "name", "email", "experience", "status", "salary"];

/// Write `rows` to `destination`. An empty slice produces a header-only file.
pub fn export(rows: &[Candidate], destination: &Path) -> Result<()> {
    // Headers are written by hand so an empty export still has them.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(destination)?;

    writer.write_record(EXPORT_HEADER)?;
    for candidate in rows {
        writer.serialize((
            candidate.id,
            &candidate.name,
            &candidate.email,
            candidate.experience,
            candidate.status.as_str(),
            &candidate.salary,
        ))?;
    }
    writer.flush()?;

    tracing::info!("Exported {} candidates to {}", rows.len(), destination.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::CandidateStatus;
    use tempfile::TempDir;

    fn candidate(id: i64, name: &str, status: CandidateStatus) -> Candidate {
        Candidate {
            id,
            name: name.to_string(),
            email: "N/A".to_string(),
            experience: 5,
            status,
            salary: "200000".to_string(),
        }
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("candidates.csv");

        export(&[], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "id,name,email,experience,status,salary\n");
    }

    #[test]
    fn test_export_rows_and_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("candidates.csv");
        std::fs::write(&path, "stale contents that must disappear\n").unwrap();

        export(
            &[
                candidate(1, "Anna", CandidateStatus::New),
                candidate(2, "Smith, John", CandidateStatus::Interview),
            ],
            &path,
        )
        .unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), EXPORT_HEADER.to_vec());

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[1][1], "Smith, John");
        assert_eq!(&records[1][4], "Interview");
        assert!(!std::fs::read_to_string(&path).unwrap().contains("stale"));
    }

    #[test]
    fn test_unwritable_destination_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("candidates.csv");

        assert!(export(&[], &path).is_err());
    }
}
