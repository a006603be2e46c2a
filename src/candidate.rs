//! Candidate types
//!
//! A candidate moves through four pipeline stages:
//! - `New`: just pulled from the resume search
//! - `Shortlisted`: worth a closer look
//! - `Rejected`: dropped from the pipeline
//! - `Interview`: invited to interview

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Pipeline stage of a candidate.
///
/// The set is closed: the database enforces it with a CHECK constraint and
/// every parse from text goes through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CandidateStatus {
    #[default]
    New,
    Shortlisted,
    Rejected,
    Interview,
}

impl CandidateStatus {
    /// Get the string representation stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::New => "New",
            CandidateStatus::Shortlisted => "Shortlisted",
            CandidateStatus::Rejected => "Rejected",
            CandidateStatus::Interview => "Interview",
        }
    }

    /// Get all statuses in pipeline order
    pub fn all() -> &'static [CandidateStatus] {
        &[
            CandidateStatus::New,
            CandidateStatus::Shortlisted,
            CandidateStatus::Rejected,
            CandidateStatus::Interview,
        ]
    }
}

impl FromStr for CandidateStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(CandidateStatus::New),
            "shortlisted" => Ok(CandidateStatus::Shortlisted),
            "rejected" => Ok(CandidateStatus::Rejected),
            "interview" => Ok(CandidateStatus::Interview),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A normalized candidate that has not been stored yet.
///
/// Carries no id and no status: the store assigns the id and every new row
/// starts as [`CandidateStatus::New`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    /// Whole years of experience
    pub experience: u32,
    pub salary: String,
}

impl NewCandidate {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        experience: u32,
        salary: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            experience,
            salary: salary.into(),
        }
    }
}

/// A stored candidate row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Store-assigned id, never reused
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Whole years of experience
    pub experience: u32,
    pub status: CandidateStatus,
    pub salary: String,
}

impl Candidate {
    /// Short one-line label for listings
    pub fn short_description(&self) -> String {
        format!("{} - {} years experience", self.name, self.experience)
    }
}
