use crate::candidate::Candidate;
use crate::ui::theme;
use owo_colors::OwoColorize;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct CandidateRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Email")]
    pub email: String,
    #[tabled(rename = "Years")]
    pub experience: u32,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Salary")]
    pub salary: String,
}

impl CandidateRow {
    fn from_candidate(candidate: &Candidate, colored: bool) -> Self {
        let status = if colored {
            candidate
                .status
                .as_str()
                .style(theme().stage(candidate.status))
                .to_string()
        } else {
            candidate.status.as_str().to_string()
        };

        Self {
            id: candidate.id,
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            experience: candidate.experience,
            status,
            salary: candidate.salary.clone(),
        }
    }
}

/// Render candidates as a rounded table; empty input renders nothing
pub fn candidates_table(candidates: &[Candidate], colored: bool) -> String {
    if candidates.is_empty() {
        return String::new();
    }

    let rows: Vec<CandidateRow> = candidates
        .iter()
        .map(|c| CandidateRow::from_candidate(c, colored))
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::CandidateStatus;

    #[test]
    fn test_table_lists_every_candidate() {
        let candidates = vec![
            Candidate {
                id: 1,
                name: "Anna".to_string(),
                email: "anna@example.com".to_string(),
                experience: 2,
                status: CandidateStatus::Shortlisted,
                salary: "N/A".to_string(),
            },
            Candidate {
                id: 2,
                name: "Boris".to_string(),
                email: "N/A".to_string(),
                experience: 7,
                status: CandidateStatus::New,
                salary: "250000".to_string(),
            },
        ];

        let rendered = candidates_table(&candidates, false);
        assert!(rendered.contains("Anna"));
        assert!(rendered.contains("Shortlisted"));
        assert!(rendered.contains("250000"));
        assert!(rendered.contains("Status"));
    }

    #[test]
    fn test_empty_table_is_blank() {
        assert!(candidates_table(&[], false).is_empty());
    }
}
