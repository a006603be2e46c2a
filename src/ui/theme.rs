//! Terminal palette for the candidate pipeline

use crate::candidate::CandidateStatus;
use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// One color per pipeline stage
#[derive(Debug, Clone)]
pub struct StageColors {
    pub new: Style,
    pub shortlisted: Style,
    pub rejected: Style,
    pub interview: Style,
}

#[derive(Debug, Clone)]
pub struct Theme {
    /// Command banners and section titles
    pub title: Style,
    /// "N resumes saved", "exported" and other completed actions
    pub saved: Style,
    /// Failed searches and unknown ids
    pub alert: Style,
    /// Left-hand labels of key/value lines
    pub label: Style,
    pub stages: StageColors,
}

impl Theme {
    pub fn for_terminal(colored: bool) -> Self {
        if !colored {
            return Self {
                title: Style::new(),
                saved: Style::new(),
                alert: Style::new(),
                label: Style::new(),
                stages: StageColors {
                    new: Style::new(),
                    shortlisted: Style::new(),
                    rejected: Style::new(),
                    interview: Style::new(),
                },
            };
        }

        Self {
            title: Style::new().blue().bold(),
            saved: Style::new().green().bold(),
            alert: Style::new().yellow().bold(),
            label: Style::new().bright_black(),
            stages: StageColors {
                new: Style::new().bright_blue(),
                shortlisted: Style::new().yellow(),
                rejected: Style::new().red().strikethrough(),
                interview: Style::new().green().bold(),
            },
        }
    }

    pub fn stage(&self, status: CandidateStatus) -> Style {
        match status {
            CandidateStatus::New => self.stages.new.clone(),
            CandidateStatus::Shortlisted => self.stages.shortlisted.clone(),
            CandidateStatus::Rejected => self.stages.rejected.clone(),
            CandidateStatus::Interview => self.stages.interview.clone(),
        }
    }
}

/// Colored when stdout is a terminal, plain otherwise
pub fn theme() -> &'static Theme {
    THEME.get_or_init(|| Theme::for_terminal(console::Term::stdout().is_term()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use owo_colors::OwoColorize;

    #[test]
    fn test_plain_theme_has_no_color_prefix() {
        let theme = Theme::for_terminal(false);
        for status in CandidateStatus::all() {
            let painted = status.as_str().style(theme.stage(*status)).to_string();
            assert!(painted.starts_with(status.as_str()));
        }
    }

    #[test]
    fn test_colored_stages_differ() {
        let theme = Theme::for_terminal(true);
        let rejected = "x".style(theme.stage(CandidateStatus::Rejected)).to_string();
        let interview = "x".style(theme.stage(CandidateStatus::Interview)).to_string();
        assert_ne!(rejected, interview);
        assert!(rejected.contains('\u{1b}'));
    }
}
