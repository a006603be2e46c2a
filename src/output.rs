//! How chatty the CLI is

use std::sync::OnceLock;

/// Set to `1`/`true`/`quiet` to print only command results
pub const QUIET_ENV: &str = "RESUME_TRACKER_QUIET";

static MODE: OnceLock<OutputMode> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Banners, section titles and info lines
    #[default]
    Chatty,
    /// Results and warnings only
    Quiet,
}

impl OutputMode {
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v == "1" || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("quiet") => {
                OutputMode::Quiet
            }
            _ => OutputMode::Chatty,
        }
    }
}

pub fn output_mode() -> OutputMode {
    *MODE.get_or_init(|| OutputMode::from_env_value(std::env::var(QUIET_ENV).ok().as_deref()))
}

pub fn is_quiet() -> bool {
    output_mode() == OutputMode::Quiet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_values() {
        assert_eq!(OutputMode::from_env_value(Some("1")), OutputMode::Quiet);
        assert_eq!(OutputMode::from_env_value(Some("TRUE")), OutputMode::Quiet);
        assert_eq!(OutputMode::from_env_value(Some(" quiet ")), OutputMode::Quiet);
    }

    #[test]
    fn test_anything_else_is_chatty() {
        assert_eq!(OutputMode::from_env_value(None), OutputMode::Chatty);
        assert_eq!(OutputMode::from_env_value(Some("0")), OutputMode::Chatty);
        assert_eq!(OutputMode::from_env_value(Some("")), OutputMode::Chatty);
    }
}
