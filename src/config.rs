use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::export::DEFAULT_EXPORT_FILE;
use crate::source::SourceConfig;

pub const DEFAULT_DATABASE_FILE: &str = "candidates.db";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8501;
/// hh.ru caps `per_page` at 100
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub database: PathBuf,
    pub export_path: PathBuf,
    pub api: SourceConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE_FILE),
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            api: SourceConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl TrackerConfig {
    /// Overlay environment variables on top of file values.
    ///
    /// `lookup` is `std::env::var(..).ok()` in the binary; tests pass a map.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("HH_API_TOKEN").filter(|t| !t.is_empty()) {
            self.api.token = token;
        }
        if let Some(url) = lookup("RESUME_TRACKER_API_URL") {
            self.api.url = url;
        }
        if let Some(db) = lookup("RESUME_TRACKER_DATABASE") {
            self.database = PathBuf::from(db);
        }
        if let Some(export) = lookup("RESUME_TRACKER_EXPORT") {
            self.export_path = PathBuf::from(export);
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.api.url.trim().is_empty() {
            return Err(crate::Error::Config("api.url must not be empty".to_string()));
        }
        if self.api.page_size == 0 || self.api.page_size > MAX_PAGE_SIZE {
            return Err(crate::Error::Config(format!(
                "api.page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.api.page_size
            )));
        }
        Ok(())
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("resume-tracker.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<TrackerConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: TrackerConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &TrackerConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = load_config(Some(&dir.path().join("nope.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume-tracker.toml");
        std::fs::write(&path, "database = \"data/hr.db\"\n\n[api]\npage_size = 25\n").unwrap();

        let config = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(config.database, PathBuf::from("data/hr.db"));
        assert_eq!(config.api.page_size, 25);
        assert_eq!(config.api.url, crate::source::DEFAULT_API_URL);
        assert_eq!(config.export_path, PathBuf::from(DEFAULT_EXPORT_FILE));
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn test_write_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume-tracker.toml");
        let mut config = TrackerConfig::default();
        config.api.token = "secret".to_string();

        write_config(&path, &config, false).unwrap();
        assert!(write_config(&path, &config, false).is_err());
        write_config(&path, &config, true).unwrap();

        assert_eq!(load_config(Some(&path)).unwrap(), Some(config));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("HH_API_TOKEN", "from-env"),
            ("RESUME_TRACKER_DATABASE", "/tmp/other.db"),
        ]);
        let mut config = TrackerConfig::default();
        config.api.token = "from-file".to_string();

        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.token, "from-env");
        assert_eq!(config.database, PathBuf::from("/tmp/other.db"));
        assert_eq!(config.export_path, PathBuf::from(DEFAULT_EXPORT_FILE));
    }

    #[test]
    fn test_validate_page_size() {
        let mut config = TrackerConfig::default();
        assert!(config.validate().is_ok());

        config.api.page_size = 0;
        assert!(matches!(config.validate(), Err(crate::Error::Config(_))));

        config.api.page_size = 101;
        assert!(config.validate().is_err());
    }
}
