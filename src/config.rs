// src/config.rs
//
// Front end configuration
//
// Layers, lowest priority first:
// - built-in defaults
// - JSON file ({CONFIG_DIR}/opkb/config.json, or an explicit path)
// - OPKB_* environment variables (and NO_COLOR)
// - command-line flags (applied by the cli module)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// The API paginates by 10; page counts are derived from this
pub const DEFAULT_PAGE_SIZE: u32 = 10;

pub const ENV_API_URL: &str = "OPKB_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "OPKB_TIMEOUT_SECS";
pub const ENV_PAGE_SIZE: &str = "OPKB_PAGE_SIZE";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub timeout_secs: u64,
    pub page_size: u32,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
            color: true,
        }
    }
}

impl Config {
    /// Default config file location: {CONFIG_DIR}/opkb/config.json
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("opkb").join("config.json"))
    }

    /// Defaults, then the file (explicit path must exist, the default one may not),
    /// then the process environment. Not validated: flags still apply on top.
    pub fn load(explicit_path: Option<&Path>) -> AppResult<Self> {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw).map_err(|e| {
            AppError::Config(format!("invalid config file {}: {}", path.display(), e))
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Override fields from environment variables looked up through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = raw.trim().parse().map_err(|_| {
                AppError::Config(format!("{} must be a number of seconds, got {:?}", ENV_TIMEOUT_SECS, raw))
            })?;
        }
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            self.page_size = raw.trim().parse().map_err(|_| {
                AppError::Config(format!("{} must be a positive integer, got {:?}", ENV_PAGE_SIZE, raw))
            })?;
        }
        // https://no-color.org: any non-empty value disables colour
        if lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
            self.color = false;
        }
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(AppError::Config("API base URL cannot be empty".to_string()));
        }
        if self.page_size == 0 {
            return Err(AppError::Config("page size must be at least 1".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::Config("timeout must be at least 1 second".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://localhost:8000/api/");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "api_base_url": "https://opkb.example/api" }}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.api_base_url, "https://opkb.example/api");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_load_leaves_validation_to_caller() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "page_size": 0 }}"#).unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.page_size, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(env(&[
                (ENV_API_URL, "http://10.0.0.2:8000/api/"),
                (ENV_TIMEOUT_SECS, "5"),
                (ENV_PAGE_SIZE, "25"),
                (ENV_NO_COLOR, "1"),
            ]))
            .unwrap();

        assert_eq!(config.api_base_url, "http://10.0.0.2:8000/api/");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.page_size, 25);
        assert!(!config.color);
    }

    #[test]
    fn test_empty_no_color_is_ignored() {
        let mut config = Config::default();
        config.apply_env(env(&[(ENV_NO_COLOR, "")])).unwrap();
        assert!(config.color);
    }

    #[test]
    fn test_bad_env_value() {
        let mut config = Config::default();
        let err = config.apply_env(env(&[(ENV_PAGE_SIZE, "ten")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = Config {
            page_size: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
