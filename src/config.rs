use crate::error::{ConfigErrorKind, InfraError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_CONTENT_DIR: &str = "content";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf, // e.g. "content"
    #[serde(default = "default_log_filter")]
    pub log_filter: String, // e.g. "adventurelib=debug"
}

fn default_content_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CONTENT_DIR)
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InfraError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| InfraError::Config {
            path: path.to_path_buf(),
            source: ConfigErrorKind::Read(e),
        })?;
        toml::from_str(&data).map_err(|e| InfraError::Config {
            path: path.to_path_buf(),
            source: ConfigErrorKind::Parse(e),
        })
    }

    pub fn from_env() -> Result<Self, InfraError> {
        let _ = dotenvy::from_filename(".env");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InfraError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let content_dir = match lookup("CONTENT_DIR") {
            Some(v) if v.trim().is_empty() => return Err(invalid_env("CONTENT_DIR", "must not be empty")),
            Some(v) => PathBuf::from(v),
            None => default_content_dir(),
        };
        let log_filter = lookup("LOG_FILTER")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_log_filter);

        Ok(Self { content_dir, log_filter })
    }
}

fn invalid_env(key: &str, reason: &str) -> InfraError {
    InfraError::Config {
        path: PathBuf::from(".env"),
        source: ConfigErrorKind::InvalidEnv(key.to_string(), reason.to_string()),
    }
}
