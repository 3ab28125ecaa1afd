//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::Result;

const ENV_DATABASE_PATH: &str = "KNIGHTS_DATABASE_PATH";
const ENV_SESSIONS_URL: &str = "KNIGHTS_SESSIONS_URL";
const ENV_REQUEST_TIMEOUT: &str = "KNIGHTS_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the preferences database file
    pub database_path: PathBuf,
    /// Where the session schedule JSON is served from
    pub sessions_url: String,
    /// HTTP timeout for schedule fetches
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("knights.db"),
            sessions_url: knights_session::DEFAULT_SESSIONS_URL.to_string(),
            request_timeout_secs: 10,
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Knights"))
            .unwrap_or_else(|| PathBuf::from(".knights"))
    }

    /// Default configuration with `KNIGHTS_*` environment overrides applied
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load a JSON config file; missing fields are an error
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        serde_json::from_str(&raw).map_err(|e| {
            CoreError::Config(format!("{}: {e}", path.as_ref().display()))
        })
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DATABASE_PATH).filter(|s| !s.trim().is_empty()) {
            self.database_path = PathBuf::from(path);
        }

        if let Some(url) = lookup(ENV_SESSIONS_URL).filter(|s| !s.trim().is_empty()) {
            self.sessions_url = url.trim().to_string();
        }

        if let Some(timeout) = lookup(ENV_REQUEST_TIMEOUT) {
            self.request_timeout_secs = timeout.trim().parse().map_err(|_| {
                CoreError::Config(format!("{ENV_REQUEST_TIMEOUT} must be a number: {timeout}"))
            })?;
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

// Platform data directory lookup
mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
