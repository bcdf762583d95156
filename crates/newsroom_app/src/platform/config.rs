use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use newsroom_engine::FetchSettings;
use serde::Deserialize;

use super::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "newsroom.ron";
pub const BACKEND_URL_ENV: &str = "NEWSROOM_BACKEND_URL";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend_url: String,
    pub output_dir: PathBuf,
    pub log_destination: LogDestination,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_response_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            backend_url: fetch.base_url,
            output_dir: PathBuf::from("output"),
            log_destination: LogDestination::default(),
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            max_response_bytes: fetch.max_bytes,
        }
    }
}

impl AppConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.backend_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_response_bytes,
        }
    }

    /// Replaces the backend url when the override is set and non-blank.
    pub fn apply_backend_override(&mut self, value: Option<String>) -> bool {
        match value.map(|v| v.trim().to_string()) {
            Some(url) if !url.is_empty() => {
                self.backend_url = url;
                true
            }
            _ => false,
        }
    }
}

/// Where the effective configuration came from. Reported once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File(PathBuf),
    /// No config file; defaults in effect.
    Defaults,
    /// The file existed but could not be used; defaults in effect.
    Rejected { path: PathBuf, reason: String },
}

pub fn load(path: &Path) -> (AppConfig, ConfigOrigin) {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return (AppConfig::default(), ConfigOrigin::Defaults);
        }
        Err(err) => {
            return (
                AppConfig::default(),
                ConfigOrigin::Rejected {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                },
            );
        }
    };

    match ron::from_str::<AppConfig>(&content) {
        Ok(config) => (config, ConfigOrigin::File(path.to_path_buf())),
        Err(err) => (
            AppConfig::default(),
            ConfigOrigin::Rejected {
                path: path.to_path_buf(),
                reason: err.to_string(),
            },
        ),
    }
}
