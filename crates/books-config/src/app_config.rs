//! Application configuration
//!
//! Configuration loaded from .books-page.toml file.

use crate::config_file::{load_config_file, ConfigFile};
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable overriding `api_url`
pub const API_URL_ENV: &str = "BOOKS_API_URL";

/// Application configuration loaded from .books-page.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the books API; the in-memory service is used when unset
    #[serde(default)]
    pub api_url: Option<String>,

    /// Number of status messages kept in the page history
    #[serde(default = "default_status_history")]
    pub status_history: usize,
}

fn default_status_history() -> usize {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            status_history: default_status_history(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults.
    ///
    /// `BOOKS_API_URL` takes precedence over the file's `api_url`.
    pub fn load() -> Self {
        let config = Self::from_file(load_config_file());
        config.with_api_url_override(env::var(API_URL_ENV).ok())
    }

    fn from_file(file: Option<ConfigFile>) -> Self {
        if let Some(file) = file {
            match toml::from_str(&file.content) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", file.path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {}", file.path.display(), e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Replace `api_url` when an override is given and not blank
    pub fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            log::debug!("Using API URL from {}", API_URL_ENV);
            self.api_url = Some(url);
        }
        self
    }
}
