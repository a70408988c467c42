use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use lazy_static::lazy_static;

use crate::config::paths;
use crate::error::GrindError;

/// Environment variable that overrides `api_base_url`
pub const API_URL_ENV: &str = "GRINDLC_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the catalog backend, without trailing slash
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Viewports at or below this width use the mobile page size
    pub mobile_breakpoint: u32,
    pub mobile_page_size: usize,
    pub desktop_page_size: usize,
    /// Owner of server-side favorites
    pub user_id: String,
    /// Number of (filter, sort) results kept in the memo
    pub filter_cache_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_base_url: "http://localhost:3003/api".to_string(),
            request_timeout_secs: 30,
            mobile_breakpoint: 768,
            mobile_page_size: 10,
            desktop_page_size: 20,
            user_id: "default".to_string(),
            filter_cache_capacity: 32,
        }
    }
}

impl AppConfig {
    /// Parse a TOML document; missing keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, GrindError> {
        let mut config: AppConfig = toml::from_str(content)?;
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file is absent or broken.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => {
                    tracing::info!(path = ?path, "Loaded app config");
                    config
                }
                Err(e) => {
                    tracing::warn!(path = ?path, error = %e, "Failed to parse config.toml, using defaults");
                    AppConfig::default()
                }
            },
            Err(e) => {
                tracing::debug!(path = ?path, error = %e, "No config.toml, using defaults");
                AppConfig::default()
            }
        }
    }

    /// Apply environment overrides on top of the file values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                tracing::info!(api_base_url = %url, "{} set, overriding config", API_URL_ENV);
                self.api_base_url = url.trim_end_matches('/').to_string();
            }
        }
        self
    }

    /// Page size for a viewport of the given width
    pub fn page_size_for_width(&self, width: u32) -> usize {
        if width <= self.mobile_breakpoint {
            self.mobile_page_size
        } else {
            self.desktop_page_size
        }
    }
}

lazy_static! {
    static ref APP_CONFIG: AppConfig =
        AppConfig::load_from(&paths::config_path()).with_env_overrides();
}

/// Get the cached configuration (loaded once on first access)
pub fn get_app_config() -> &'static AppConfig {
    &APP_CONFIG
}
