//! Configuration for abrao
//!
//! Loaded from an optional TOML file:
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//! timeout_secs = 30
//! max_search_results = 10
//!
//! [ui]
//! dark_mode = false
//! sidebar_open = true
//!
//! [export]
//! directory = "/home/me/Downloads"
//! ```
//!
//! `ABRAO_API_URL` overrides `api.base_url`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "ABRAO_API_URL";

/// Client-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbraoConfig {
    /// Backend connection settings
    pub api: ApiConfig,
    /// Initial view flags
    pub ui: UiConfig,
    /// Where exported documents are written
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Upper bound for name-search suggestions
    pub max_search_results: u32,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
            max_search_results: 10,
            user_agent: format!("abrao/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub dark_mode: bool,
    pub sidebar_open: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sidebar_open: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub directory: Option<PathBuf>,
}

impl AbraoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AbraoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// `<config_dir>/abrao/config.toml`
    pub fn standard_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("abrao").join("config.toml"))
    }

    /// Load the standard config file, falling back to defaults when absent.
    pub fn load_standard() -> Result<Self, ConfigError> {
        match Self::standard_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from {:?}", path);
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// `apply_env`).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Directory exports are saved to: configured, else downloads, else cwd.
    pub fn export_dir(&self) -> PathBuf {
        self.export
            .directory
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "api.base_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.api.max_search_results == 0 {
            return Err(ConfigError::Invalid {
                field: "api.max_search_results".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
