//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use abrao_core::identifiers::normalize_orcid;
use abrao_core::state::Route;
use abrao_core::{is_orcid, AbraoConfig, ConfigError};

/// Abrao - researcher profiles from ORCID
///
/// Search researchers by name or ORCID iD and browse their publications
/// and citation metrics.
#[derive(Parser, Debug)]
#[command(name = "abrao")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Backend base URL (overrides config and ABRAO_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Config file (default: the platform config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Open this researcher's dashboard directly
    #[arg(short, long)]
    pub orcid: Option<String>,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,
}

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("not an ORCID iD: {0}")]
    InvalidOrcid(String),
}

impl Args {
    /// Config file, then environment, then flags.
    pub fn load_config(&self) -> Result<AbraoConfig, StartupError> {
        let mut config = match &self.config {
            Some(path) => AbraoConfig::load(path)?,
            None => AbraoConfig::load_standard()?,
        };
        config.apply_env();
        self.apply_to(&mut config);
        Ok(config)
    }

    pub fn apply_to(&self, config: &mut AbraoConfig) {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if self.dark {
            config.ui.dark_mode = true;
        }
    }

    /// Initial route: the dashboard when `--orcid` was given, else home.
    pub fn start_route(&self) -> Result<Route, StartupError> {
        match &self.orcid {
            None => Ok(Route::Home),
            Some(raw) => {
                let orcid = normalize_orcid(raw);
                if is_orcid(&orcid) {
                    Ok(Route::dashboard(orcid))
                } else {
                    Err(StartupError::InvalidOrcid(raw.clone()))
                }
            }
        }
    }
}
