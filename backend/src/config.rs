//! Application configuration.
//!
//! Settings are read from a TOML file and then overridden by environment
//! variables. Every section is optional; missing values take the defaults
//! below.
//!
//! # Environment Variables
//!
//! - `SURF_REPORT_CONFIG`: path of the TOML file (default: search `surf-report.toml`)
//! - `HOST`: server host (default: 0.0.0.0)
//! - `PORT`: server port (default: 8080)
//! - `SEED_FILE`: JSON seed for the local repository
//! - `DEFAULT_TIMEZONE`: zone for spots without a valid timezone

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::db::RepositoryError;
use crate::models::time::DEFAULT_TIMEZONE;
use crate::services::time_windows::TimeWindowTable;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub listing: ListingSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

/// HTTP bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Spot report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_timezone")]
    pub default_timezone: Tz,
    #[serde(default = "default_recent_sessions_limit")]
    pub recent_sessions_limit: usize,
    #[serde(default)]
    pub time_windows: TimeWindowTable,
}

/// Pagination of session and spot listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

/// Storage backend settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timezone() -> Tz {
    DEFAULT_TIMEZONE
}

fn default_recent_sessions_limit() -> usize {
    5
}

fn default_limit() -> usize {
    50
}

fn default_max_limit() -> usize {
    200
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            default_timezone: default_timezone(),
            recent_sessions_limit: default_recent_sessions_limit(),
            time_windows: TimeWindowTable::default(),
        }
    }
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl ListingSettings {
    /// Requested page size, defaulted and clamped to `max_limit`.
    pub fn clamp_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}

impl AppConfig {
    /// Parse configuration from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self, RepositoryError> {
        let config: AppConfig = toml::from_str(content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from `SURF_REPORT_CONFIG` or the first `surf-report.toml` found,
    /// falling back to defaults, then apply environment overrides.
    pub fn load() -> Result<Self, RepositoryError> {
        let explicit = std::env::var("SURF_REPORT_CONFIG").ok().map(PathBuf::from);
        let search_paths = [
            PathBuf::from("surf-report.toml"),
            PathBuf::from("backend/surf-report.toml"),
        ];

        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match search_paths.iter().find(|p| p.exists()) {
                Some(path) => Self::from_file(path)?,
                None => Self::default(),
            },
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Override settings from environment-style lookups.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), RepositoryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| RepositoryError::configuration("PORT must be a valid port number"))?;
        }
        if let Some(seed) = lookup("SEED_FILE") {
            self.storage.seed_file = Some(PathBuf::from(seed));
        }
        if let Some(tz) = lookup("DEFAULT_TIMEZONE") {
            self.report.default_timezone = tz.parse().map_err(|_| {
                RepositoryError::configuration(format!("DEFAULT_TIMEZONE '{}' is not an IANA zone", tz))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), RepositoryError> {
        if self.server.host.trim().is_empty() {
            return Err(RepositoryError::configuration("server.host must not be blank"));
        }
        self.report
            .time_windows
            .validate()
            .map_err(|e| RepositoryError::configuration(e.to_string()))?;
        if self.listing.max_limit == 0 {
            return Err(RepositoryError::configuration("listing.max_limit must be positive"));
        }
        Ok(())
    }
}
