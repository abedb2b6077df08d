use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Status options offered by the form, first one is the default
    #[serde(default = "default_statuses")]
    pub statuses: Vec<String>,
    /// No timeout unless set
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_server_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_statuses() -> Vec<String> {
    vec!["active".to_string(), "inactive".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            log_level: default_log_level(),
            statuses: default_statuses(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load from the platform config dir, writing defaults on first run.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            log::info!("No config at {}, writing defaults", config_path.display());
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;

        log::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "Invalid log level: '{}'. Must be one of: {}",
                self.log_level,
                valid_log_levels.join(", ")
            )));
        }

        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "Invalid server_url: '{}'. Must start with http:// or https://",
                self.server_url
            )));
        }

        if self.statuses.is_empty() || self.statuses.iter().any(|s| s.trim().is_empty()) {
            return Err(Error::Config(
                "statuses must list at least one non-empty option".to_string(),
            ));
        }

        if self.request_timeout_secs == Some(0) {
            return Err(Error::Config(
                "request_timeout_secs must be at least 1 when set".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(config_path, contents)?;

        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "game-crud")
            .ok_or_else(|| Error::Config("Failed to determine project directories".to_string()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// The status selected by a freshly reset form.
    pub fn default_status(&self) -> &str {
        self.statuses.first().map(String::as_str).unwrap_or_default()
    }
}
