//! Configuration module
//!
//! Locates the kdcli home directory and handles loading and saving of the
//! config.toml settings file. A missing settings file means defaults.

mod types;

pub use types::{Config, Health, Schedule};

use crate::error::{KdcliError, Result};
use crate::payload::{TemperatureRange, TimeOffsets};
use std::fs;
use std::path::{Path, PathBuf};

const HOME_ENV: &str = "KDCLI_HOME";
const API_URL_ENV: &str = "KDCLI_API_URL";

/// Directory holding config.toml and session.json
pub fn home_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(HOME_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    dirs::home_dir()
        .map(|home| home.join(".kdcli"))
        .ok_or_else(|| {
            KdcliError::Config(format!(
                "Cannot determine home directory. Set {} instead.",
                HOME_ENV
            ))
        })
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(home_dir()?.join("config.toml"))
}

pub fn default_session_path() -> Result<PathBuf> {
    Ok(home_dir()?.join("session.json"))
}

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        KdcliError::Config(format!(
            "Cannot read config from '{}': {}. Run 'kdcli config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Load settings for a command run: file if present, defaults otherwise,
/// then environment overrides. Invalid schedules are rejected here.
pub fn resolve(path: &Path) -> Result<Config> {
    let mut config = if path.exists() {
        load(path)?
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Config::default()
    };

    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.is_empty() {
            config.api.base_url = url;
        }
    }

    validate(&config)?;
    Ok(config)
}

/// Check that the schedule and temperature settings are usable
pub fn validate(config: &Config) -> Result<()> {
    TimeOffsets::from_schedule(&config.schedule)?;
    TemperatureRange::from_health(&config.health)?;

    if !(-12..=14).contains(&config.schedule.utc_offset_hours) {
        return Err(KdcliError::Config(format!(
            "utc_offset_hours out of range: {}",
            config.schedule.utc_offset_hours
        )));
    }

    Ok(())
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| KdcliError::Config(format!("Failed to serialize config: {}", e)))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}
