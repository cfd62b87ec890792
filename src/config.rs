// Configuration module for rcp
// This module handles loading ~/.config/rcp/config.toml and resolving the
// settings the capture pipeline runs with

mod types;

pub use types::{CaptureConfig, Config, DEFAULT_MAX_BYTES, DEFAULT_SHELL, ExecConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::capture::resolve_shell;

/// Environment variable overriding the size limit
pub const MAX_BYTES_ENV: &str = "RCOPY_MAX_BYTES";

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Values the capture pipeline needs, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub max_bytes: usize,
    pub shell: PathBuf,
}

impl Settings {
    /// Resolve settings from the config file and the process environment
    pub fn resolve(config: &Config) -> Self {
        let env_value = std::env::var(MAX_BYTES_ENV).ok();
        let max_bytes = resolve_max_bytes(env_value.as_deref(), config);
        let shell = resolve_shell(&config.exec.shell);

        #[cfg(debug_assertions)]
        log::debug!("Resolved limit {} bytes, shell {:?}", max_bytes, shell);

        Settings { max_bytes, shell }
    }
}

/// Pick the size limit: a positive environment override, then a positive
/// config value, then the default
pub fn resolve_max_bytes(env_value: Option<&str>, config: &Config) -> usize {
    env_value
        .and_then(parse_positive)
        .or(Some(config.capture.max_bytes).filter(|n| *n > 0))
        .unwrap_or(DEFAULT_MAX_BYTES)
}

fn parse_positive(value: &str) -> Option<usize> {
    value.parse::<usize>().ok().filter(|n| *n > 0)
}

/// Loads configuration from ~/.config/rcp/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            #[cfg(debug_assertions)]
            log::debug!("Config parsed successfully: {:?}", config);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/rcp/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("rcp")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
