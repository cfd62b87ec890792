// Configuration type definitions

use serde::Deserialize;

/// Size limit used when neither the environment nor the config file sets one
pub const DEFAULT_MAX_BYTES: usize = 100_000;

/// Interpreter used for `-e` commands by default
pub const DEFAULT_SHELL: &str = "bash";

/// Capture configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct CaptureConfig {
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

fn default_max_bytes() -> usize {
    DEFAULT_MAX_BYTES
}

impl Default for CaptureConfig {
    fn default() -> Self {
        CaptureConfig {
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

/// Exec configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ExecConfig {
    #[serde(default = "default_shell")]
    pub shell: String,
}

fn default_shell() -> String {
    DEFAULT_SHELL.to_string()
}

impl Default for ExecConfig {
    fn default() -> Self {
        ExecConfig {
            shell: default_shell(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub exec: ExecConfig,
}
