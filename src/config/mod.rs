//! Configuration loading and management

mod io;
mod settings;

pub use io::DEFAULT_CONFIG;
pub use settings::FloaterSettings;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Selector widget settings
    #[serde(default)]
    pub floater: FloaterSettings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the config from an explicit path, else the global config file,
    /// else defaults.
    ///
    /// An explicit path must exist; a missing global file is not an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            return Self::from_file(&global_path);
        }

        tracing::debug!(
            "No config at {}, using defaults",
            global_path.display()
        );
        Ok(Self::default())
    }
}
