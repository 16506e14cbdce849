//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Config;

/// Commented config written by `floater init`; parses to `Config::default()`
pub const DEFAULT_CONFIG: &str = r#"# Floater configuration
# =====================

[floater]
# How long (ms) a book or chapter has to stay under the finger before it opens
long_press_delay_ms = 650

# Separator line under this book index in the book grid.
# 38 is the last Old Testament book in the protestant 66-book ordering;
# turn the line off for canons ordered differently.
testament_boundary = 38
show_testament_separator = true

# Inner padding (points) between the window edge and the grid
padding = 8.0

# Margin (points) around the highlighted label
bleed = 4.0

# Size of the passive labels relative to the row height
passive_scale = 0.9

# Alpha of the dark overlay (0-255)
overlay_alpha = 255
"#;

impl Config {
    /// Get the global config directory path (<config dir>/floater/)
    pub fn global_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("floater")
    }

    /// Get the global config file path (<config dir>/floater/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Write the commented default config to `path`
    pub fn write_default(path: &Path) -> Result<()> {
        write_atomic(path, DEFAULT_CONFIG)
    }
}

/// Write through a temp file that is renamed over the target, creating the
/// parent directory if needed
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;
    }

    let temp_path = path.with_extension("toml.tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write config content")?;

    temp_file
        .sync_all()
        .with_context(|| "Failed to sync config file")?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_matches_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_write_default_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::write_default(&path).unwrap();

        assert!(!path.with_extension("toml.tmp").exists());
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());
    }
}
