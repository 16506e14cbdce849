//! Init command implementation

use std::path::Path;

use anyhow::{Result, bail};
use tracing::info;

use floater::config::Config;

/// Write the default config to `config_path` (or the global config path)
pub fn init_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::write_default(&config_path)?;
    info!("Wrote default config to {}", config_path.display());
    println!("Created: {}", config_path.display());

    Ok(())
}
