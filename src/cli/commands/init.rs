use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use super::{CommandResult, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default configuration into `dir`.
///
/// Refuses to overwrite an existing config file.
pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(CommandResult::Init(InitSummary {
        config_path: CONFIG_FILE_NAME.to_string(),
    }))
}
