//! Platform-aware configuration paths for figbridge

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::core::constants::config_files;

/// Get the appropriate configuration directory for the current platform
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(custom_dir) = env::var(config_files::CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(custom_dir));
    }

    dirs::config_dir()
        .map(|p| p.join("figbridge"))
        .context("Unable to determine config directory for the current platform")
}

/// Path of the user-level config file inside the platform config directory
pub fn user_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(config_files::USER_CONFIG))
}

/// Path of the project-local config file, resolved against the current
/// working directory.
pub fn project_config_path() -> PathBuf {
    PathBuf::from(config_files::PROJECT_CONFIG)
}
