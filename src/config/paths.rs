use std::{env, fs, path::PathBuf};

use crate::{PanelError, Result};

/// Locates configuration and log directories.
///
/// Follows the XDG Base Directory specification for the config directory.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns the configuration directory path for the application
    ///
    /// - First checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    /// - Appends "wpanel" to the base config directory
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is set
    pub fn config_dir() -> Result<PathBuf> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                PanelError::ConfigDir(
                    "neither XDG_CONFIG_HOME nor HOME environment variable found".to_string(),
                )
            })?;

        Ok(PathBuf::from(config_home).join("wpanel"))
    }

    /// Returns the path to the main configuration file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    pub fn main_config() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the log directory, creating it if needed
    ///
    /// # Errors
    /// Returns error if `HOME` is unset or the directory cannot be created
    pub fn log_dir() -> Result<PathBuf> {
        let home = env::var("HOME")
            .map_err(|_| PanelError::ConfigDir("HOME environment variable not found".to_string()))?;
        let log_dir = PathBuf::from(home).join(".wpanel").join("logs");

        if !log_dir.exists() {
            fs::create_dir_all(&log_dir).map_err(|e| PanelError::io(e, &log_dir))?;
        }

        Ok(log_dir)
    }
}
