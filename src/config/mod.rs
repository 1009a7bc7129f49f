//! Configuration schema definitions.
//!
//! Defines the optional TOML configuration of the panel: logging, window
//! geometry and styling. Every field has a default so a missing or partial
//! file still yields a complete [`Config`].

mod general;
mod loading;
mod panel;
mod paths;
mod styling;

#[cfg(test)]
mod tests;

pub use general::{GeneralConfig, LogFormat, LogLevel};
pub use panel::PanelConfig;
pub use paths::ConfigPaths;
pub use styling::StylingConfig;

use serde::{Deserialize, Serialize};

/// Main configuration structure for the panel.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Logging settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Window geometry and placement.
    #[serde(default)]
    pub panel: PanelConfig,

    /// Colors, font and optional external stylesheet.
    #[serde(default)]
    pub styling: StylingConfig,
}
