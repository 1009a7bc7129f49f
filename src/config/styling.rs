use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Styling of the panel window and clock label.
///
/// When `stylesheet` is set the file replaces the generated CSS entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StylingConfig {
    /// External CSS file; relative paths resolve against the config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<PathBuf>,

    /// Window background color
    pub background: String,

    /// Label background color
    pub label_background: String,

    /// Label text color
    pub text_color: String,

    /// Font size in pixels
    pub font_size: u16,

    /// CSS font weight, e.g. "bold" or "600"
    pub font_weight: String,
}

impl Default for StylingConfig {
    fn default() -> Self {
        Self {
            stylesheet: None,
            background: "red".to_string(),
            label_background: "yellow".to_string(),
            text_color: "black".to_string(),
            font_size: 28,
            font_weight: "bold".to_string(),
        }
    }
}
