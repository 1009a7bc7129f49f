use serde::{Deserialize, Serialize};

/// Window title and geometry of the panel.
///
/// The `fallback_*` values are used whenever monitor geometry is not
/// followed or cannot be determined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PanelConfig {
    /// Window title.
    pub title: String,

    /// Panel height in pixels. Never taken from the monitor.
    pub height: i32,

    /// Size the panel to the monitor width and origin when one is found.
    pub follow_monitor: bool,

    /// Width used without monitor geometry.
    pub fallback_width: i32,

    /// Horizontal offset used without monitor geometry.
    pub fallback_x: i32,

    /// Vertical offset used without monitor geometry.
    pub fallback_y: i32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: "Test Panel".to_string(),
            height: 100,
            follow_monitor: true,
            fallback_width: 300,
            fallback_x: 50,
            fallback_y: 50,
        }
    }
}
