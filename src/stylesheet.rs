//! CSS applied to the panel window and clock label.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{PanelError, Result, config::StylingConfig};

/// Widget name of the panel window, used as CSS id.
pub const WINDOW_NAME: &str = "time_panel_window";

/// Widget name of the clock label, used as CSS id.
pub const LABEL_NAME: &str = "time_label";

/// Generates the stylesheet from the configured colors and font.
pub fn render(styling: &StylingConfig) -> String {
    format!(
        "window#{WINDOW_NAME} {{\n\
         \x20   background-color: {background};\n\
         }}\n\
         label#{LABEL_NAME} {{\n\
         \x20   background-color: {label_background};\n\
         \x20   color: {text_color};\n\
         \x20   font-size: {font_size}px;\n\
         \x20   font-weight: {font_weight};\n\
         }}\n",
        background = styling.background,
        label_background = styling.label_background,
        text_color = styling.text_color,
        font_size = styling.font_size,
        font_weight = styling.font_weight,
    )
}

/// Resolves the configured external stylesheet path against `base_dir`.
pub fn stylesheet_path(styling: &StylingConfig, base_dir: Option<&Path>) -> Option<PathBuf> {
    let path = styling.stylesheet.as_ref()?;

    match base_dir {
        Some(dir) if path.is_relative() => Some(dir.join(path)),
        _ => Some(path.clone()),
    }
}

/// Reads an external stylesheet.
///
/// # Errors
/// Returns error if the file cannot be read
pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| PanelError::io(e, path))
}

/// Returns the CSS for `styling`.
///
/// An external stylesheet replaces the generated one; if it cannot be read
/// the generated CSS is used instead.
pub fn load(styling: &StylingConfig, base_dir: Option<&Path>) -> String {
    let Some(path) = stylesheet_path(styling, base_dir) else {
        return render(styling);
    };

    match read(&path) {
        Ok(css) => {
            debug!(path = %path.display(), "Loaded stylesheet");
            css
        }
        Err(e) => {
            warn!(error = %e, "Falling back to generated stylesheet");
            render(styling)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn default_render_targets_named_widgets() {
        let css = render(&StylingConfig::default());

        assert!(css.contains("window#time_panel_window {"));
        assert!(css.contains("label#time_label {"));
        assert!(css.contains("background-color: red;"));
        assert!(css.contains("background-color: yellow;"));
        assert!(css.contains("color: black;"));
        assert!(css.contains("font-size: 28px;"));
        assert!(css.contains("font-weight: bold;"));
    }

    #[test]
    fn render_uses_configured_values() {
        let styling = StylingConfig {
            background: "rgba(30, 30, 46, 0.95)".to_string(),
            font_size: 14,
            ..StylingConfig::default()
        };
        let css = render(&styling);

        assert!(css.contains("background-color: rgba(30, 30, 46, 0.95);"));
        assert!(css.contains("font-size: 14px;"));
    }

    #[test]
    fn relative_stylesheet_resolves_against_base_dir() {
        let styling = StylingConfig {
            stylesheet: Some(PathBuf::from("panel.css")),
            ..StylingConfig::default()
        };

        assert_eq!(
            stylesheet_path(&styling, Some(Path::new("/home/u/.config/wpanel"))),
            Some(PathBuf::from("/home/u/.config/wpanel/panel.css"))
        );
        assert_eq!(stylesheet_path(&StylingConfig::default(), None), None);
    }

    #[test]
    fn external_stylesheet_replaces_generated() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("panel.css"), "label { color: white; }").unwrap();
        let styling = StylingConfig {
            stylesheet: Some(PathBuf::from("panel.css")),
            ..StylingConfig::default()
        };

        assert_eq!(load(&styling, Some(dir.path())), "label { color: white; }");
    }

    #[test]
    fn missing_stylesheet_falls_back_to_generated() {
        let dir = TempDir::new().unwrap();
        let styling = StylingConfig {
            stylesheet: Some(PathBuf::from("missing.css")),
            ..StylingConfig::default()
        };

        assert_eq!(load(&styling, Some(dir.path())), render(&styling));
    }
}
