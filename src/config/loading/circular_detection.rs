use std::path::{Path, PathBuf};

use crate::{PanelError, Result};

/// Tracks the current import chain to reject cycles
pub struct CircularDetector {
    import_chain: Vec<PathBuf>,
}

impl CircularDetector {
    pub fn new() -> Self {
        Self {
            import_chain: Vec::new(),
        }
    }

    /// Returns an error if `path` is already on the import chain
    pub fn detect_circular_import(&self, path: &Path) -> Result<()> {
        if !self.import_chain.iter().any(|p| p == path) {
            return Ok(());
        }

        let chain_display: Vec<String> = self
            .import_chain
            .iter()
            .map(|p| file_label(p))
            .collect();

        Err(PanelError::ConfigValidation {
            component: "import system".to_string(),
            details: format!(
                "Circular import detected: {} -> {}",
                chain_display.join(" -> "),
                file_label(path)
            ),
        })
    }

    pub fn push_to_chain(&mut self, path: &Path) {
        self.import_chain.push(path.to_path_buf());
    }

    pub fn pop_from_chain(&mut self) {
        self.import_chain.pop();
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}
