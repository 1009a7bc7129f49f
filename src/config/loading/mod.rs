mod circular_detection;
mod merging;

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use circular_detection::CircularDetector;
use merging::merge_toml_configs;
use toml::Value;
use tracing::{debug, info, warn};

use super::Config;
use crate::{PanelError, Result};

impl Config {
    /// Loads a configuration file with support for importing other TOML files
    ///
    /// Imports are listed in a top-level `imports` array using the `@` prefix,
    /// e.g. `imports = ["@theme"]`. Imported configurations are merged with the
    /// importing file, which wins on conflicts.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file cannot be read
    /// - The TOML content is invalid
    /// - Any imported files cannot be loaded
    /// - The merged configuration is invalid
    /// - Circular imports are detected
    pub fn load_with_imports(path: &Path) -> Result<Config> {
        let canonical_path = path.canonicalize().map_err(|e| PanelError::IoError {
            path: path.to_path_buf(),
            details: format!("Failed to resolve path: {e}"),
        })?;

        let mut detector = CircularDetector::new();
        Self::load_config_with_tracking(&canonical_path, &mut detector)
    }

    /// Loads `path`, falling back to defaults when it is absent or broken.
    ///
    /// The panel must start without a configuration file, so errors are
    /// logged instead of returned. The file is never created.
    pub fn load_or_default(path: &Path) -> Config {
        if !path.exists() {
            info!(path = %path.display(), "No config file, using defaults");
            return Config::default();
        }

        match Self::load_with_imports(path) {
            Ok(config) => {
                debug!(path = %path.display(), "Loaded config");
                config
            }
            Err(e) => {
                warn!(error = %e, "Invalid config, using defaults");
                Config::default()
            }
        }
    }

    /// Recursively collects all configuration files involved in imports.
    ///
    /// Each file is listed once even if imported multiple times. Missing
    /// files are still listed so they can be watched for creation.
    ///
    /// # Errors
    /// Returns error if any existing file cannot be read or contains invalid TOML
    pub fn get_all_config_files(path: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut visited = HashSet::new();

        Self::collect_config_files(path, &mut files, &mut visited)?;
        Ok(files)
    }

    fn load_config_with_tracking(path: &Path, detector: &mut CircularDetector) -> Result<Config> {
        let merged = Self::load_imported_file_with_tracking(path, detector)?;

        merged
            .try_into()
            .map_err(|e| PanelError::ConfigValidation {
                component: "config parsing".to_string(),
                details: format!("Configuration validation failed: {e}"),
            })
    }

    fn load_all_imports(
        base_path: &Path,
        import_paths: &[String],
        detector: &mut CircularDetector,
    ) -> Result<Vec<Value>> {
        import_paths
            .iter()
            .map(|import_path| {
                let resolved_path = Self::resolve_import_path(base_path, import_path)?;
                let canonical_import = resolved_path
                    .canonicalize()
                    .map_err(|e| PanelError::import(e, &resolved_path))?;

                Self::load_imported_file_with_tracking(&canonical_import, detector)
            })
            .collect()
    }

    fn load_imported_file_with_tracking(
        path: &Path,
        detector: &mut CircularDetector,
    ) -> Result<Value> {
        detector.detect_circular_import(path)?;
        detector.push_to_chain(path);

        let result = Self::load_toml_file_with_imports(path, detector);
        detector.pop_from_chain();
        result
    }

    fn load_toml_file_with_imports(path: &Path, detector: &mut CircularDetector) -> Result<Value> {
        let content = fs::read_to_string(path).map_err(|e| PanelError::import(e, path))?;
        let mut value: Value =
            toml::from_str(&content).map_err(|e| PanelError::toml_parse(e, Some(path)))?;

        let import_paths = Self::extract_import_paths(&value);
        let imported_configs = Self::load_all_imports(path, &import_paths, detector)?;

        if let Value::Table(table) = &mut value {
            table.remove("imports");
        }

        Ok(merge_toml_configs(imported_configs, value))
    }

    fn extract_import_paths(value: &Value) -> Vec<String> {
        let Some(Value::Array(imports)) = value.get("imports") else {
            return Vec::new();
        };

        imports
            .iter()
            .filter_map(|v| v.as_str())
            .filter_map(|s| s.strip_prefix('@'))
            .map(str::to_owned)
            .collect()
    }

    fn resolve_import_path(base_path: &Path, import_path: &str) -> Result<PathBuf> {
        let parent_dir = base_path.parent().ok_or_else(|| PanelError::ImportError {
            path: base_path.to_path_buf(),
            details: "Invalid base path - no parent directory".to_string(),
        })?;

        let mut import_path_buf = PathBuf::from(import_path);
        if import_path_buf.extension().is_none() {
            import_path_buf.set_extension("toml");
        }

        Ok(parent_dir.join(import_path_buf))
    }

    fn collect_config_files(
        path: &Path,
        files: &mut Vec<PathBuf>,
        visited: &mut HashSet<PathBuf>,
    ) -> Result<()> {
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !visited.insert(canonical.clone()) {
            return Ok(());
        }
        files.push(canonical);

        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| PanelError::io(e, path))?;
            let value: Value =
                toml::from_str(&content).map_err(|e| PanelError::toml_parse(e, Some(path)))?;

            for import_path in Self::extract_import_paths(&value) {
                let resolved = Self::resolve_import_path(path, &import_path)?;
                Self::collect_config_files(&resolved, files, visited)?;
            }
        }

        Ok(())
    }
}
