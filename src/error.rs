use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Error types for the panel.
///
/// Covers configuration loading, stylesheet reading and file watching.
/// Monitor lookup and clock formatting have no error path.
#[derive(Error, Debug)]
pub enum PanelError {
    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Import operation error with file context
    #[error("failed to import '{path}': {details}")]
    ImportError {
        /// Path of file being imported
        path: PathBuf,
        /// Import error details
        details: String,
    },

    /// Config directory could not be determined from the environment
    #[error("cannot locate config directory: {0}")]
    ConfigDir(String),

    /// File watcher setup or registration failed
    #[error("file watcher error: {0}")]
    Watch(#[from] notify::Error),
}

/// A specialized `Result` type for panel operations.
pub type Result<T> = result::Result<T, PanelError>;

impl PanelError {
    /// Creates a TOML parsing error with optional file path context.
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        PanelError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an import error with file path context.
    pub fn import(error: impl fmt::Display, path: &Path) -> Self {
        let clean_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        PanelError::ImportError {
            path: clean_path,
            details: error.to_string(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io(error: io::Error, path: &Path) -> Self {
        PanelError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
