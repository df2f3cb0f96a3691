//! Command implementations for the dashlayout CLI.
//!
//! This module contains all command handler functions, organized by domain:
//! - `layout` - Reading and editing the stored widget layout
//! - `render` - Text and JSON output of widget collections
//!
//! Handlers are generic over the layout backend and return their output as
//! strings, so `main` decides where it goes.

pub mod layout;
pub mod render;

use std::path::{Path, PathBuf};
use thiserror::Error;
use widget_layout::{EditError, FileBackend, LayoutStore, PersistError, ValidationError};

use crate::config::error::ConfigError;
use crate::config::schema::Config;
use crate::config::xdg;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded or written.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The requested edit is not allowed.
    #[error(transparent)]
    Edit(#[from] EditError),

    /// The resulting layout failed validation.
    #[error("Layout rejected: {0}")]
    Validation(#[from] ValidationError),

    /// The stored record could not be changed.
    #[error(transparent)]
    Persist(#[from] PersistError),

    /// An import or export file could not be accessed.
    #[error("Failed to access {path}: {source}")]
    File {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Imported content is not a widget list.
    #[error("Invalid widget list: {0}")]
    InvalidImport(String),
}

/// Resolves the layout file: explicit override, then `store.path`, then the
/// default data location.
pub fn resolve_layout_path(config: &Config, layout_override: Option<&Path>) -> PathBuf {
    match layout_override {
        Some(path) => path.to_path_buf(),
        None => xdg::layout_path(&config.store.path),
    }
}

/// Opens the file-backed layout store described by `config`.
pub fn open_store(config: &Config, layout_override: Option<&Path>) -> LayoutStore<FileBackend> {
    let path = resolve_layout_path(config, layout_override);
    tracing::debug!("Opening layout store at {}", path.display());
    LayoutStore::open_with(FileBackend::new(path), config.store.validation_policy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ValidationMode;
    use widget_layout::{LayoutBackend, Validation};

    #[test]
    fn resolve_prefers_override() {
        let mut config = Config::default();
        config.store.path = "/from/config.json".to_string();
        assert_eq!(
            resolve_layout_path(&config, Some(Path::new("/from/flag.json"))),
            PathBuf::from("/from/flag.json")
        );
        assert_eq!(
            resolve_layout_path(&config, None),
            PathBuf::from("/from/config.json")
        );
    }

    #[test]
    fn open_store_applies_validation_policy() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("layout.json");
        let mut config = Config::default();
        config.store.validation = ValidationMode::Permissive;

        let store = open_store(&config, Some(&path));
        assert_eq!(store.validation(), &Validation::Permissive);
        assert_eq!(store.backend().location(), path.display().to_string());
    }

    #[test]
    fn command_error_wraps_edit_error() {
        let err: CommandError = EditError::UnknownWidget("fax".to_string()).into();
        assert_eq!(err.to_string(), "No widget with id 'fax'");
    }
}
