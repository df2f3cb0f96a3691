//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()` and a
//! function to write it to the XDG config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Dashboard Layout Configuration
#
# This file was auto-generated with default values.
# Uncomment and modify options to customize layout storage.
#
# Location: $XDG_CONFIG_HOME/dashboard-layout/config.toml

# ==============================================================================
# Layout Store
# ==============================================================================

[store]

# Path of the layout file.
# Empty string uses $XDG_DATA_HOME/dashboard-layout/layout.json
# Tilde (~) is expanded to the user's home directory.
path = ""

# How submitted layouts are checked before they replace the current one.
# Options: "strict", "permissive"
#   strict     - reject duplicate or empty ids, empty component names and
#                widgets with zero width or height
#   permissive - accept any layout verbatim
validation = "strict"

# Renderer component names accepted in strict mode.
# Empty list accepts any name.
# Example: ["StatsCards", "UnreadMessages", "MissedCalls"]
components = []

# ==============================================================================
# Logging
# ==============================================================================

[logging]

# Logging verbosity level. DASHBOARD_LOG overrides this value.
# Options: "error", "warn", "info", "debug", "trace"
level = "warn"
"#;

// ---------------------------------------------------------------------------
// File creation
// ---------------------------------------------------------------------------

/// Creates (or force-overwrites) the default config file.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(&path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(&path)?;
    Ok(path)
}

/// Writes the default template to `path`, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        xdg::ensure_dir(parent).map_err(write_error)?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_error)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
