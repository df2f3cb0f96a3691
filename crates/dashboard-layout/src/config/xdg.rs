//! Platform-aware path resolution for dashboard-layout.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/dashboard-layout` or `~/.config/dashboard-layout`
//! - Layout data: `$XDG_DATA_HOME/dashboard-layout` or `~/.local/share/dashboard-layout`
//!
//! On **macOS**, uses Apple conventions with XDG env var overrides:
//! - Config: `$XDG_CONFIG_HOME/dashboard-layout` or `~/Library/Application Support/dashboard-layout`
//! - Layout data: `$XDG_DATA_HOME/dashboard-layout` or `~/Library/Application Support/dashboard-layout`

use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "dashboard-layout";

/// Returns the configuration directory for dashboard-layout.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/dashboard-layout` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.config/dashboard-layout`
///    - macOS: `~/Library/Application Support/dashboard-layout`
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_config_dir().join(APP_NAME)
}

/// Platform-native config base directory (without XDG override).
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::home_dir()
            .map(|home| home.join(".config"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Returns the path to the main configuration file.
///
/// Resolves to `config_dir()/config.toml`.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns the layout file path for a configured `store.path` value.
///
/// An empty value selects the default data location
/// (see [`widget_layout::default_layout_path`]); anything else is
/// tilde-expanded.
pub fn layout_path(configured: &str) -> PathBuf {
    if configured.trim().is_empty() {
        widget_layout::default_layout_path()
    } else {
        expand_tilde(configured)
    }
}

/// Expands a leading `~` in a path string to the user's home directory.
///
/// If the path does not start with `~`, or no home directory is known, it is
/// returned as-is.
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        (None, Some(home)) if path == "~" => home,
        _ => PathBuf::from(path),
    }
}

/// Creates a directory and all parent directories with mode 0700.
///
/// Equivalent to `mkdir -p` with restricted permissions.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper: run a closure with env vars temporarily set, then restore.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let originals: Vec<_> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        f();

        for (k, original) in &originals {
            match original {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_path_with_xdg_override() {
        with_env(&[("XDG_CONFIG_HOME", Some("/custom/config"))], || {
            assert_eq!(
                config_path(),
                PathBuf::from("/custom/config/dashboard-layout/config.toml")
            );
        });
    }

    #[test]
    #[serial]
    fn test_config_path_without_xdg_uses_platform_default() {
        with_env(&[("XDG_CONFIG_HOME", None)], || {
            let expected = platform_config_dir().join("dashboard-layout/config.toml");
            assert_eq!(config_path(), expected);
        });
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    #[serial]
    fn test_linux_config_default_is_dot_config() {
        with_env(&[("XDG_CONFIG_HOME", None)], || {
            let home = dirs::home_dir().expect("could not determine home directory");
            assert_eq!(config_dir(), home.join(".config/dashboard-layout"));
        });
    }

    #[test]
    #[serial]
    fn test_layout_path_empty_uses_xdg_data_home() {
        with_env(&[("XDG_DATA_HOME", Some("/custom/data"))], || {
            assert_eq!(
                layout_path(""),
                PathBuf::from("/custom/data/dashboard-layout/layout.json")
            );
        });
    }

    #[test]
    fn test_layout_path_explicit_value() {
        assert_eq!(
            layout_path("/srv/dash/layout.json"),
            PathBuf::from("/srv/dash/layout.json")
        );
    }

    #[test]
    fn test_layout_path_expands_tilde() {
        let home = dirs::home_dir().expect("could not determine home directory");
        assert_eq!(layout_path("~/dash.json"), home.join("dash.json"));
    }

    #[test]
    fn test_expand_tilde_variants() {
        let home = dirs::home_dir().expect("could not determine home directory");
        assert_eq!(expand_tilde("~"), home);
        assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
        assert_eq!(expand_tilde("relative/path"), PathBuf::from("relative/path"));
    }

    #[test]
    fn test_ensure_dir_creates_directory_with_permissions() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let nested = tmp.path().join("a/b/c");
        ensure_dir(&nested).expect("ensure_dir failed");
        assert!(nested.is_dir());
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&nested)
                .expect("failed to read metadata")
                .permissions()
                .mode();
            assert_eq!(mode & 0o777, 0o700);
        }
    }
}
