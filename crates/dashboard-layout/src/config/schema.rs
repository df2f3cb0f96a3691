//! TOML configuration schema types for dashboard-layout.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so a partial or empty file is valid. Unknown keys are
//! ignored.

use serde::{Deserialize, Serialize};
use widget_layout::Validation;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// Corresponds to the full TOML file structure:
/// ```toml
/// [store]
/// [logging]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Layout storage and validation settings.
    pub store: StoreConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Layout store configuration from the `[store]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the layout file. Empty string means the default data location.
    pub path: String,
    /// How submitted layouts are checked.
    pub validation: ValidationMode,
    /// Allowed renderer component names. Empty allows any name.
    /// Only consulted in strict mode.
    pub components: Vec<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            validation: ValidationMode::Strict,
            components: Vec::new(),
        }
    }
}

impl StoreConfig {
    /// Builds the store validation policy from this section.
    pub fn validation_policy(&self) -> Validation {
        match self.validation {
            ValidationMode::Strict => Validation::Strict {
                components: self.components.clone(),
            },
            ValidationMode::Permissive => Validation::Permissive,
        }
    }
}

/// Validation modes (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Reject duplicate or empty ids, empty components and zero-sized widgets.
    Strict,
    /// Accept any layout verbatim.
    Permissive,
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Logging configuration from the `[logging]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Logging verbosity, overridden by `DASHBOARD_LOG`.
    pub level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
        }
    }
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings (default).
    Warn,
    /// Informational messages.
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
