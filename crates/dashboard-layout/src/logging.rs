//! Logging initialization for dashlayout.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `DASHBOARD_LOG` environment variable, falling back to the configured
//! `[logging] level`. Records emitted by the layout store through the `log`
//! facade are picked up by the same subscriber.
//!
//! # Usage
//!
//! ```bash
//! # Configured level (default: warn)
//! dashlayout list
//!
//! # Debug level
//! DASHBOARD_LOG=debug dashlayout list
//!
//! # Module-specific filtering
//! DASHBOARD_LOG=widget_layout=debug,warn dashlayout reset
//! ```

use crate::config::schema::LogLevel;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "DASHBOARD_LOG";

/// Builds the filter: `DASHBOARD_LOG` if set and valid, else `fallback`.
pub fn build_filter(fallback: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback.as_directive()))
}

/// Initialize the tracing subscriber.
///
/// Output goes to stderr so command output on stdout stays parseable.
/// Calling this more than once keeps the first subscriber.
pub fn init(fallback: LogLevel) {
    let _ = fmt()
        .with_env_filter(build_filter(fallback))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn env_filter_parses_valid_directives() {
        for level in [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ] {
            let filter = EnvFilter::try_new(level.as_directive());
            assert!(filter.is_ok(), "failed to parse directive: {:?}", level);
        }
    }

    #[test]
    fn env_filter_parses_module_directive() {
        assert!(EnvFilter::try_new("widget_layout=debug,warn").is_ok());
    }

    #[test]
    #[serial]
    fn build_filter_prefers_env_var() {
        let original = std::env::var(LOG_ENV_VAR).ok();
        std::env::set_var(LOG_ENV_VAR, "trace");
        let filter = build_filter(LogLevel::Error);
        match original {
            Some(v) => std::env::set_var(LOG_ENV_VAR, v),
            None => std::env::remove_var(LOG_ENV_VAR),
        }
        assert!(filter.to_string().contains("trace"));
    }

    #[test]
    #[serial]
    fn build_filter_falls_back_to_configured_level() {
        let original = std::env::var(LOG_ENV_VAR).ok();
        std::env::remove_var(LOG_ENV_VAR);
        let filter = build_filter(LogLevel::Info);
        if let Some(v) = original {
            std::env::set_var(LOG_ENV_VAR, v);
        }
        assert!(filter.to_string().contains("info"));
    }
}
