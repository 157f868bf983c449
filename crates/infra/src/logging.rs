//! Tracing subscriber setup
//!
//! The library only emits `tracing` events; binaries and tests that want to
//! see them call [`init`] once. `RUST_LOG` overrides the default level.

use leema_domain::{LeemaError, Result};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

fn filter(default_directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| LeemaError::Config(format!("Invalid log filter '{default_directive}': {e}")))
}

/// Install a global subscriber.
///
/// # Errors
/// Returns `LeemaError::Config` when the filter is invalid or a global
/// subscriber is already installed.
pub fn init_with(format: LogFormat, default_directive: &str) -> Result<()> {
    let registry = tracing_subscriber::registry().with(filter(default_directive)?);

    let installed = match format {
        LogFormat::Compact => registry.with(fmt::layer().compact().with_target(true)).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json().with_current_span(true)).try_init(),
    };

    installed.map_err(|e| LeemaError::Config(format!("Failed to install subscriber: {e}")))
}

/// Install the compact formatter at [`DEFAULT_LOG_FILTER`]; a no-op if a
/// subscriber is already set.
pub fn init() {
    if let Err(e) = init_with(LogFormat::Compact, DEFAULT_LOG_FILTER) {
        tracing::debug!(error = %e, "logging already initialised");
    }
}

/// Install the JSON formatter; a no-op if a subscriber is already set.
pub fn init_json() {
    if let Err(e) = init_with(LogFormat::Json, DEFAULT_LOG_FILTER) {
        tracing::debug!(error = %e, "logging already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init();
        init();
        init_json();
    }

    #[test]
    fn invalid_directive_is_config_error() {
        // RUST_LOG wins over the default when set, so only assert when it is not.
        if std::env::var("RUST_LOG").is_err() {
            assert!(matches!(filter("leema=notalevel"), Err(LeemaError::Config(_))));
        }
    }
}
