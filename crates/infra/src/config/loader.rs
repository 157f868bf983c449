//! Configuration loader
//!
//! Loads the client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `LEEMA_BASE_URL` is missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `LEEMA_BASE_URL`: Remote service origin (required)
//! - `LEEMA_AUTH_TOKEN`: Initial API key
//! - `LEEMA_LOCAL_MODE`: Serve from local fixtures (true/false, default true)
//! - `LEEMA_REQUEST_TIMEOUT_SECS`: Per-request timeout (default 30)
//! - `LEEMA_SIMULATED_LATENCY_MS`: Local-mode latency (default 300)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./leema.json` or `./leema.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../leema.{json,toml}`, `../../leema.{json,toml}`
//! 4. The same names relative to the executable location

use std::path::{Path, PathBuf};

use leema_domain::constants::{DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SIMULATED_LATENCY_MS};
use leema_domain::{ClientConfig, LeemaError, Result};

const CONFIG_FILE_NAMES: [&str; 8] = [
    "leema.json",
    "leema.toml",
    "config.json",
    "config.toml",
    "../leema.json",
    "../leema.toml",
    "../../leema.json",
    "../../leema.toml",
];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the base URL is
/// not set there, falls back to a config file.
///
/// # Errors
/// Returns `LeemaError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
pub fn load() -> Result<ClientConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `LeemaError::Config` if `LEEMA_BASE_URL` is missing, a numeric
/// variable does not parse, or `LEEMA_REQUEST_TIMEOUT_SECS` is zero.
pub fn load_from_env() -> Result<ClientConfig> {
    let base_url = env_var("LEEMA_BASE_URL")?;
    let auth_token = std::env::var("LEEMA_AUTH_TOKEN").ok().filter(|token| !token.is_empty());
    let local_mode = env_bool("LEEMA_LOCAL_MODE", true);
    let request_timeout_secs =
        env_u64("LEEMA_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
    let simulated_latency_ms =
        env_u64("LEEMA_SIMULATED_LATENCY_MS", DEFAULT_SIMULATED_LATENCY_MS)?;

    let config = ClientConfig {
        base_url,
        auth_token,
        local_mode,
        request_timeout_secs,
        simulated_latency_ms,
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is detected by
/// extension.
///
/// # Errors
/// Returns `LeemaError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - `request_timeout_secs` is zero
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(LeemaError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            LeemaError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| LeemaError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content; format follows the extension.
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| LeemaError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| LeemaError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(LeemaError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory (and up to two parents), then the
/// executable's directory.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        LeemaError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional numeric variable, falling back to `default` when unset.
fn env_u64(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|e| LeemaError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
