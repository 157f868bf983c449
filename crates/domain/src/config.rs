//! Configuration management

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{LeemaError, Result};

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SIMULATED_LATENCY_MS,
};

/// Remote catalog client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin prepended to every endpoint in real-network mode
    pub base_url: String,
    /// Credential sent as `X-API-Key`
    #[serde(skip_serializing)]
    pub auth_token: Option<String>,
    /// Serve requests from the in-memory fixture store instead of the network
    pub local_mode: bool,
    /// Per-request timeout in real-network mode; must be non-zero
    pub request_timeout_secs: u64,
    /// Artificial latency applied to every simulated response
    pub simulated_latency_ms: u64,
}

impl ClientConfig {
    /// Configuration targeting a real server at `base_url`.
    pub fn remote(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), local_mode: false, ..Self::default() }
    }

    /// Configuration for the fixture-backed local mode.
    pub fn local() -> Self {
        Self { local_mode: true, ..Self::default() }
    }

    /// Check values that would make every request fail.
    ///
    /// # Errors
    /// Returns `LeemaError::Config` when `request_timeout_secs` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            return Err(LeemaError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_token: None,
            local_mode: true,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
        }
    }
}
