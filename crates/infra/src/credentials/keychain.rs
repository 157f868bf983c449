//! Keychain-backed credential store
//!
//! Persists the client's credentials in the platform store (macOS Keychain,
//! Windows Credential Manager, the Linux kernel keyring) under a single
//! service name, one entry per key. The backing store is selected by the
//! target-specific `keyring` features in this crate's manifest.

use keyring::Entry;
use leema_core::CredentialStore;
use leema_domain::{LeemaError, Result};
use tracing::debug;

use crate::errors::InfraError;

/// Default keychain service name
pub const DEFAULT_KEYCHAIN_SERVICE: &str = "Leema.catalog";

/// Credential store backed by the platform keychain
pub struct KeychainCredentialStore {
    service_name: String,
}

impl KeychainCredentialStore {
    /// Create a store scoped to `service_name` (e.g. "Leema.catalog")
    pub fn new(service_name: impl Into<String>) -> Self {
        Self { service_name: service_name.into() }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    fn entry(&self, key: &str) -> Result<Entry> {
        Entry::new(&self.service_name, key).map_err(|e| LeemaError::from(InfraError::from(e)))
    }
}

impl Default for KeychainCredentialStore {
    fn default() -> Self {
        Self::new(DEFAULT_KEYCHAIN_SERVICE)
    }
}

impl CredentialStore for KeychainCredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        debug!(service = %self.service_name, key = %key, "Retrieving credential from keychain");

        match self.entry(key)?.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(InfraError::from(e).into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        debug!(service = %self.service_name, key = %key, "Storing credential in keychain");

        self.entry(key)?.set_password(value).map_err(|e| LeemaError::from(InfraError::from(e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        debug!(service = %self.service_name, key = %key, "Deleting credential from keychain");

        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(InfraError::from(e).into()),
        }
    }
}
