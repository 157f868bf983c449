//! Port interfaces for credential persistence and auth notifications
//!
//! The client never owns persistent storage or listeners; both are injected
//! so tests and embedders can supply their own.

use leema_domain::{AuthFailure, Result};

/// Trait for persisted credential storage (keychain, browser storage, ...)
pub trait CredentialStore: Send + Sync {
    /// Read a stored credential
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a credential, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a credential; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

/// Trait for observers of authentication failures
pub trait AuthEventSink: Send + Sync {
    /// Called once per rejected non-lookup request
    fn auth_failed(&self, event: &AuthFailure);
}
