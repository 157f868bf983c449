//! Credential store adapters
//!
//! - [`KeychainCredentialStore`]: platform keychain via the `keyring` crate
//! - [`MemoryCredentialStore`]: process-local map for tests and embedders

pub mod keychain;
pub mod memory;

pub use keychain::KeychainCredentialStore;
pub use memory::MemoryCredentialStore;
