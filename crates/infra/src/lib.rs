//! # Leema Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - The catalog client and its local-mode fixtures
//! - The reqwest transport
//! - Keychain and in-memory credential stores
//! - Auth event delivery
//! - Configuration loading and logging setup
//!
//! ## Architecture
//! - Implements traits defined in `leema-core`
//! - Contains all "impure" code (network, keychain, filesystem)

pub mod catalog;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod events;
pub mod http;
pub mod logging;

// Re-export commonly used items
pub use catalog::{
    ApiError, ApiErrorCategory, FixtureError, FixtureStore, LocalSimulator, RemoteCatalogClient,
    RemoteCatalogClientBuilder,
};
pub use credentials::{KeychainCredentialStore, MemoryCredentialStore};
pub use errors::InfraError;
pub use events::{BroadcastAuthEvents, FnAuthEventSink, NoopAuthEvents};
pub use http::{HttpClient, HttpClientBuilder};
