//! # Leema Core
//!
//! Port definitions for the remote catalog client - no infrastructure
//! dependencies.
//!
//! This crate contains:
//! - The transport port and its request/response value types
//! - Credential storage and auth event ports
//! - Header handling shared by every transport
//!
//! ## Architecture Principles
//! - Only depends on `leema-domain`
//! - No HTTP, keychain or runtime code
//! - All external collaborators via traits

pub mod auth;
pub mod catalog;

pub use auth::ports::{AuthEventSink, CredentialStore};
pub use catalog::headers::Headers;
pub use catalog::ports::{ApiRequest, ApiResponse, RequestOptions, Transport};
