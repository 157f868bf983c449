//! # Leema Domain
//!
//! Business domain types and models for the Leema catalog client.
//!
//! This crate contains:
//! - Catalog and authentication data types (CatalogEntry, Product, AuthResult)
//! - Domain error types and Result definitions
//! - Client configuration structures
//! - Endpoint and header constants
//!
//! ## Architecture
//! - No dependencies on other Leema crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
