//! Product catalog client
//!
//! - [`RemoteCatalogClient`]: barcode lookup and login over a [`Transport`]
//!   or, in local mode, against [`FixtureStore`]
//! - [`LocalSimulator`]: latency plus fixture answers for local mode
//!
//! [`Transport`]: leema_core::Transport

pub mod client;
pub mod errors;
pub mod fixtures;
pub mod simulator;

pub use client::{RemoteCatalogClient, RemoteCatalogClientBuilder};
pub use errors::{ApiError, ApiErrorCategory, FixtureError};
pub use fixtures::{seed_products, FixtureStore};
pub use simulator::LocalSimulator;
