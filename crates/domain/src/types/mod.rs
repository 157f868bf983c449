//! Domain types and models

pub mod auth;
pub mod http;
pub mod product;

pub use auth::{AuthFailure, AuthResult, Credentials, TokenResponse};
pub use http::HttpMethod;
pub use product::{CatalogEntry, Product, ProductDraft};
