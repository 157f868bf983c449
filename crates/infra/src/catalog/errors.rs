//! Catalog client error types
//!
//! Classifies every non-success outcome of a catalog request. "Not found"
//! is deliberately absent: a 404 or a fixture miss is `Ok(None)`.

use leema_domain::LeemaError;
use thiserror::Error;

/// Categories of API errors for logging and caller decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Credential rejected (401, 403)
    Authentication,
    /// Any other non-success status
    Server,
    /// Connection, timeout or unreadable response
    Network,
    /// Request could not be built
    Config,
}

/// Catalog request errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Authorization error ({status}). Please login again.")]
    Unauthorized { status: u16 },

    #[error("API Error: {status}")]
    Server { status: u16 },

    #[error("Connection error: {0}")]
    Transport(String),

    #[error("Connection error: malformed response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Unauthorized { .. } => ApiErrorCategory::Authentication,
            Self::Server { .. } => ApiErrorCategory::Server,
            Self::Transport(_) | Self::Decode(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// HTTP status behind this error, when there is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status } | Self::Server { status } => Some(*status),
            Self::Transport(_) | Self::Decode(_) | Self::Config(_) => None,
        }
    }
}

impl From<LeemaError> for ApiError {
    fn from(err: LeemaError) -> Self {
        match err {
            LeemaError::Config(message) => Self::Config(message),
            LeemaError::InvalidInput(message) => Self::Decode(message),
            LeemaError::Auth(message) => Self::Transport(format!("authentication: {message}")),
            LeemaError::Network(message)
            | LeemaError::Storage(message)
            | LeemaError::NotFound(message)
            | LeemaError::Internal(message) => Self::Transport(message),
        }
    }
}

/// Rejections from the local fixture store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    #[error("Invalid product data: barcode and sku_name are required")]
    InvalidProduct,

    #[error("Product with barcode {0} already exists")]
    DuplicateBarcode(String),
}
