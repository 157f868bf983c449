//! Conversions from external infrastructure errors into domain errors.

use keyring::Error as KeyringError;
use leema_domain::LeemaError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub LeemaError);

impl From<InfraError> for LeemaError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<LeemaError> for InfraError {
    fn from(value: LeemaError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoLeemaError {
    fn into_leema(self) -> LeemaError;
}

/* -------------------------------------------------------------------------- */
/* keyring::Error → LeemaError */
/* -------------------------------------------------------------------------- */

impl IntoLeemaError for KeyringError {
    fn into_leema(self) -> LeemaError {
        let description = self.to_string();

        match self {
            KeyringError::NoEntry => LeemaError::NotFound("keychain entry not found".into()),
            KeyringError::BadEncoding(_) => {
                LeemaError::Storage("credential in keychain is not valid UTF-8".into())
            }
            KeyringError::TooLong(name, limit) => LeemaError::Storage(format!(
                "keychain attribute '{name}' exceeds platform limit ({limit})"
            )),
            KeyringError::Invalid(attr, reason) => {
                LeemaError::Storage(format!("keychain attribute '{attr}' is invalid: {reason}"))
            }
            KeyringError::NoStorageAccess(err) => {
                LeemaError::Storage(format!("unable to access secure storage: {err}"))
            }
            KeyringError::PlatformFailure(err) => {
                LeemaError::Storage(format!("keychain platform error: {err}"))
            }
            _ => LeemaError::Storage(description),
        }
    }
}

impl From<KeyringError> for InfraError {
    fn from(value: KeyringError) -> Self {
        InfraError(value.into_leema())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → LeemaError */
/* -------------------------------------------------------------------------- */

impl IntoLeemaError for HttpError {
    fn into_leema(self) -> LeemaError {
        if self.is_timeout() {
            return LeemaError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return LeemaError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return LeemaError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() || self.is_body() {
            return LeemaError::Network(format!("failed to read HTTP response body: {self}"));
        }

        LeemaError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_leema())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
