//! Authentication types
//!
//! Token issuance payloads and the notification raised when the remote
//! service rejects the current credential.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::EVENT_AUTH_ERROR;

/// Body of `POST /auth/token`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response of `POST /auth/token`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub user: Option<Value>,
}

/// Successful login outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResult {
    pub token: String,
    pub user: Value,
}

/// Raised when a non-lookup request is rejected with 401/403
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthFailure {
    pub status: u16,
    pub endpoint: String,
    pub occurred_at: DateTime<Utc>,
}

impl AuthFailure {
    pub fn new(status: u16, endpoint: impl Into<String>) -> Self {
        Self { status, endpoint: endpoint.into(), occurred_at: Utc::now() }
    }

    /// Name under which listeners know this event.
    pub const fn event_name(&self) -> &'static str {
        EVENT_AUTH_ERROR
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn credentials_debug_hides_password() {
        let rendered = format!("{:?}", Credentials::new("u", "hunter2"));
        assert!(rendered.contains("\"u\""));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn token_response_tolerates_missing_fields() {
        let parsed: TokenResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(parsed, TokenResponse::default());

        let parsed: TokenResponse =
            serde_json::from_value(json!({"access_token": "tok", "user": {"username": "u"}}))
                .unwrap();
        assert_eq!(parsed.access_token.as_deref(), Some("tok"));
        assert_eq!(parsed.user, Some(json!({"username": "u"})));
    }

    #[test]
    fn auth_failure_carries_event_name() {
        let event = AuthFailure::new(401, "/auth/token");
        assert_eq!(event.event_name(), "auth-error");
        assert_eq!(event.status, 401);
    }
}
