//! Port interfaces for the remote catalog transport
//!
//! The client decides what to send and how to classify the answer; a
//! [`Transport`] only moves bytes.

use async_trait::async_trait;
use leema_domain::{HttpMethod, LeemaError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::headers::Headers;

/// Caller-supplied options for a single request
///
/// Headers given here override the client's computed headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: Headers,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self { method: HttpMethod::Get, ..Self::default() }
    }

    pub fn post() -> Self {
        Self { method: HttpMethod::Post, ..Self::default() }
    }

    /// Attach a JSON-encoded body.
    ///
    /// # Errors
    /// Returns `LeemaError::InvalidInput` if `body` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let encoded = serde_json::to_string(body)
            .map_err(|e| LeemaError::InvalidInput(format!("Failed to serialize body: {e}")))?;
        self.body = Some(encoded);
        Ok(self)
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Fully resolved request handed to a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

/// Raw transport response; status classification is the caller's job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    /// Returns `LeemaError::InvalidInput` when the body is not valid JSON for
    /// `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body)
            .map_err(|e| LeemaError::InvalidInput(format!("Malformed response body: {e}")))
    }
}

/// Trait for issuing HTTP-style requests
///
/// Implementations return `Err` only for transport-level failures
/// (connection refused, timeout, unreadable body). Every HTTP status,
/// including 4xx/5xx, is an `Ok(ApiResponse)`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a single request
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::Value;

    use super::*;

    struct EchoTransport;

    #[async_trait]
    impl Transport for EchoTransport {
        async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
            Ok(ApiResponse::new(200, request.body.unwrap_or_default()))
        }
    }

    #[tokio::test]
    async fn transport_is_object_safe() {
        let transport: Box<dyn Transport> = Box::new(EchoTransport);
        let options = RequestOptions::post().json(&HashMap::from([("k", "v")])).unwrap();

        let response = transport
            .execute(ApiRequest {
                method: options.method,
                url: "http://localhost/echo".into(),
                headers: options.headers,
                body: options.body,
            })
            .await
            .unwrap();

        let echoed: Value = response.json().unwrap();
        assert_eq!(echoed["k"], "v");
    }

    #[test]
    fn malformed_body_is_invalid_input() {
        let response = ApiResponse::new(200, "<html>");
        let err = response.json::<Value>().unwrap_err();
        assert!(matches!(err, LeemaError::InvalidInput(_)));
    }

    #[test]
    fn option_builders_set_method_and_headers() {
        let options = RequestOptions::get().header("Accept", "text/plain");
        assert_eq!(options.method, HttpMethod::Get);
        assert_eq!(options.headers.get("accept"), Some("text/plain"));
        assert!(options.body.is_none());
    }
}
