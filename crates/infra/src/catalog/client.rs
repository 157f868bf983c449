//! Remote catalog client
//!
//! Looks up products by barcode and exchanges credentials for an API key,
//! either against the remote service or, in local mode, against the
//! in-memory fixture store.
//!
//! Domain operations never fail: every non-success outcome is logged and
//! surfaces as `None`. The `try_*` variants expose the typed reason.

use std::sync::Arc;

use leema_core::{
    ApiRequest, AuthEventSink, CredentialStore, Headers, RequestOptions, Transport,
};
use leema_domain::constants::{
    is_product_lookup, product_by_barcode_endpoint, ACCEPT_HEADER, API_KEY_HEADER,
    AUTH_TOKEN_PATH, AUTH_TOKEN_STORAGE_KEY, CONTENT_TYPE_HEADER, JSON_MEDIA_TYPE,
    TOKEN_LOG_PREFIX_LEN,
};
use leema_domain::{
    AuthFailure, AuthResult, CatalogEntry, ClientConfig, Credentials, Product, ProductDraft,
    TokenResponse,
};
use parking_lot::RwLock;
use serde_json::{json, Value};
use tracing::{debug, error, info, instrument, warn};

use super::errors::{ApiError, FixtureError};
use super::fixtures::FixtureStore;
use super::simulator::LocalSimulator;
use crate::credentials::KeychainCredentialStore;
use crate::events::NoopAuthEvents;
use crate::http::HttpClient;

/// Client for the remote product catalog
pub struct RemoteCatalogClient {
    config: RwLock<ClientConfig>,
    transport: Arc<dyn Transport>,
    credentials: Arc<dyn CredentialStore>,
    auth_events: Arc<dyn AuthEventSink>,
    simulator: LocalSimulator,
}

impl RemoteCatalogClient {
    /// Create a builder for fluent configuration
    pub fn builder() -> RemoteCatalogClientBuilder {
        RemoteCatalogClientBuilder::default()
    }

    /// Client with default adapters (reqwest transport, platform keychain,
    /// no auth listener, seeded fixtures).
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the HTTP client cannot be created
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        Self::builder().config(config).build()
    }

    /* ------------------------------------------------------------------ */
    /* Configuration */
    /* ------------------------------------------------------------------ */

    /// Replace the origin used in real-network mode. Not validated.
    pub fn set_base_url(&self, url: impl Into<String>) {
        self.config.write().base_url = url.into();
    }

    /// Origin currently used in real-network mode.
    pub fn base_url(&self) -> String {
        self.config.read().base_url.clone()
    }

    /// Replace the credential sent with subsequent requests.
    pub fn set_auth_token(&self, token: impl Into<String>) {
        self.config.write().auth_token = Some(token.into());
    }

    /// Drop the in-memory credential; later requests go unauthenticated.
    pub fn clear_auth_token(&self) {
        self.config.write().auth_token = None;
    }

    /// Credential currently sent as `X-API-Key`, if any.
    pub fn auth_token(&self) -> Option<String> {
        self.config.read().auth_token.clone()
    }

    /// Whether requests are answered from the fixture store.
    pub fn is_local_mode(&self) -> bool {
        self.config.read().local_mode
    }

    /// Switch between fixture-backed and real-network dispatch.
    pub fn set_local_mode(&self, enabled: bool) {
        self.config.write().local_mode = enabled;
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> ClientConfig {
        self.config.read().clone()
    }

    /// Headers attached to every real-network request.
    ///
    /// The API key header is present only when a token is set.
    pub fn headers(&self) -> Headers {
        let mut headers = Headers::new()
            .with(CONTENT_TYPE_HEADER, JSON_MEDIA_TYPE)
            .with(ACCEPT_HEADER, JSON_MEDIA_TYPE);

        match self.auth_token() {
            Some(token) => {
                let prefix: String = token.chars().take(TOKEN_LOG_PREFIX_LEN).collect();
                debug!(token_prefix = %prefix, "Token passed in X-API-Key header");
                headers.insert(API_KEY_HEADER, token);
            }
            None => warn!("Token not set! Request will be made without authorization."),
        }

        headers
    }

    /* ------------------------------------------------------------------ */
    /* Dispatch */
    /* ------------------------------------------------------------------ */

    /// Issue a request and return its JSON payload, or `None` on any
    /// non-success outcome. Never fails.
    pub async fn api_request(&self, endpoint: &str, options: RequestOptions) -> Option<Value> {
        self.try_api_request(endpoint, options).await.ok().flatten()
    }

    /// Issue a request and classify the outcome.
    ///
    /// `Ok(None)` means not found (404, fixture miss, or a `null` body).
    ///
    /// # Errors
    /// - `ApiError::Unauthorized` for 401/403
    /// - `ApiError::Server` for any other non-200 status
    /// - `ApiError::Transport` / `ApiError::Decode` for connection failures
    ///   and malformed bodies
    #[instrument(skip(self, options), fields(method = %options.method))]
    pub async fn try_api_request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, ApiError> {
        let (local_mode, base_url) = {
            let config = self.config.read();
            (config.local_mode, config.base_url.clone())
        };

        if local_mode {
            return Ok(self.simulate_api_response(endpoint, &options).await);
        }

        let url = format!("{base_url}{endpoint}");
        let mut headers = self.headers();
        headers.merge(&options.headers);

        let request =
            ApiRequest { method: options.method, url: url.clone(), headers, body: options.body };

        let response = self.transport.execute(request).await.map_err(|err| {
            let err = ApiError::from(err);
            error!(url = %url, error = %err, "Connection error");
            err
        })?;

        info!(status = response.status, url = %url, "API response");

        match response.status {
            200 => {
                let payload: Value = response.json().map_err(|err| {
                    let err = ApiError::from(err);
                    error!(url = %url, error = %err, "Connection error");
                    err
                })?;
                Ok(Some(payload).filter(|value| !value.is_null()))
            }
            404 => Ok(None),
            status @ (401 | 403) => {
                let err = ApiError::Unauthorized { status };
                error!(status, endpoint = %endpoint, "{err}");

                if !is_product_lookup(endpoint) {
                    self.invalidate_credentials(status, endpoint);
                }

                Err(err)
            }
            status => {
                let err = ApiError::Server { status };
                error!(status, url = %url, "{err}");
                Err(err)
            }
        }
    }

    /// Answer `endpoint` from the fixture store after the simulated latency.
    pub async fn simulate_api_response(
        &self,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Option<Value> {
        self.simulator.respond(endpoint, options).await
    }

    fn invalidate_credentials(&self, status: u16, endpoint: &str) {
        if let Err(err) = self.credentials.remove(AUTH_TOKEN_STORAGE_KEY) {
            warn!(error = %err, "Failed to clear persisted credentials");
        }

        let event = AuthFailure::new(status, endpoint);
        info!(event = event.event_name(), status, endpoint = %endpoint, "Emitting auth failure");
        self.auth_events.auth_failed(&event);
    }

    /* ------------------------------------------------------------------ */
    /* Local fixtures */
    /* ------------------------------------------------------------------ */

    /// Exact-match fixture lookup, bypassing the simulated latency.
    pub fn get_local_product(&self, barcode: &str) -> Option<CatalogEntry> {
        self.simulator.fixtures().get(barcode)
    }

    /// Add a product to the local fixture store.
    ///
    /// # Errors
    /// `FixtureError::InvalidProduct` or `FixtureError::DuplicateBarcode`;
    /// the store is unchanged in both cases.
    pub fn add_local_product(&self, draft: ProductDraft) -> Result<(), FixtureError> {
        self.simulator.fixtures().add(draft)
    }

    /// Number of products in the fixture store.
    pub fn local_product_count(&self) -> usize {
        self.simulator.fixtures().len()
    }

    /// Fixture products in insertion order.
    pub fn local_products(&self) -> Vec<CatalogEntry> {
        self.simulator.fixtures().snapshot()
    }

    /* ------------------------------------------------------------------ */
    /* Domain operations */
    /* ------------------------------------------------------------------ */

    /// Look up a product by barcode; `None` when absent or on any failure.
    pub async fn get_product(&self, barcode: &str) -> Option<Product> {
        self.try_get_product(barcode).await.ok().flatten()
    }

    /// # Errors
    /// Any [`ApiError`] from dispatch, or `ApiError::Decode` when the payload
    /// lacks `barcode`/`sku_name`.
    pub async fn try_get_product(&self, barcode: &str) -> Result<Option<Product>, ApiError> {
        let endpoint = product_by_barcode_endpoint(barcode);

        let Some(payload) = self.try_api_request(&endpoint, RequestOptions::get()).await? else {
            return Ok(None);
        };

        let entry: CatalogEntry = serde_json::from_value(payload).map_err(|e| {
            warn!(barcode = %barcode, error = %e, "Unexpected product payload");
            ApiError::Decode(e.to_string())
        })?;

        Ok(Some(entry.into()))
    }

    /// Exchange credentials for an API key and keep it for later requests.
    pub async fn login(&self, username: &str, password: &str) -> Option<AuthResult> {
        self.try_login(username, password).await.ok().flatten()
    }

    /// # Errors
    /// Any [`ApiError`] from dispatch, or `ApiError::Decode` for a payload
    /// that is not a token response.
    #[instrument(skip(self, password))]
    pub async fn try_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AuthResult>, ApiError> {
        let options = RequestOptions::post().json(&Credentials::new(username, password))?;

        let Some(payload) = self.try_api_request(AUTH_TOKEN_PATH, options).await? else {
            return Ok(None);
        };

        let response: TokenResponse =
            serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;

        let Some(token) = response.access_token.filter(|token| !token.is_empty()) else {
            info!("Token response did not contain an access token");
            return Ok(None);
        };

        self.set_auth_token(token.clone());

        let user = response
            .user
            .filter(|user| !user.is_null())
            .unwrap_or_else(|| json!({ "username": username }));

        info!("Login successful");
        Ok(Some(AuthResult { token, user }))
    }
}

/// Builder for [`RemoteCatalogClient`]
#[derive(Default)]
pub struct RemoteCatalogClientBuilder {
    config: Option<ClientConfig>,
    transport: Option<Arc<dyn Transport>>,
    credentials: Option<Arc<dyn CredentialStore>>,
    auth_events: Option<Arc<dyn AuthEventSink>>,
    fixtures: Option<Arc<FixtureStore>>,
}

impl RemoteCatalogClientBuilder {
    /// Set the client configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the transport used in real-network mode
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the persisted credential store cleared on auth failures
    pub fn credentials(mut self, credentials: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the listener notified of auth failures
    pub fn auth_events(mut self, auth_events: Arc<dyn AuthEventSink>) -> Self {
        self.auth_events = Some(auth_events);
        self
    }

    /// Replace the seeded fixture store
    pub fn fixtures(mut self, fixtures: Arc<FixtureStore>) -> Self {
        self.fixtures = Some(fixtures);
        self
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the configuration is invalid or the
    /// default HTTP client cannot be built
    pub fn build(self) -> Result<RemoteCatalogClient, ApiError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                HttpClient::builder()
                    .timeout(config.request_timeout())
                    .build()
                    .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {e}")))?,
            ),
        };
        let credentials =
            self.credentials.unwrap_or_else(|| Arc::new(KeychainCredentialStore::default()));
        let auth_events = self.auth_events.unwrap_or_else(|| Arc::new(NoopAuthEvents));
        let fixtures = self.fixtures.unwrap_or_else(|| Arc::new(FixtureStore::seeded()));

        let simulator = LocalSimulator::new(fixtures, config.simulated_latency());

        Ok(RemoteCatalogClient {
            config: RwLock::new(config),
            transport,
            credentials,
            auth_events,
            simulator,
        })
    }
}
