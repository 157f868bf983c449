//! Local-mode response simulation
//!
//! Stands in for the remote service: waits a fixed latency, then answers
//! barcode lookups from the fixture store. Everything else resolves to
//! `None`. Never fails.

use std::sync::Arc;
use std::time::Duration;

use leema_core::RequestOptions;
use leema_domain::constants::{barcode_from_endpoint, AUTH_TOKEN_PATH};
use leema_domain::HttpMethod;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::fixtures::FixtureStore;

/// Fixture-backed responder used when the client is in local mode
pub struct LocalSimulator {
    fixtures: Arc<FixtureStore>,
    latency: Duration,
}

impl LocalSimulator {
    /// Simulator answering from `fixtures` after `latency`.
    pub fn new(fixtures: Arc<FixtureStore>, latency: Duration) -> Self {
        Self { fixtures, latency }
    }

    /// Store backing lookups.
    pub fn fixtures(&self) -> &Arc<FixtureStore> {
        &self.fixtures
    }

    /// Delay applied before every simulated response.
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Produce the payload the remote service would return for `endpoint`.
    pub async fn respond(&self, endpoint: &str, options: &RequestOptions) -> Option<Value> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        info!(endpoint = %endpoint, method = %options.method, "Local API simulation");

        if let Some(barcode) = barcode_from_endpoint(endpoint) {
            return self
                .fixtures
                .get(&barcode)
                .and_then(|entry| serde_json::to_value(entry).ok());
        }

        if endpoint == AUTH_TOKEN_PATH && options.method == HttpMethod::Post {
            debug!("token issuance is not served in local mode");
            return None;
        }

        warn!(endpoint = %endpoint, "Unhandled endpoint in local mode");
        None
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use leema_domain::constants::product_by_barcode_endpoint;
    use leema_domain::CatalogEntry;
    use serde_json::json;

    use super::*;

    fn simulator(latency: Duration) -> LocalSimulator {
        LocalSimulator::new(Arc::new(FixtureStore::seeded()), latency)
    }

    #[tokio::test]
    async fn lookup_returns_fixture_payload() {
        let payload = simulator(Duration::ZERO)
            .respond("/products/by-barcode/4607027661999", &RequestOptions::get())
            .await;

        assert_eq!(payload, Some(json!({"barcode": "4607027661999", "sku_name": "Coffee 250g"})));
    }

    #[tokio::test]
    async fn lookup_miss_is_none() {
        let payload = simulator(Duration::ZERO)
            .respond("/products/by-barcode/1111111111111", &RequestOptions::get())
            .await;
        assert!(payload.is_none());
    }

    #[tokio::test]
    async fn lookup_decodes_encoded_barcodes() {
        let fixtures = Arc::new(FixtureStore::from_entries([CatalogEntry::new("a b#1", "Odd")]));
        let sim = LocalSimulator::new(fixtures, Duration::ZERO);

        let endpoint = product_by_barcode_endpoint("a b#1");
        let payload = sim.respond(&endpoint, &RequestOptions::get()).await;

        assert_eq!(payload, Some(json!({"barcode": "a b#1", "sku_name": "Odd"})));
    }

    #[tokio::test]
    async fn token_issuance_is_not_served() {
        let sim = simulator(Duration::ZERO);
        assert!(sim.respond("/auth/token", &RequestOptions::post()).await.is_none());
        // GET on the token path falls through to the unhandled branch
        assert!(sim.respond("/auth/token", &RequestOptions::get()).await.is_none());
    }

    #[tokio::test]
    async fn unknown_endpoint_is_none() {
        let payload = simulator(Duration::ZERO).respond("/orders/42", &RequestOptions::get()).await;
        assert!(payload.is_none());
    }

    #[tokio::test]
    async fn waits_for_configured_latency() {
        let sim = simulator(Duration::from_millis(60));
        let started = Instant::now();

        sim.respond("/products/by-barcode/4607027662161", &RequestOptions::get()).await;

        assert!(started.elapsed() >= Duration::from_millis(60));
    }
}
