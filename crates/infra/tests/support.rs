#![allow(dead_code)]

use std::sync::Arc;

use leema_domain::ClientConfig;
use leema_infra::{BroadcastAuthEvents, MemoryCredentialStore, RemoteCatalogClient};
use wiremock::MockServer;

pub const PERSISTED_TOKEN: &str = "persisted-token";

/// Real-network client wired to a mock server plus observable collaborators.
pub struct RemoteHarness {
    pub server: MockServer,
    pub client: RemoteCatalogClient,
    pub credentials: Arc<MemoryCredentialStore>,
    pub events: BroadcastAuthEvents,
}

impl RemoteHarness {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let credentials =
            Arc::new(MemoryCredentialStore::new().with("auth_token", PERSISTED_TOKEN));
        let events = BroadcastAuthEvents::new();

        let client = RemoteCatalogClient::builder()
            .config(ClientConfig { request_timeout_secs: 5, ..ClientConfig::remote(server.uri()) })
            .credentials(credentials.clone())
            .auth_events(Arc::new(events.clone()))
            .build()
            .expect("client should build");

        Self { server, client, credentials, events }
    }
}

/// Local-mode client with no artificial latency.
pub fn local_client() -> RemoteCatalogClient {
    RemoteCatalogClient::builder()
        .config(ClientConfig { simulated_latency_ms: 0, ..ClientConfig::local() })
        .credentials(Arc::new(MemoryCredentialStore::new()))
        .build()
        .expect("client should build")
}
