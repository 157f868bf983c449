//! Auth event adapters
//!
//! Delivery of [`AuthFailure`] notifications to whoever needs to react
//! (force a re-login, clear UI state).

use leema_core::AuthEventSink;
use leema_domain::AuthFailure;
use tokio::sync::broadcast;
use tracing::debug;

/// Buffered events per subscriber before the slowest one starts lagging
const AUTH_EVENT_CAPACITY: usize = 16;

/// Fan-out of auth failures over a tokio broadcast channel
#[derive(Clone)]
pub struct BroadcastAuthEvents {
    sender: broadcast::Sender<AuthFailure>,
}

impl BroadcastAuthEvents {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel::<AuthFailure>(AUTH_EVENT_CAPACITY);
        Self { sender }
    }

    /// Get a receiver for subsequent auth failures
    pub fn subscribe(&self) -> broadcast::Receiver<AuthFailure> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastAuthEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthEventSink for BroadcastAuthEvents {
    fn auth_failed(&self, event: &AuthFailure) {
        // No subscribers is fine; the event is simply dropped.
        if self.sender.send(event.clone()).is_err() {
            debug!(endpoint = %event.endpoint, "auth failure emitted with no subscribers");
        }
    }
}

/// Adapter turning a closure into an [`AuthEventSink`]
pub struct FnAuthEventSink<F>(F);

impl<F> FnAuthEventSink<F>
where
    F: Fn(&AuthFailure) + Send + Sync,
{
    pub fn new(callback: F) -> Self {
        Self(callback)
    }
}

impl<F> AuthEventSink for FnAuthEventSink<F>
where
    F: Fn(&AuthFailure) + Send + Sync,
{
    fn auth_failed(&self, event: &AuthFailure) {
        (self.0)(event);
    }
}

/// Sink that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAuthEvents;

impl AuthEventSink for NoopAuthEvents {
    fn auth_failed(&self, _event: &AuthFailure) {}
}
