//! Shutdown coordination for the emulator.
//!
//! # Design Decisions
//! - A latch, not an event: once triggered it stays triggered, so a
//!   subscriber created after the trigger still observes it

use std::sync::Arc;

use tokio::sync::watch;

/// Coordinator for graceful shutdown.
///
/// Provides a watch channel that the server and tests can subscribe to.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Subscribe to the shutdown flag.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Whether shutdown has been triggered.
    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Trigger the shutdown signal. Later calls are no-ops.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    /// Future that completes once [`Shutdown::trigger`] has been called,
    /// whether before or after this future was created.
    pub fn notified(&self) -> impl std::future::Future<Output = ()> + Send + 'static {
        let mut rx = self.subscribe();
        async move {
            let _ = rx.wait_for(|triggered| *triggered).await;
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
