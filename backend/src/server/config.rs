//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use backend::domain::ports::{ContactNotifier, NoOpContactNotifier};

use super::state_builders::StoreBackend;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: StoreBackend,
    pub(crate) notifier: Arc<dyn ContactNotifier>,
}

impl ServerConfig {
    /// Construct a server configuration with notification disabled.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, store: StoreBackend) -> Self {
        Self {
            bind_addr,
            store,
            notifier: Arc::new(NoOpContactNotifier),
        }
    }

    /// Replace the contact notifier.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn ContactNotifier>) -> Self {
        self.notifier = notifier;
        self
    }
}
