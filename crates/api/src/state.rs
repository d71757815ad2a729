use std::sync::Arc;

use tokio::sync::RwLock;
use turfdesk_client::MarketplaceApi;

use crate::config::ServerConfig;
use crate::store::ConsoleStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`. Handlers call the
/// upstream API without holding the store lock and take the lock only to read
/// or replace working sets.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Per-page working sets and the audit trail.
    pub store: Arc<RwLock<ConsoleStore>>,
    /// Marketplace API client.
    pub upstream: Arc<dyn MarketplaceApi>,
}

impl AppState {
    pub fn new(config: ServerConfig, store: ConsoleStore, upstream: Arc<dyn MarketplaceApi>) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(store)),
            upstream,
        }
    }
}
