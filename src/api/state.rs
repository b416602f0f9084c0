//! Application State
//!
//! Shared state handed to every handler: the catalog service, the product
//! cache handle for the background sweeper, and the shipping policy.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::ProductCache;
use crate::catalog::CatalogService;
use crate::config::Config;
use crate::pricing::ShippingPolicy;
use crate::store::{CatalogRepo, KvStore, MemoryStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Catalog reads, queries and mutations
    pub catalog: CatalogService,
    /// Product cache, shared with the cleanup task
    pub cache: Arc<RwLock<ProductCache>>,
    /// Active shipping policy
    pub shipping: ShippingPolicy,
}

impl AppState {
    /// Creates state over an existing store.
    pub fn new(store: Arc<dyn KvStore>, config: &Config) -> Self {
        let cache = Arc::new(RwLock::new(ProductCache::new(config.cache_ttl)));
        let catalog = CatalogService::new(CatalogRepo::new(store), cache.clone());
        Self {
            catalog,
            cache,
            shipping: config.shipping,
        }
    }

    /// Creates state backed by a fresh in-memory store.
    pub fn from_config(config: &Config) -> Self {
        Self::new(MemoryStore::shared(), config)
    }
}
