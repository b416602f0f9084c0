//! Product Cache Module
//!
//! TTL-bounded cache of serialized products keyed by product id. The
//! catalog store remains authoritative: every catalog write invalidates the
//! touched entry synchronously, and any decode problem degrades to a miss.

use std::collections::HashMap;

use tracing::warn;

use crate::cache::{CacheEntry, CacheStats};
use crate::models::Product;

// == Product Cache ==
/// Per-product cache with TTL expiration and explicit invalidation.
#[derive(Debug)]
pub struct ProductCache {
    /// Entries keyed by product id
    entries: HashMap<u64, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Entry TTL in seconds
    ttl: u64,
}

impl ProductCache {
    // == Constructor ==
    /// Creates a new ProductCache whose entries live for `ttl` seconds.
    pub fn new(ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Get ==
    /// Retrieves a product by id.
    ///
    /// Absent, expired and undecodable entries all count as misses; the
    /// latter two are removed on the way out. Never fails: a broken cache
    /// must look exactly like a cold one.
    pub fn get(&mut self, id: u64) -> Option<Product> {
        match self.entries.get(&id) {
            None => {
                self.stats.record_miss();
                None
            }
            Some(entry) if entry.is_expired() => {
                self.entries.remove(&id);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
            Some(entry) => match serde_json::from_str::<Product>(&entry.serialized) {
                Ok(product) => {
                    self.stats.record_hit();
                    Some(product)
                }
                Err(e) => {
                    warn!("cache entry for product {id} is undecodable, dropping: {e}");
                    self.entries.remove(&id);
                    self.stats.set_total_entries(self.entries.len());
                    self.stats.record_miss();
                    None
                }
            },
        }
    }

    // == Set ==
    /// Stores a product, resetting its TTL.
    ///
    /// A serialization failure is logged and skipped; the next read simply
    /// misses and falls back to the catalog.
    pub fn set(&mut self, id: u64, product: &Product) {
        match serde_json::to_string(product) {
            Ok(serialized) => {
                self.entries.insert(id, CacheEntry::new(serialized, self.ttl));
                self.stats.set_total_entries(self.entries.len());
            }
            Err(e) => {
                warn!("failed to serialize product {id} for cache: {e}");
            }
        }
    }

    // == Invalidate ==
    /// Removes the entry for `id`, if present. Called synchronously by every
    /// catalog mutation before the operation is considered complete.
    pub fn invalidate(&mut self, id: u64) {
        if self.entries.remove(&id).is_some() {
            self.stats.record_invalidation();
            self.stats.set_total_entries(self.entries.len());
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<u64> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(id, _)| *id)
            .collect();

        let count = expired_keys.len();

        for id in expired_keys {
            self.entries.remove(&id);
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn insert_raw(&mut self, id: u64, serialized: &str) {
        self.entries
            .insert(id, CacheEntry::new(serialized.to_string(), self.ttl));
    }
}
