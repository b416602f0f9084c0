//! Cache Sweep Task
//!
//! Background task that periodically removes expired product cache entries.
//! Reads still evict lazily; the sweep only keeps long-idle entries from
//! sitting in memory until the next request for them.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ProductCache;

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It acquires a write lock on the product cache to remove
/// expired entries.
///
/// # Arguments
/// * `cache` - shared reference to the product cache
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<ProductCache>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and cleanup expired entries
            let (removed, stats) = {
                let mut cache_guard = cache.write().await;
                let removed = cache_guard.cleanup_expired();
                (removed, cache_guard.stats())
            };

            // Log cleanup statistics
            if removed > 0 {
                info!("cache sweep: removed {} expired entries", removed);
            } else {
                debug!("cache sweep: no expired entries found");
            }
            debug!(
                "cache: {} entries, hit rate {:.2}",
                stats.total_entries,
                stats.hit_rate()
            );
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use rust_decimal::Decimal;
    use std::time::Duration;

    fn product(id: u64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            description: String::new(),
            price: Decimal::ONE,
            image: String::new(),
        }
    }

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = Arc::new(RwLock::new(ProductCache::new(1)));

        {
            let mut cache_guard = cache.write().await;
            cache_guard.set(1, &product(1));
        }

        // Spawn cleanup task with 1 second interval
        let handle = spawn_cleanup_task(cache.clone(), 1);

        // Wait for entry to expire and cleanup to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        {
            let cache_guard = cache.read().await;
            assert!(
                cache_guard.is_empty(),
                "Expired entry should have been swept"
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache = Arc::new(RwLock::new(ProductCache::new(3600)));

        {
            let mut cache_guard = cache.write().await;
            cache_guard.set(2, &product(2));
        }

        let handle = spawn_cleanup_task(cache.clone(), 1);

        // Wait for cleanup to run
        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let mut cache_guard = cache.write().await;
            let result = cache_guard.get(2);
            assert!(result.is_some(), "Valid entry should not be removed");
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache = Arc::new(RwLock::new(ProductCache::new(60)));

        let handle = spawn_cleanup_task(cache, 1);

        // Abort immediately
        handle.abort();

        // Wait a bit and verify task is finished
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
