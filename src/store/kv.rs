//! Key-Value Store Contract
//!
//! The storefront treats its backing store as an external collaborator with
//! a plain get/put/delete surface. `MemoryStore` is the in-process
//! implementation used by the server binary and the tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

// == Stored Value ==
/// A value held in the store: raw bytes plus an optional content-type tag.
#[derive(Debug, Clone)]
pub struct StoredValue {
    /// Raw bytes
    pub bytes: Vec<u8>,
    /// Content type recorded at put time, if any
    pub content_type: Option<String>,
}

// == Kv Store Trait ==
/// External key-value store contract.
///
/// Failures are opaque (`anyhow::Error`); callers decide whether a failure
/// is fatal for their operation or degrades to a warning.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Returns the value for `key`, or None if absent.
    async fn get(&self, key: &str) -> anyhow::Result<Option<StoredValue>>;

    /// Stores `bytes` under `key`, overwriting any previous value.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: Option<String>,
    ) -> anyhow::Result<()>;

    /// Removes `key`. Deleting an absent key is an error so that
    /// best-effort callers can surface it as a warning.
    async fn delete(&self, key: &str) -> anyhow::Result<()>;
}

// == Memory Store ==
/// In-memory `KvStore` backed by a HashMap behind an async RwLock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, StoredValue>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store wrapped for shared use.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<StoredValue>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: Option<String>,
    ) -> anyhow::Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), StoredValue { bytes, content_type });
        Ok(())
    }

    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        let mut entries = self.entries.write().await;
        if entries.remove(key).is_none() {
            anyhow::bail!("no such key: {key}");
        }
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let store = MemoryStore::new();
        store
            .put("greeting", b"hello".to_vec(), Some("text/plain".to_string()))
            .await
            .unwrap();

        let value = store.get("greeting").await.unwrap().unwrap();
        assert_eq!(value.bytes, b"hello");
        assert_eq!(value.content_type.as_deref(), Some("text/plain"));
    }

    #[tokio::test]
    async fn test_get_absent_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = MemoryStore::new();
        store.put("k", b"one".to_vec(), None).await.unwrap();
        store.put("k", b"two".to_vec(), None).await.unwrap();

        let value = store.get("k").await.unwrap().unwrap();
        assert_eq!(value.bytes, b"two");
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryStore::new();
        store.put("k", b"v".to_vec(), None).await.unwrap();
        store.delete("k").await.unwrap();
        assert!(store.get("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_absent_is_error() {
        let store = MemoryStore::new();
        assert!(store.delete("missing").await.is_err());
    }
}
