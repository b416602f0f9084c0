//! Catalog Store Adapter
//!
//! Wraps a [`KvStore`] with the catalog and asset operations the storefront
//! needs. The catalog lives as one JSON document under a fixed key and is
//! always read and rewritten whole.

use std::sync::Arc;

use crate::error::{Result, ShopError};
use crate::models::Catalog;
use crate::store::{KvStore, StoredValue};

/// Fixed store key of the catalog document.
pub const CATALOG_KEY: &str = "Items";

// == Catalog Repo ==
/// Whole-document catalog repository plus asset access.
///
/// Mutations are read-modify-write over the entire document and are NOT safe
/// under concurrent writers: the store's own consistency is the only guard
/// and the last write wins. Callers that need stronger guarantees must
/// serialize writes externally.
#[derive(Clone)]
pub struct CatalogRepo {
    store: Arc<dyn KvStore>,
}

impl CatalogRepo {
    /// Creates a repository over the given store.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    // == Catalog Document ==

    /// Loads the full catalog.
    ///
    /// An absent document is `NotFound`; a document that fails to parse is an
    /// internal error (the store holds something that is not a catalog).
    pub async fn catalog(&self) -> Result<Catalog> {
        let value = self.store.get(CATALOG_KEY).await?;
        let value = value.ok_or_else(|| ShopError::NotFound("Products not found".to_string()))?;
        serde_json::from_slice(&value.bytes)
            .map_err(|e| ShopError::Internal(format!("catalog document is not valid JSON: {e}")))
    }

    /// Rewrites the full catalog document.
    pub async fn put_catalog(&self, catalog: &Catalog) -> Result<()> {
        let bytes = serde_json::to_vec(catalog)
            .map_err(|e| ShopError::Internal(format!("catalog serialization failed: {e}")))?;
        self.store
            .put(CATALOG_KEY, bytes, Some("application/json".to_string()))
            .await?;
        Ok(())
    }

    // == Assets ==

    /// Loads an asset by name.
    pub async fn asset(&self, name: &str) -> Result<StoredValue> {
        let value = self.store.get(name).await?;
        value.ok_or_else(|| ShopError::NotFound("Image not found".to_string()))
    }

    /// Stores an asset under `name`.
    pub async fn put_asset(
        &self,
        name: &str,
        bytes: Vec<u8>,
        content_type: Option<String>,
    ) -> Result<()> {
        self.store.put(name, bytes, content_type).await?;
        Ok(())
    }

    /// Removes an asset. Callers treat failures as non-fatal warnings.
    pub async fn delete_asset(&self, name: &str) -> anyhow::Result<()> {
        self.store.delete(name).await
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::store::MemoryStore;
    use rust_decimal::Decimal;

    fn repo() -> CatalogRepo {
        CatalogRepo::new(MemoryStore::shared())
    }

    fn sample_catalog() -> Catalog {
        Catalog {
            products: vec![Product {
                id: 1,
                name: "Alpha Lamp".to_string(),
                description: "A desk lamp".to_string(),
                price: Decimal::new(4999, 2),
                image: "alpha.jpg".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn test_catalog_roundtrip() {
        let repo = repo();
        repo.put_catalog(&sample_catalog()).await.unwrap();

        let loaded = repo.catalog().await.unwrap();
        assert_eq!(loaded, sample_catalog());
    }

    #[tokio::test]
    async fn test_missing_catalog_is_not_found() {
        let repo = repo();
        let err = repo.catalog().await.unwrap_err();
        assert!(matches!(err, ShopError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_corrupt_catalog_is_internal_error() {
        let store = MemoryStore::shared();
        store
            .put(CATALOG_KEY, b"not json".to_vec(), None)
            .await
            .unwrap();

        let repo = CatalogRepo::new(store);
        let err = repo.catalog().await.unwrap_err();
        assert!(matches!(err, ShopError::Internal(_)));
    }

    #[tokio::test]
    async fn test_asset_roundtrip() {
        let repo = repo();
        repo.put_asset("1_alpha.jpg", vec![0xff, 0xd8], Some("image/jpeg".to_string()))
            .await
            .unwrap();

        let asset = repo.asset("1_alpha.jpg").await.unwrap();
        assert_eq!(asset.bytes, vec![0xff, 0xd8]);
        assert_eq!(asset.content_type.as_deref(), Some("image/jpeg"));
    }

    #[tokio::test]
    async fn test_missing_asset_is_not_found() {
        let repo = repo();
        let err = repo.asset("nope.png").await.unwrap_err();
        assert!(matches!(err, ShopError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_asset_absent_reports_error() {
        let repo = repo();
        assert!(repo.delete_asset("nope.png").await.is_err());
    }
}
