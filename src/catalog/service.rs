//! Catalog Service
//!
//! Read and write operations over the catalog document, with the product
//! cache kept coherent: every mutation invalidates the touched entry before
//! the operation completes, and create/update re-prime the entry with the
//! fresh product so an immediate read hits.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::ProductCache;
use crate::catalog::ProductFilter;
use crate::error::{Result, ShopError};
use crate::models::{Catalog, NewProduct, Product, ProductPatch};
use crate::store::CatalogRepo;

// == Mutation Outcome ==
/// Result of a catalog mutation: the value plus any non-fatal warnings
/// (e.g. a best-effort asset delete that failed).
#[derive(Debug)]
pub struct Mutation<T> {
    pub value: T,
    pub warnings: Vec<String>,
}

impl<T> Mutation<T> {
    fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }
}

// == Catalog Service ==
/// Catalog operations shared across handlers.
///
/// Mutations are whole-document read-modify-write and inherit the
/// repository's last-write-wins behavior under concurrent writers.
#[derive(Clone)]
pub struct CatalogService {
    repo: CatalogRepo,
    cache: Arc<RwLock<ProductCache>>,
}

impl CatalogService {
    /// Creates a service over a repository and a shared product cache.
    pub fn new(repo: CatalogRepo, cache: Arc<RwLock<ProductCache>>) -> Self {
        Self { repo, cache }
    }

    /// The underlying repository, for asset access and seeding.
    pub fn repo(&self) -> &CatalogRepo {
        &self.repo
    }

    // == Reads ==

    /// Loads the full catalog.
    pub async fn catalog(&self) -> Result<Catalog> {
        self.repo.catalog().await
    }

    /// Loads a single product, consulting the cache first.
    ///
    /// On a miss the catalog is fetched, the product extracted and the
    /// cache populated before returning.
    pub async fn product(&self, id: u64) -> Result<Product> {
        if let Some(product) = self.cache.write().await.get(id) {
            debug!("cache hit for product {id}");
            return Ok(product);
        }

        let catalog = self.repo.catalog().await?;
        let product = catalog
            .find(id)
            .cloned()
            .ok_or_else(|| ShopError::NotFound("Product not found".to_string()))?;

        self.cache.write().await.set(id, &product);
        Ok(product)
    }

    /// Lists products matching a filter, in catalog order unless sorted.
    pub async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let catalog = self.repo.catalog().await?;
        Ok(filter.apply(catalog.products))
    }

    // == Mutations ==

    /// Creates a product: assigns the next id, stores the image asset under
    /// a key derived from the id and original filename, appends to the
    /// catalog and rewrites it whole.
    pub async fn create(&self, new: NewProduct) -> Result<Mutation<Product>> {
        // A missing catalog document means an empty store, not a failure:
        // the first create brings the document into existence.
        let mut catalog = match self.repo.catalog().await {
            Ok(catalog) => catalog,
            Err(ShopError::NotFound(_)) => Catalog::default(),
            Err(e) => return Err(e),
        };

        let id = catalog.next_id();
        let asset_key = asset_key(id, &new.image.filename);
        self.repo
            .put_asset(&asset_key, new.image.bytes, new.image.content_type)
            .await?;

        let product = Product {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            image: asset_key,
        };
        catalog.products.push(product.clone());
        self.repo.put_catalog(&catalog).await?;

        self.refresh_cache(&product).await;
        Ok(Mutation::clean(product))
    }

    /// Updates a product in place. A new image replaces the stored asset;
    /// deleting the old asset is best-effort and only ever produces a
    /// warning.
    pub async fn update(&self, id: u64, patch: ProductPatch) -> Result<Mutation<Product>> {
        let mut catalog = self.repo.catalog().await?;
        let mut warnings = Vec::new();

        let product = catalog
            .find_mut(id)
            .ok_or_else(|| ShopError::NotFound("Product not found".to_string()))?;

        if let Some(image) = patch.image {
            let old_key = product.image.clone();
            let new_key = asset_key(id, &image.filename);
            if old_key != new_key {
                if let Err(e) = self.repo.delete_asset(&old_key).await {
                    warn!("failed to delete old asset {old_key}: {e}");
                    warnings.push(format!("failed to delete old asset {old_key}"));
                }
            }
            self.repo
                .put_asset(&new_key, image.bytes, image.content_type)
                .await?;
            product.image = new_key;
        }

        product.name = patch.name;
        product.description = patch.description;
        product.price = patch.price;
        let updated = product.clone();

        self.repo.put_catalog(&catalog).await?;

        self.refresh_cache(&updated).await;
        Ok(Mutation {
            value: updated,
            warnings,
        })
    }

    /// Deletes a product and, best-effort, its image asset.
    pub async fn delete(&self, id: u64) -> Result<Mutation<u64>> {
        let mut catalog = self.repo.catalog().await?;
        let mut warnings = Vec::new();

        let position = catalog
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ShopError::NotFound("Product not found".to_string()))?;

        let removed = catalog.products.remove(position);
        if let Err(e) = self.repo.delete_asset(&removed.image).await {
            warn!("failed to delete asset {}: {e}", removed.image);
            warnings.push(format!("failed to delete asset {}", removed.image));
        }

        self.repo.put_catalog(&catalog).await?;

        self.cache.write().await.invalidate(id);
        Ok(Mutation {
            value: id,
            warnings,
        })
    }

    /// Invalidate-then-prime: the entry for a written product is replaced
    /// with the fresh data before the mutation returns, so an immediate
    /// read never sees pre-write state.
    async fn refresh_cache(&self, product: &Product) {
        let mut cache = self.cache.write().await;
        cache.invalidate(product.id);
        cache.set(product.id, product);
    }
}

/// Asset key for a product image: id plus the original filename.
fn asset_key(id: u64, filename: &str) -> String {
    format!("{id}_{filename}")
}
