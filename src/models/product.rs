//! Catalog entities
//!
//! The catalog is one JSON document holding the full ordered product list.
//! Field names on the wire keep the PascalCase form the stored documents
//! already use (`ProductId`, `ProductName`, ...).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// == Product ==
/// A single product in the catalog.
///
/// `id` is caller-assigned on create and never mutated afterwards; all other
/// fields are mutable in place. `image` is an opaque asset key resolved via
/// the asset side of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique id, monotonically increasing (max of existing ids + 1)
    #[serde(rename = "ProductId")]
    pub id: u64,
    /// Display name
    #[serde(rename = "ProductName")]
    pub name: String,
    /// Description text
    #[serde(rename = "ProductDesc")]
    pub description: String,
    /// Unit price, non-negative
    #[serde(rename = "ProductPrice")]
    pub price: Decimal,
    /// Asset key of the product image
    #[serde(rename = "ProductImage")]
    pub image: String,
}

// == Catalog ==
/// The full ordered product list, stored as one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Products in catalog order
    #[serde(rename = "Products")]
    pub products: Vec<Product>,
}

impl Catalog {
    /// Looks up a product by id.
    pub fn find(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a product by id for mutation.
    pub fn find_mut(&mut self, id: u64) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Computes the id for the next created product: max(existing) + 1,
    /// starting at 1 for an empty catalog.
    pub fn next_id(&self) -> u64 {
        self.products.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }
}
