//! Store Module
//!
//! The external key-value store contract and the catalog/asset adapter
//! layered on top of it.

mod catalog;
mod kv;

pub use catalog::{CatalogRepo, CATALOG_KEY};
pub use kv::{KvStore, MemoryStore, StoredValue};
