//! Catalog Module
//!
//! Read paths (cached single-product lookup, filtered/sorted queries) and
//! the whole-document create/update/delete mutations with their cache
//! invalidation contract.

mod query;
mod service;

pub use query::{ProductFilter, SortKey, SortOrder};
pub use service::{CatalogService, Mutation};
