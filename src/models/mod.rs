//! Request and Response models for the storefront API
//!
//! This module defines the catalog entities and the DTOs (Data Transfer
//! Objects) used for serializing/deserializing HTTP request and response
//! bodies.

pub mod product;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use product::{Catalog, Product};
pub use requests::{CartUpdateForm, NewProduct, ProductForm, ProductPatch, ProductQuery, UploadedImage};
pub use responses::{DeleteResponse, HealthResponse, MutationResponse};
