//! Response DTOs for the storefront API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::models::Product;

/// Response body for product create and update operations.
///
/// `warnings` lists non-fatal side effects of the mutation, e.g. a failed
/// best-effort delete of the previous image asset.
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse {
    /// Success message
    pub message: String,
    /// The product after the mutation
    pub product: Product,
    /// Non-fatal warnings collected during the mutation
    pub warnings: Vec<String>,
}

impl MutationResponse {
    /// Creates a response for a created product.
    pub fn created(product: Product, warnings: Vec<String>) -> Self {
        Self {
            message: format!("Product {} created", product.id),
            product,
            warnings,
        }
    }

    /// Creates a response for an updated product.
    pub fn updated(product: Product, warnings: Vec<String>) -> Self {
        Self {
            message: format!("Product {} updated", product.id),
            product,
            warnings,
        }
    }
}

/// Response body for the DELETE operation (DELETE /api/products/:id)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The id that was deleted
    pub id: u64,
    /// Non-fatal warnings collected during the mutation
    pub warnings: Vec<String>,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(id: u64, warnings: Vec<String>) -> Self {
        Self {
            message: format!("Product {id} deleted"),
            id,
            warnings,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
