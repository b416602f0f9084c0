//! API Module
//!
//! HTTP handlers and routing for the storefront.
//!
//! # Endpoints
//! - `GET /`, `GET /products`, `GET /about`, `GET /cart` - HTML pages
//! - `GET /product/:id` - product detail page
//! - `POST /cart/add/:id`, `POST /cart/update/:id` - cart mutations
//! - `GET /images/:filename` - product images
//! - `GET/POST /api/products`, `GET/PUT/DELETE /api/products/:id` - JSON API
//! - `GET /health` - health check endpoint

pub mod assets;
pub mod cart;
pub mod pages;
pub mod products;
pub mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;

use crate::error::{Result, ShopError};

/// Parses a product id path segment; anything that is not an integer is a
/// validation error, not a 404.
pub(crate) fn parse_id(raw: &str) -> Result<u64> {
    raw.parse()
        .map_err(|_| ShopError::Validation(format!("Invalid product id: {raw}")))
}
