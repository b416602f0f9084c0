//! API Routes
//!
//! Configures the Axum router with all storefront endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{assets, cart, pages, products, AppState};
use crate::error::ShopError;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /`, `GET /products`, `GET /about`, `GET /cart` - HTML pages
/// - `GET /product/:id` - product detail page
/// - `POST /cart/add/:id`, `POST /cart/update/:id` - cart mutations
/// - `GET /images/:filename` - product images
/// - `GET/POST /api/products`, `GET/PUT/DELETE /api/products/:id` - JSON API
/// - `GET /health` - health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/", get(pages::home))
        .route("/products", get(pages::products))
        .route("/about", get(pages::about))
        .route("/cart", get(pages::cart_page))
        .route("/cart/add/:id", post(cart::add_to_cart))
        .route("/cart/update/:id", post(cart::update_cart))
        .route("/product/:id", get(pages::product_detail))
        .route("/images/:filename", get(assets::image))
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/api/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/health", get(products::health))
        .fallback(fallback)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Unmatched routes get the same JSON 404 shape as missing resources.
async fn fallback() -> ShopError {
    ShopError::NotFound("Route not found".to_string())
}

/// Known routes hit with the wrong method get the same JSON error shape.
async fn method_not_allowed() -> ShopError {
    ShopError::MethodNotAllowed
}
