//! HTML Page Handlers
//!
//! Renders the storefront pages from the compiled-in templates.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
};

use super::{parse_id, AppState};
use crate::cart;
use crate::error::Result;
use crate::render::{self, pages, Replacements};

/// Cache policy for pages whose content only changes with the catalog.
const PAGE_CACHE_CONTROL: &str = "public, max-age=432000";

fn cached_page(body: String) -> Response {
    ([(header::CACHE_CONTROL, PAGE_CACHE_CONTROL)], Html(body)).into_response()
}

/// The cart page reflects a per-client cookie and must never be cached.
fn uncached_page(body: String) -> Response {
    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
            (header::EXPIRES, "0"),
        ],
        Html(body),
    )
        .into_response()
}

fn cookie_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::COOKIE).and_then(|v| v.to_str().ok())
}

/// Handler for GET /
///
/// Fills the numbered featured-product slots from the catalog, in catalog
/// order.
pub async fn home(State(state): State<AppState>) -> Result<Response> {
    let catalog = state.catalog.catalog().await?;
    let reps = render::home_replacements(&catalog.products);
    Ok(cached_page(render::render(pages::INDEX, &reps)?))
}

/// Handler for GET /products
///
/// Injects one listing fragment per product into the `{all_json}` slot.
pub async fn products(State(state): State<AppState>) -> Result<Response> {
    let catalog = state.catalog.catalog().await?;
    let fragments: String = catalog
        .products
        .iter()
        .map(render::product_fragment)
        .collect();
    let reps = Replacements::new().with("{all_json}", fragments);
    Ok(cached_page(render::render(pages::PRODUCTS, &reps)?))
}

/// Handler for GET /about
pub async fn about() -> Result<Response> {
    Ok(cached_page(render::render(pages::ABOUT, &Replacements::new())?))
}

/// Handler for GET /product/:id
pub async fn product_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let product = state.catalog.product(parse_id(&id)?).await?;
    let reps = render::detail_replacements(&product)?;
    Ok(cached_page(render::render(pages::PRODUCT, &reps)?))
}

/// Handler for GET /cart
///
/// Rebuilds cart state from the request cookie, renders the rows and the
/// totals, and ships the page with no-store headers.
pub async fn cart_page(State(state): State<AppState>, headers: HeaderMap) -> Result<Response> {
    let cart = cart::from_cookie_header(cookie_header(&headers));
    let catalog = state.catalog.catalog().await?;
    let reps = render::cart_replacements(&cart, &catalog, &state.shipping);
    Ok(uncached_page(render::render(pages::CART, &reps)?))
}
