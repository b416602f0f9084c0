//! Cart Operation Handlers
//!
//! Cart mutations never touch the store: they decode the cookie, apply the
//! change and redirect to the cart page with the refreshed cookie. The
//! product id is not checked against the catalog here; stale ids are
//! skipped at render and pricing time instead.

use axum::{
    extract::Path,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Form,
};

use crate::cart::{self, Cart};
use crate::models::CartUpdateForm;

fn cart_redirect(cart: &Cart) -> Response {
    (
        StatusCode::FOUND,
        [
            (header::LOCATION, "/cart".to_string()),
            (header::SET_COOKIE, cart::set_cookie(cart)),
        ],
    )
        .into_response()
}

fn current_cart(headers: &HeaderMap) -> Cart {
    cart::from_cookie_header(headers.get(header::COOKIE).and_then(|v| v.to_str().ok()))
}

/// Handler for POST /cart/add/:id
///
/// A missing quantity adds a single unit.
pub async fn add_to_cart(
    Path(id): Path<String>,
    headers: HeaderMap,
    Form(form): Form<CartUpdateForm>,
) -> Response {
    let mut cart = current_cart(&headers);
    cart::apply(&mut cart, &id, form.quantity_or(1));
    cart_redirect(&cart)
}

/// Handler for POST /cart/update/:id
///
/// A missing quantity removes the entry, matching the remove buttons on
/// the cart page.
pub async fn update_cart(
    Path(id): Path<String>,
    headers: HeaderMap,
    Form(form): Form<CartUpdateForm>,
) -> Response {
    let mut cart = current_cart(&headers);
    cart::apply(&mut cart, &id, form.quantity_or(0));
    cart_redirect(&cart)
}
