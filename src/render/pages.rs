//! Static Page Templates
//!
//! The HTML templates are compiled into the binary; placeholders inside
//! them are filled at request time.

/// Home page with numbered featured-product slots.
pub static INDEX: &[u8] = include_bytes!("../../templates/index.html");

/// Product listing page with the `{all_json}` injection point.
pub static PRODUCTS: &[u8] = include_bytes!("../../templates/products.html");

/// Static about page.
pub static ABOUT: &[u8] = include_bytes!("../../templates/about.html");

/// Product detail page.
pub static PRODUCT: &[u8] = include_bytes!("../../templates/product.html");

/// Cart page.
pub static CART: &[u8] = include_bytes!("../../templates/cart.html");
