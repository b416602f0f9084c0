//! Placeholder Builders and HTML Fragments
//!
//! Builds the per-page placeholder sets and the repeated HTML fragments
//! (product rows, cart rows) that get injected into the list-style pages.

use crate::cart::Cart;
use crate::error::{Result, ShopError};
use crate::models::{Catalog, Product};
use crate::pricing::{format_money, ShippingPolicy, Totals};
use crate::render::Replacements;
use rust_decimal::Decimal;

// == Home Page ==
/// Numbered-slot placeholders for the home page: `{<n>_Name}`,
/// `{<n>_product_id}`, `{<n>_image_path}`, `{<n>_product_desc}` for
/// `n = 1..count` in catalog order.
///
/// Products beyond the template's slot count are silently ignored by the
/// engine (their keys never occur); slots beyond the product count stay
/// verbatim in the page.
pub fn home_replacements(products: &[Product]) -> Replacements {
    let mut reps = Replacements::new();
    for (index, product) in products.iter().enumerate() {
        let n = index + 1;
        reps.set(format!("{{{n}_Name}}"), product.name.clone());
        reps.set(format!("{{{n}_product_id}}"), product.id.to_string());
        reps.set(format!("{{{n}_image_path}}"), product.image.clone());
        reps.set(format!("{{{n}_product_desc}}"), product.description.clone());
    }
    reps
}

// == Detail Page ==
/// Fixed placeholder set for the product detail page, including the
/// pretty-printed `{JSON}` dump of the product.
pub fn detail_replacements(product: &Product) -> Result<Replacements> {
    let json = serde_json::to_string_pretty(product)
        .map_err(|e| ShopError::Internal(format!("product serialization failed: {e}")))?;

    Ok(Replacements::new()
        .with("{Product_Title}", product.name.clone())
        .with("{Product_Description}", product.description.clone())
        .with("{Product_Price}", format_money(product.price))
        .with("{Product_image_path}", product.image.clone())
        .with("{Product_Id}", product.id.to_string())
        .with("{JSON}", json))
}

// == Listing Fragments ==
/// One listing-row fragment per visible product, in catalog order.
pub fn product_fragment(product: &Product) -> String {
    format!(
        r#"<div class="product-list-item p-4">
  <div class="row align-items-center">
    <div class="col-auto">
      <a href="/product/{id}"><img src="/images/{image}" class="product-image" alt="{name}"></a>
    </div>
    <div class="col">
      <h3 class="product-title mb-2">{name}</h3>
      <p class="mb-2">{desc}</p>
      <div class="d-flex justify-content-between align-items-center">
        <span class="product-price">${price}</span>
        <div>
          <a href="/product/{id}" class="btn btn-primary">View Details</a>
        </div>
      </div>
    </div>
  </div>
</div>
"#,
        id = product.id,
        image = product.image,
        name = product.name,
        desc = product.description,
        price = format_money(product.price),
    )
}

// == Cart Fragments ==
/// One cart-row fragment for a product and its quantity, with the line
/// total and the quantity/remove forms.
pub fn cart_item_fragment(product: &Product, quantity: u32) -> String {
    let line_total = format_money(product.price * Decimal::from(quantity));
    format!(
        r#"<div class="card mb-3">
  <div class="card-body">
    <div class="row align-items-center">
      <div class="col-md-2">
        <img src="/images/{image}" class="img-fluid rounded" alt="{name}">
      </div>
      <div class="col-md-5">
        <h5>{name}</h5>
      </div>
      <div class="col-md-5">
        <div class="d-flex justify-content-between align-items-center">
          <form method="POST" action="/cart/update/{id}" class="d-flex align-items-center">
            <label class="me-2">Qty:</label>
            <input type="number" name="quantity" value="{qty}" min="0" max="99"
              class="form-control form-control-sm" style="width: 70px;"
              onchange="this.form.submit()">
          </form>
          <span>${line_total}</span>
          <form method="POST" action="/cart/update/{id}" class="ms-3">
            <input type="hidden" name="quantity" value="0">
            <button type="submit" class="btn btn-link text-danger p-0">Remove</button>
          </form>
        </div>
      </div>
    </div>
  </div>
</div>
"#,
        id = product.id,
        image = product.image,
        name = product.name,
        qty = quantity,
        line_total = line_total,
    )
}

/// Placeholder set for the cart page.
///
/// Cart entries whose product no longer exists in the catalog render
/// nothing, mirroring how pricing skips them.
pub fn cart_replacements(cart: &Cart, catalog: &Catalog, policy: &ShippingPolicy) -> Replacements {
    let items_html: String = cart
        .iter()
        .filter_map(|(id, qty)| {
            let id: u64 = id.parse().ok()?;
            let product = catalog.find(id)?;
            Some(cart_item_fragment(product, *qty))
        })
        .collect();

    let totals = Totals::compute(cart, catalog, policy);

    let shipping_message = if policy.waives_fee_at(totals.subtotal) {
        r#"<div class="alert alert-success mb-2 py-2">Free shipping applied!</div>"#.to_string()
    } else if let Some(threshold) = policy.free_threshold() {
        format!(
            r#"<div class="text-muted small mb-2">Free shipping on orders over ${}</div>"#,
            format_money(threshold)
        )
    } else {
        String::new()
    };

    Replacements::new()
        .with(
            "{CART_ITEMS}",
            if items_html.is_empty() {
                "<p>Your cart is empty</p>".to_string()
            } else {
                items_html
            },
        )
        .with("{SUBTOTAL}", format_money(totals.subtotal))
        .with("{VAT}", format_money(totals.vat))
        .with("{SHIPPING}", format_money(totals.shipping))
        .with("{TOTAL}", format_money(totals.total))
        .with("{FREE_SHIPPING_MESSAGE}", shipping_message)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;

    fn product(id: u64, name: &str, price: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: format!("{name} description"),
            price: price.parse().unwrap(),
            image: format!("{id}.png"),
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            products: vec![
                product(1, "Alpha Lamp", "100.00"),
                product(2, "Beta Chair", "45.50"),
            ],
        }
    }

    #[test]
    fn test_home_replacements_number_slots_in_order() {
        let reps = home_replacements(&catalog().products);
        let out = render(b"{1_Name}|{2_Name}|{1_product_id}", &reps).unwrap();
        assert_eq!(out, "Alpha Lamp|Beta Chair|1");
    }

    #[test]
    fn test_home_surplus_slots_stay_verbatim() {
        let reps = home_replacements(&catalog().products);
        let out = render(b"{2_Name}|{3_Name}", &reps).unwrap();
        assert_eq!(out, "Beta Chair|{3_Name}");
    }

    #[test]
    fn test_home_surplus_products_are_ignored() {
        // One slot, two products: the second never appears, no error.
        let reps = home_replacements(&catalog().products);
        let out = render(b"only {1_Name}", &reps).unwrap();
        assert_eq!(out, "only Alpha Lamp");
    }

    #[test]
    fn test_detail_replacements() {
        let p = product(1, "Alpha Lamp", "100");
        let reps = detail_replacements(&p).unwrap();
        let out = render(
            b"{Product_Title} @ {Product_Price} [{Product_Id}]",
            &reps,
        )
        .unwrap();
        assert_eq!(out, "Alpha Lamp @ 100.00 [1]");
    }

    #[test]
    fn test_detail_json_is_pretty_printed() {
        let reps = detail_replacements(&product(1, "Alpha Lamp", "100")).unwrap();
        let out = render(b"{JSON}", &reps).unwrap();
        assert!(out.contains("\"ProductName\": \"Alpha Lamp\""));
        assert!(out.contains('\n'));
    }

    #[test]
    fn test_detail_survives_dollar_description() {
        // A description with regex-special characters must pass through
        // untouched.
        let mut p = product(1, "Alpha Lamp", "100");
        p.description = "now $1 off (was $2)".to_string();
        let reps = detail_replacements(&p).unwrap();
        let out = render(b"{Product_Description}", &reps).unwrap();
        assert_eq!(out, "now $1 off (was $2)");
    }

    #[test]
    fn test_product_fragment_contains_links_and_price() {
        let html = product_fragment(&product(2, "Beta Chair", "45.5"));
        assert!(html.contains("/product/2"));
        assert!(html.contains("/images/2.png"));
        assert!(html.contains("$45.50"));
    }

    #[test]
    fn test_cart_item_fragment_line_total() {
        let html = cart_item_fragment(&product(1, "Alpha Lamp", "100.00"), 3);
        assert!(html.contains("$300.00"));
        assert!(html.contains(r#"value="3""#));
        assert!(html.contains("/cart/update/1"));
    }

    #[test]
    fn test_cart_replacements_empty_cart() {
        let reps = cart_replacements(&Cart::new(), &catalog(), &ShippingPolicy::default());
        let out = render(b"{CART_ITEMS}", &reps).unwrap();
        assert_eq!(out, "<p>Your cart is empty</p>");
    }

    #[test]
    fn test_cart_replacements_skips_unknown_ids() {
        let mut cart = Cart::new();
        cart.insert("1".to_string(), 1);
        cart.insert("99".to_string(), 2);

        let reps = cart_replacements(&cart, &catalog(), &ShippingPolicy::default());
        let out = render(b"{CART_ITEMS}{SUBTOTAL}", &reps).unwrap();
        assert!(out.contains("Alpha Lamp"));
        assert!(!out.contains("99"));
        assert!(out.ends_with("100.00"));
    }

    #[test]
    fn test_cart_replacements_free_shipping_banner() {
        let mut cart = Cart::new();
        cart.insert("1".to_string(), 5); // 500.00 subtotal

        let reps = cart_replacements(&cart, &catalog(), &ShippingPolicy::default());
        let out = render(b"{FREE_SHIPPING_MESSAGE}{SHIPPING}", &reps).unwrap();
        assert!(out.contains("Free shipping applied!"));
        assert!(out.ends_with("0.00"));
    }
}
