//! Cart Codec Module
//!
//! The shopping cart lives entirely in a client cookie: a URL-encoded JSON
//! object mapping product-id strings to quantities. Every request rebuilds
//! cart state from the cookie; there is no server-side cart storage.

use std::collections::BTreeMap;

// == Cookie Policy ==
/// Cookie name carrying the cart.
pub const CART_COOKIE: &str = "cart";

/// Cookie lifetime in seconds, refreshed on every cart write.
pub const CART_MAX_AGE_SECS: u64 = 600;

/// Largest quantity a single cart entry can hold.
pub const MAX_QUANTITY: i64 = 99;

/// Client-held cart state: product-id string to quantity.
///
/// A BTreeMap keeps iteration in id order so rendering is deterministic.
pub type Cart = BTreeMap<String, u32>;

// == Decode ==
/// Decodes a cookie value into a cart.
///
/// URL-decode, then JSON-parse. Any failure — absent value, malformed
/// escape, malformed JSON, non-object JSON — yields an empty cart; this
/// function never errors. Zero quantities are dropped on the way in so the
/// "quantity 0 means entry absent" invariant holds for crafted cookies too.
pub fn decode(raw: Option<&str>) -> Cart {
    let Some(raw) = raw else {
        return Cart::new();
    };
    let Ok(decoded) = urlencoding::decode(raw) else {
        return Cart::new();
    };
    let mut cart: Cart = serde_json::from_str(&decoded).unwrap_or_default();
    cart.retain(|_, qty| *qty > 0);
    cart
}

// == Encode ==
/// Encodes a cart as a cookie value: JSON-serialize, then URL-encode.
pub fn encode(cart: &Cart) -> String {
    let json = serde_json::to_string(cart).unwrap_or_else(|_| "{}".to_string());
    urlencoding::encode(&json).into_owned()
}

// == Cookie Helpers ==
/// Builds the full `Set-Cookie` value for a cart.
pub fn set_cookie(cart: &Cart) -> String {
    format!(
        "{CART_COOKIE}={}; Max-Age={CART_MAX_AGE_SECS}; Path=/",
        encode(cart)
    )
}

/// Extracts and decodes the cart from a `Cookie` request header.
pub fn from_cookie_header(header: Option<&str>) -> Cart {
    let value = header.and_then(|h| {
        h.split(';')
            .map(str::trim)
            .find_map(|part| part.strip_prefix("cart="))
    });
    decode(value)
}

// == Mutation ==
/// Applies a quantity change to the cart.
///
/// A positive quantity sets the entry, capped at [`MAX_QUANTITY`]; zero or
/// negative removes it (idempotent if absent). The id is deliberately not
/// checked against the catalog: entries for vanished products simply get
/// skipped at render and pricing time.
pub fn apply(cart: &mut Cart, id: &str, quantity: i64) {
    if quantity > 0 {
        cart.insert(id.to_string(), quantity.min(MAX_QUANTITY) as u32);
    } else {
        cart.remove(id);
    }
}


// == Property Tests ==
#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Generates valid carts: id strings mapped to quantities in 1..=99.
    fn cart_strategy() -> impl Strategy<Value = Cart> {
        proptest::collection::btree_map("[1-9][0-9]{0,3}", 1u32..=99, 0..8)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Round-trip law: decode(encode(cart)) == cart for all valid carts.
        #[test]
        fn prop_roundtrip(original in cart_strategy()) {
            let encoded = encode(&original);
            prop_assert_eq!(decode(Some(&encoded)), original);
        }

        // decode never panics and never yields a zero quantity, whatever
        // the cookie value contains.
        #[test]
        fn prop_decode_total(raw in ".{0,128}") {
            let decoded = decode(Some(&raw));
            prop_assert!(decoded.values().all(|qty| *qty > 0));
        }

        // Applying then removing leaves the cart as it started.
        #[test]
        fn prop_apply_remove_restores(original in cart_strategy(), qty in 1i64..=200) {
            // ids from the strategy have at most four digits, so this one
            // can never collide with an existing entry
            let id = "99999";
            let mut cart = original.clone();

            apply(&mut cart, id, qty);
            prop_assert!(cart.get(id).copied().unwrap_or(0) <= 99);

            apply(&mut cart, id, 0);
            prop_assert_eq!(cart, original);
        }
    }
}
