//! Pricing Engine Module
//!
//! Computes cart totals from the cart and the catalog. All arithmetic runs
//! on `Decimal`; rounding to two places happens only when a figure is
//! formatted for display, never between steps.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::cart::Cart;
use crate::models::Catalog;

/// Flat VAT rate applied to the subtotal (25%).
pub const VAT_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

// == Shipping Policy ==
/// Shipping charge policy. Exactly one is active at a time; the server
/// selects it from configuration at boot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShippingPolicy {
    /// Fixed fee regardless of subtotal
    Flat { fee: Decimal },
    /// Fixed fee, waived once the subtotal reaches the threshold
    Threshold { fee: Decimal, free_at_or_above: Decimal },
}

impl ShippingPolicy {
    /// Default shipping fee.
    pub const DEFAULT_FEE: Decimal = Decimal::TEN;

    /// Default free-shipping threshold.
    pub const DEFAULT_FREE_THRESHOLD: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

    /// Computes the shipping charge for a subtotal.
    pub fn charge(&self, subtotal: Decimal) -> Decimal {
        match *self {
            ShippingPolicy::Flat { fee } => fee,
            ShippingPolicy::Threshold { fee, free_at_or_above } => {
                if subtotal >= free_at_or_above {
                    Decimal::ZERO
                } else {
                    fee
                }
            }
        }
    }

    /// True when this policy can waive the fee at `subtotal`.
    pub fn waives_fee_at(&self, subtotal: Decimal) -> bool {
        matches!(*self, ShippingPolicy::Threshold { free_at_or_above, .. } if subtotal >= free_at_or_above)
    }

    /// The threshold at which the fee is waived, if the policy has one.
    pub fn free_threshold(&self) -> Option<Decimal> {
        match *self {
            ShippingPolicy::Flat { .. } => None,
            ShippingPolicy::Threshold { free_at_or_above, .. } => Some(free_at_or_above),
        }
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        ShippingPolicy::Threshold {
            fee: Self::DEFAULT_FEE,
            free_at_or_above: Self::DEFAULT_FREE_THRESHOLD,
        }
    }
}

// == Totals ==
/// Cart totals: subtotal, VAT, shipping and their sum.
#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub subtotal: Decimal,
    pub vat: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

impl Totals {
    /// Computes totals for a cart against a catalog.
    ///
    /// Cart entries whose id does not resolve to a catalog product
    /// contribute nothing to the subtotal; they are skipped, not an error.
    pub fn compute(cart: &Cart, catalog: &Catalog, policy: &ShippingPolicy) -> Self {
        let subtotal = cart
            .iter()
            .filter_map(|(id, qty)| {
                let id: u64 = id.parse().ok()?;
                let product = catalog.find(id)?;
                Some(product.price * Decimal::from(*qty))
            })
            .sum::<Decimal>();

        let vat = subtotal * VAT_RATE;
        let shipping = policy.charge(subtotal);
        let total = subtotal + vat + shipping;

        Self {
            subtotal,
            vat,
            shipping,
            total,
        }
    }
}

// == Formatting ==
/// Formats a monetary value with exactly two decimal places.
pub fn format_money(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
