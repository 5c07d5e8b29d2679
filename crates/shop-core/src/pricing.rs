//! # Pricing
//!
//! Line totals are unit price × quantity and nothing else: no discounts, no
//! tax. Because [`Money`] counts whole minor units, there is no rounding step.

use crate::money::Money;

/// Total charged for `quantity` units at `unit_price`.
///
/// ## Example
/// ```rust
/// use shop_core::{pricing, Money};
///
/// let total = pricing::calculate_total(Money::from_cents(250), 5);
/// assert_eq!(total, Money::from_cents(1250));
/// ```
#[inline]
pub fn calculate_total(unit_price: Money, quantity: i64) -> Money {
    unit_price.multiply_quantity(quantity)
}
