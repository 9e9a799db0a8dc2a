//! # Promotions
//!
//! Named pricing strategies that replace `unit price × quantity` when a
//! product is bought.
//!
//! ## Pricing Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  unit price p, quantity n                                               │
//! │                                                                         │
//! │  PercentageDiscount(x)   p·n·(1 − x/100)                               │
//! │  SecondItemHalfPrice     ⌊n/2⌋·(p + p/2) + (n mod 2)·p                  │
//! │  BuyTwoGetOneFree        p·(n − ⌊n/3⌋)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A product holds at most one promotion; setting another replaces it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::product::Product;

/// Display name used by [`Promotion::second_item_half_price`].
pub const SECOND_ITEM_HALF_PRICE_NAME: &str = "Second Half price!";

/// Display name used by [`Promotion::buy_two_get_one_free`].
pub const BUY_TWO_GET_ONE_FREE_NAME: &str = "Third One Free!";

fn default_second_item_name() -> String {
    SECOND_ITEM_HALF_PRICE_NAME.to_string()
}

fn default_buy_two_name() -> String {
    BUY_TWO_GET_ONE_FREE_NAME.to_string()
}

/// A pricing strategy attached to a product.
///
/// ## Configuration Format
/// ```toml
/// promotion = { kind = "percentage_discount", name = "30% off!", percent = 30.0 }
/// promotion = { kind = "second_item_half_price" }
/// promotion = { kind = "buy_two_get_one_free", name = "3 for 2" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Promotion {
    /// Fixed percentage off the whole line. The percent is not range-checked.
    PercentageDiscount { name: String, percent: f64 },

    /// Every second unit costs half.
    SecondItemHalfPrice {
        #[serde(default = "default_second_item_name")]
        name: String,
    },

    /// Every third unit is free.
    BuyTwoGetOneFree {
        #[serde(default = "default_buy_two_name")]
        name: String,
    },
}

impl Promotion {
    pub fn percentage_discount(name: impl Into<String>, percent: f64) -> Self {
        Promotion::PercentageDiscount {
            name: name.into(),
            percent,
        }
    }

    pub fn second_item_half_price() -> Self {
        Promotion::SecondItemHalfPrice {
            name: default_second_item_name(),
        }
    }

    pub fn buy_two_get_one_free() -> Self {
        Promotion::BuyTwoGetOneFree {
            name: default_buy_two_name(),
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        match self {
            Promotion::PercentageDiscount { name, .. }
            | Promotion::SecondItemHalfPrice { name }
            | Promotion::BuyTwoGetOneFree { name } => name,
        }
    }

    /// Prices `quantity` units of `product` under this promotion.
    ///
    /// Pure: never touches the product's stock. Quantities below one fall
    /// back to `price × quantity`.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Product, Promotion};
    ///
    /// let laptop = Product::new("MacBook Air M2", 100.0, 10).unwrap();
    /// assert_eq!(Promotion::second_item_half_price().apply(&laptop, 3), 250.0);
    /// assert_eq!(Promotion::buy_two_get_one_free().apply(&laptop, 6), 400.0);
    /// ```
    pub fn apply(&self, product: &Product, quantity: i64) -> f64 {
        let unit_price = product.price();
        let total = match self {
            Promotion::PercentageDiscount { percent, .. } => {
                unit_price * quantity as f64 * (1.0 - percent / 100.0)
            }
            Promotion::SecondItemHalfPrice { .. } => {
                if quantity < 1 {
                    unit_price * quantity as f64
                } else {
                    let pairs = (quantity / 2) as f64;
                    let single = (quantity % 2) as f64;
                    pairs * (unit_price + unit_price / 2.0) + single * unit_price
                }
            }
            Promotion::BuyTwoGetOneFree { .. } => {
                if quantity < 1 {
                    unit_price * quantity as f64
                } else {
                    let free = quantity / 3;
                    unit_price * (quantity - free) as f64
                }
            }
        };

        debug!(
            promotion = self.name(),
            product = product.name(),
            quantity,
            total,
            "Applied promotion"
        );
        total
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn hundred() -> Product {
        Product::new("Test Product", 100.0, 100).unwrap()
    }

    #[test]
    fn test_second_item_half_price() {
        let promo = Promotion::second_item_half_price();
        let product = hundred();
        assert_eq!(promo.apply(&product, 1), 100.0);
        assert_eq!(promo.apply(&product, 2), 150.0);
        assert_eq!(promo.apply(&product, 3), 250.0);
        assert_eq!(promo.apply(&product, 0), 0.0);
    }

    #[test]
    fn test_buy_two_get_one_free() {
        let promo = Promotion::buy_two_get_one_free();
        let product = hundred();
        assert_eq!(promo.apply(&product, 2), 200.0);
        assert_eq!(promo.apply(&product, 3), 200.0);
        assert_eq!(promo.apply(&product, 6), 400.0);
        assert_eq!(promo.apply(&product, 7), 500.0);
    }

    #[test]
    fn test_percentage_discount() {
        let promo = Promotion::percentage_discount("30% off!", 30.0);
        let product = hundred();
        assert!((promo.apply(&product, 1) - 70.0).abs() < 1e-9);
        assert!((promo.apply(&product, 4) - 280.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentage_discount_is_not_clamped() {
        let promo = Promotion::percentage_discount("Pay us", -50.0);
        assert_eq!(promo.apply(&hundred(), 2), 300.0);
    }

    #[test]
    fn test_apply_does_not_touch_stock() {
        let product = hundred();
        Promotion::buy_two_get_one_free().apply(&product, 9);
        assert_eq!(product.quantity(), 100);
    }

    #[test]
    fn test_names() {
        assert_eq!(Promotion::second_item_half_price().name(), "Second Half price!");
        assert_eq!(Promotion::buy_two_get_one_free().name(), "Third One Free!");
        assert_eq!(Promotion::percentage_discount("30% off!", 30.0).name(), "30% off!");
    }

    #[test]
    fn test_deserialize_tagged() {
        let promo: Promotion =
            serde_json::from_str(r#"{"kind":"second_item_half_price"}"#).unwrap();
        assert_eq!(promo, Promotion::second_item_half_price());

        let promo: Promotion = serde_json::from_str(
            r#"{"kind":"percentage_discount","name":"10% off","percent":10.0}"#,
        )
        .unwrap();
        assert_eq!(promo.name(), "10% off");
    }
}
