//! # Products
//!
//! A product is one owned record with a [`ProductKind`] tag selecting the
//! stock rules it follows.
//!
//! ## Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Plain        stock tracked; deactivates when stock reaches 0           │
//! │  NonStocked   stock pinned at 0; always purchasable (licences, keys)    │
//! │  Limited      stock tracked; at most `maximum` units per single order   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purchase Flow
//! ```text
//! buy(n)
//!   │
//!   ├── Limited and n > maximum?     → LimitExceeded
//!   ├── n <= 0?                      → InvalidArgument
//!   ├── inactive?                    → NotActive
//!   ├── stocked and n > stock?       → InsufficientStock
//!   │
//!   ├── price = promotion.apply(self, n) or price × n
//!   └── stock -= n; deactivate at 0  (after pricing, never before)
//! ```

use std::fmt;

use tracing::debug;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::promotion::Promotion;
use crate::validation::{
    validate_maximum, validate_order_quantity, validate_price, validate_product_name,
    validate_stock,
};

// =============================================================================
// Product Identity
// =============================================================================

/// Identity of a product inside a store.
///
/// Names are not unique, so removal and order lines go through this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(Uuid);

impl ProductId {
    fn generate() -> Self {
        ProductId(Uuid::new_v4())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Product Kind
// =============================================================================

/// Selects the stock rules a product follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    Plain,
    /// Unlimited good; quantity always reads 0.
    NonStocked,
    /// Caps the quantity of a single purchase, not the lifetime total.
    Limited { maximum: i64 },
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// ## Invariants
/// - `quantity >= 0`
/// - Stocked products deactivate whenever a mutation leaves them at 0.
///   Reactivation only happens through [`Product::activate`].
#[derive(Debug)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    quantity: i64,
    active: bool,
    promotion: Option<Promotion>,
    kind: ProductKind,
}

impl Product {
    /// Creates a plain stocked product. New products start active.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::Product;
    ///
    /// let product = Product::new("Google Pixel 7", 500.0, 250).unwrap();
    /// assert!(product.is_active());
    /// assert!(Product::new("", 500.0, 250).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> CoreResult<Self> {
        Self::build(name.into(), price, quantity, ProductKind::Plain)
    }

    /// Creates a product whose stock is never tracked.
    pub fn non_stocked(name: impl Into<String>, price: f64) -> CoreResult<Self> {
        Self::build(name.into(), price, 0, ProductKind::NonStocked)
    }

    /// Creates a stocked product with a per-order cap.
    pub fn limited(
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        maximum: i64,
    ) -> CoreResult<Self> {
        validate_maximum(maximum)?;
        Self::build(name.into(), price, quantity, ProductKind::Limited { maximum })
    }

    fn build(name: String, price: f64, quantity: i64, kind: ProductKind) -> CoreResult<Self> {
        validate_product_name(&name)?;
        validate_price(price)?;
        validate_stock(quantity)?;

        Ok(Product {
            id: ProductId::generate(),
            name,
            price,
            quantity,
            active: true,
            promotion: None,
            kind,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[inline]
    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// Per-order cap, for limited products.
    pub fn maximum(&self) -> Option<i64> {
        match self.kind {
            ProductKind::Limited { maximum } => Some(maximum),
            _ => None,
        }
    }

    /// Whether purchases are checked against and deducted from stock.
    #[inline]
    pub fn tracks_stock(&self) -> bool {
        !matches!(self.kind, ProductKind::NonStocked)
    }

    /// Current stock.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Replaces the stock level.
    ///
    /// Setting 0 deactivates the product; setting a positive value never
    /// reactivates it. A no-op for non-stocked products.
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        if !self.tracks_stock() {
            debug!(product = %self.name, "Ignoring quantity update on non-stocked product");
            return Ok(());
        }

        validate_stock(quantity)?;
        self.quantity = quantity;
        if self.quantity == 0 {
            self.deactivate();
        }
        Ok(())
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn promotion(&self) -> Option<&Promotion> {
        self.promotion.as_ref()
    }

    /// Attaches a promotion, replacing any previous one.
    pub fn set_promotion(&mut self, promotion: Promotion) {
        self.promotion = Some(promotion);
    }

    /// Detaches the promotion and returns it.
    pub fn remove_promotion(&mut self) -> Option<Promotion> {
        self.promotion.take()
    }

    /// Renders the product for display.
    ///
    /// ```rust
    /// use storefront_core::{Product, Promotion};
    ///
    /// let mut laptop = Product::new("MacBook Air M2", 1450.0, 100).unwrap();
    /// assert_eq!(laptop.show(), "MacBook Air M2, Price: 1450, Quantity: 100");
    ///
    /// laptop.set_promotion(Promotion::second_item_half_price());
    /// assert_eq!(
    ///     laptop.show(),
    ///     "MacBook Air M2, Price: 1450, Quantity: 100, Promotion: Second Half price!"
    /// );
    /// ```
    pub fn show(&self) -> String {
        self.to_string()
    }

    // =========================================================================
    // Purchasing
    // =========================================================================

    /// Buys `quantity` units and returns their price.
    ///
    /// Stock is only decremented once pricing has succeeded. Non-stocked
    /// products skip the stock check and keep their quantity at 0.
    pub fn buy(&mut self, quantity: i64) -> CoreResult<f64> {
        if let ProductKind::Limited { maximum } = self.kind {
            if quantity > maximum {
                return Err(CoreError::LimitExceeded {
                    name: self.name.clone(),
                    maximum,
                    requested: quantity,
                });
            }
        }

        validate_order_quantity(quantity)?;

        if !self.active {
            return Err(CoreError::NotActive(self.name.clone()));
        }

        if self.tracks_stock() && quantity > self.quantity {
            return Err(CoreError::InsufficientStock {
                name: self.name.clone(),
                available: self.quantity,
                requested: quantity,
            });
        }

        let total = match &self.promotion {
            Some(promotion) => promotion.apply(self, quantity),
            None => self.price * quantity as f64,
        };

        if self.tracks_stock() {
            self.quantity -= quantity;
            if self.quantity == 0 {
                self.deactivate();
            }
        }

        debug!(
            product = %self.name,
            quantity,
            total,
            remaining = self.quantity,
            "Product bought"
        );
        Ok(total)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ProductKind::Plain => write!(
                f,
                "{}, Price: {}, Quantity: {}",
                self.name, self.price, self.quantity
            )?,
            ProductKind::NonStocked => {
                write!(f, "{}, Price: {}, Non-stocked product", self.name, self.price)?
            }
            ProductKind::Limited { maximum } => write!(
                f,
                "{}, Price: {}, Quantity: {}, Maximum per order: {}",
                self.name, self.price, self.quantity, maximum
            )?,
        }

        if let Some(promotion) = &self.promotion {
            write!(f, ", Promotion: {}", promotion.name())?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_normal_product() {
        let product = Product::new("Test Product", 10.0, 100).unwrap();
        assert_eq!(product.name(), "Test Product");
        assert_eq!(product.price(), 10.0);
        assert_eq!(product.quantity(), 100);
        assert!(product.is_active());
        assert!(product.promotion().is_none());
    }

    #[test]
    fn test_create_invalid_product() {
        assert!(matches!(
            Product::new("", 10.0, 100),
            Err(CoreError::InvalidArgument(_))
        ));
        assert!(matches!(
            Product::new("Test Product", -10.0, 100),
            Err(CoreError::InvalidArgument(_))
        ));
        assert!(matches!(
            Product::new("Test Product", 10.0, -100),
            Err(CoreError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_zero_stock_product_starts_active() {
        let product = Product::new("Test Product", 10.0, 0).unwrap();
        assert!(product.is_active());
    }

    #[test]
    fn test_product_purchase() {
        let mut product = Product::new("Test Product", 10.0, 100).unwrap();
        let total = product.buy(10).unwrap();
        assert_eq!(total, 100.0);
        assert_eq!(product.quantity(), 90);
        assert!(product.is_active());
    }

    #[test]
    fn test_product_becomes_inactive_at_zero_quantity() {
        let mut product = Product::new("Test Product", 10.0, 1).unwrap();
        product.buy(1).unwrap();
        assert_eq!(product.quantity(), 0);
        assert!(!product.is_active());
    }

    #[test]
    fn test_buy_larger_quantity_than_exists() {
        let mut product = Product::new("Test Product", 10.0, 100).unwrap();
        let err = product.buy(101).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 100,
                requested: 101,
                ..
            }
        ));
        assert_eq!(product.quantity(), 100);
    }

    #[test]
    fn test_buy_non_positive_quantity() {
        let mut product = Product::new("Test Product", 10.0, 100).unwrap();
        assert!(matches!(product.buy(0), Err(CoreError::InvalidArgument(_))));
        assert!(matches!(product.buy(-2), Err(CoreError::InvalidArgument(_))));
    }

    #[test]
    fn test_buy_inactive_product() {
        let mut product = Product::new("Test Product", 10.0, 100).unwrap();
        product.deactivate();
        assert!(matches!(product.buy(1), Err(CoreError::NotActive(_))));
        assert_eq!(product.quantity(), 100);
    }

    #[test]
    fn test_buy_uses_promotion() {
        let mut product = Product::new("Test Product", 100.0, 10).unwrap();
        product.set_promotion(Promotion::buy_two_get_one_free());
        assert_eq!(product.buy(3).unwrap(), 200.0);
        assert_eq!(product.quantity(), 7);
    }

    #[test]
    fn test_last_promotion_wins_and_can_be_removed() {
        let mut product = Product::new("Test Product", 100.0, 10).unwrap();
        product.set_promotion(Promotion::buy_two_get_one_free());
        product.set_promotion(Promotion::second_item_half_price());
        assert_eq!(product.promotion().unwrap().name(), "Second Half price!");

        let removed = product.remove_promotion();
        assert_eq!(removed, Some(Promotion::second_item_half_price()));
        assert_eq!(product.buy(2).unwrap(), 200.0);
    }

    #[test]
    fn test_set_quantity_zero_deactivates() {
        let mut product = Product::new("Test Product", 10.0, 5).unwrap();
        product.set_quantity(0).unwrap();
        assert!(!product.is_active());

        // Restocking does not reactivate
        product.set_quantity(8).unwrap();
        assert_eq!(product.quantity(), 8);
        assert!(!product.is_active());

        product.activate();
        assert!(product.is_active());
    }

    #[test]
    fn test_set_negative_quantity_fails() {
        let mut product = Product::new("Test Product", 10.0, 5).unwrap();
        assert!(product.set_quantity(-1).is_err());
        assert_eq!(product.quantity(), 5);
    }

    #[test]
    fn test_non_stocked_product() {
        let mut licence = Product::non_stocked("Windows License", 125.0).unwrap();
        assert_eq!(licence.quantity(), 0);
        assert!(licence.is_active());

        licence.set_quantity(50).unwrap();
        assert_eq!(licence.quantity(), 0);

        // Ignored before validation, so a negative count is not an error
        assert!(licence.set_quantity(-5).is_ok());
        assert_eq!(licence.quantity(), 0);
        assert!(licence.is_active());

        // Purchasable despite showing zero stock
        assert_eq!(licence.buy(3).unwrap(), 375.0);
        assert_eq!(licence.quantity(), 0);
        assert!(licence.is_active());
    }

    #[test]
    fn test_non_stocked_product_still_checks_quantity_and_active() {
        let mut licence = Product::non_stocked("Windows License", 125.0).unwrap();
        assert!(matches!(licence.buy(0), Err(CoreError::InvalidArgument(_))));

        licence.deactivate();
        assert!(matches!(licence.buy(1), Err(CoreError::NotActive(_))));
    }

    #[test]
    fn test_limited_product() {
        let mut shipping = Product::limited("Shipping", 10.0, 250, 5).unwrap();
        assert_eq!(shipping.maximum(), Some(5));

        assert!(matches!(
            shipping.buy(6),
            Err(CoreError::LimitExceeded {
                maximum: 5,
                requested: 6,
                ..
            })
        ));
        assert_eq!(shipping.buy(5).unwrap(), 50.0);
        assert_eq!(shipping.quantity(), 245);
        // Cap is per order, not per lifetime
        assert_eq!(shipping.buy(5).unwrap(), 50.0);
    }

    #[test]
    fn test_limit_checked_before_active_and_stock() {
        let mut shipping = Product::limited("Shipping", 10.0, 2, 1).unwrap();
        shipping.deactivate();
        assert!(matches!(
            shipping.buy(3),
            Err(CoreError::LimitExceeded { .. })
        ));
    }

    #[test]
    fn test_limited_requires_positive_maximum() {
        assert!(Product::limited("Shipping", 10.0, 250, 0).is_err());
    }

    #[test]
    fn test_show_variants() {
        let licence = Product::non_stocked("Windows License", 125.0).unwrap();
        assert_eq!(licence.show(), "Windows License, Price: 125, Non-stocked product");

        let shipping = Product::limited("Shipping", 10.0, 250, 1).unwrap();
        assert_eq!(
            shipping.show(),
            "Shipping, Price: 10, Quantity: 250, Maximum per order: 1"
        );

        let mut phone = Product::new("Google Pixel 7", 499.5, 3).unwrap();
        phone.set_promotion(Promotion::percentage_discount("30% off!", 30.0));
        assert_eq!(
            phone.show(),
            "Google Pixel 7, Price: 499.5, Quantity: 3, Promotion: 30% off!"
        );
    }

    #[test]
    fn test_ids_are_distinct() {
        let a = Product::new("Same", 1.0, 1).unwrap();
        let b = Product::new("Same", 1.0, 1).unwrap();
        assert_ne!(a.id(), b.id());
    }
}
