//! # Store
//!
//! Owns the catalog in insertion order and processes multi-line orders.
//!
//! ## Order Processing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  order([(A, 2), (A, 3), (B, 1)])                                        │
//! │                                                                         │
//! │  for each line, in order:                                              │
//! │    ├── inactive?          → NotActive          ┐                        │
//! │    ├── qty <= 0?          → InvalidArgument    ├─ abort, earlier lines │
//! │    ├── qty > live stock?  → InsufficientStock  ┘  stay committed        │
//! │    └── total += product.buy(qty)                                       │
//! │                                                                         │
//! │  Stock is checked against the live value, so a second line for the    │
//! │  same product sees what the first line left behind.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no reservation phase and no rollback: a failed order returns
//! the error only, while stock taken by the earlier lines stays taken.

use tracing::{info, warn};

use crate::error::{CoreError, CoreResult};
use crate::product::{Product, ProductId};
use crate::validation::validate_order_quantity;

/// One `(product, quantity)` line of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        OrderLine {
            product_id,
            quantity,
        }
    }
}

/// An ordered collection of products.
#[derive(Debug, Default)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    /// Creates a store holding `products` in the given order.
    pub fn new(products: Vec<Product>) -> Self {
        Store { products }
    }

    /// Appends a product and returns its id.
    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = product.id();
        self.products.push(product);
        id
    }

    /// Removes a product by identity and hands it back.
    pub fn remove_product(&mut self, id: ProductId) -> CoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;
        Ok(self.products.remove(index))
    }

    /// Number of products held, active or not.
    ///
    /// This counts entries; it does not sum their stock.
    pub fn get_total_quantity(&self) -> usize {
        self.products.len()
    }

    /// Returns the active products in insertion order.
    pub fn get_all_products(&self) -> CoreResult<Vec<&Product>> {
        let active: Vec<&Product> = self.products.iter().filter(|p| p.is_active()).collect();

        if active.is_empty() {
            return Err(CoreError::NoActiveProducts);
        }
        Ok(active)
    }

    /// Every product, active or not.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    /// First product whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name() == name)
    }

    /// Processes `shopping_list` line by line and returns the total price.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{OrderLine, Product, Store};
    ///
    /// let mut store = Store::default();
    /// let pixel = store.add_product(Product::new("Google Pixel 7", 500.0, 4).unwrap());
    ///
    /// let total = store.order(&[OrderLine::new(pixel, 2)]).unwrap();
    /// assert_eq!(total, 1000.0);
    ///
    /// // Only 2 left: the order fails and returns no total
    /// assert!(store.order(&[OrderLine::new(pixel, 1), OrderLine::new(pixel, 3)]).is_err());
    /// // ...but the first line stays committed
    /// assert_eq!(store.product(pixel).unwrap().quantity(), 1);
    /// ```
    pub fn order(&mut self, shopping_list: &[OrderLine]) -> CoreResult<f64> {
        let mut total = 0.0;

        for (index, line) in shopping_list.iter().enumerate() {
            match self.order_line(line) {
                Ok(price) => total += price,
                Err(err) => {
                    warn!(
                        line = index,
                        committed_total = total,
                        error = %err,
                        "Order aborted"
                    );
                    return Err(err);
                }
            }
        }

        info!(lines = shopping_list.len(), total, "Order placed");
        Ok(total)
    }

    fn order_line(&mut self, line: &OrderLine) -> CoreResult<f64> {
        let product = self
            .product_mut(line.product_id)
            .ok_or_else(|| CoreError::ProductNotFound(line.product_id.to_string()))?;

        if !product.is_active() {
            return Err(CoreError::NotActive(product.name().to_string()));
        }

        validate_order_quantity(line.quantity)?;

        if product.tracks_stock() && line.quantity > product.quantity() {
            return Err(CoreError::InsufficientStock {
                name: product.name().to_string(),
                available: product.quantity(),
                requested: line.quantity,
            });
        }

        product.buy(line.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
