//! # storefront-core: Pure Business Logic for Storefront
//!
//! Products, promotions and the store's order loop, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront-cli (text menu)                      │   │
//! │  │    list products ──► total count ──► place order                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   store   │  │  product  │  │ promotion │  │ validation│  │   │
//! │  │   │   Store   │  │  Product  │  │ Promotion │  │   rules   │  │   │
//! │  │   │ OrderLine │  │ProductKind│  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • SINGLE-THREADED                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - Product record, kinds and purchase logic
//! - [`promotion`] - Pricing strategies
//! - [`store`] - Catalog and order processing
//! - [`error`] - Domain error types
//! - [`validation`] - Argument checks
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{OrderLine, Product, Promotion, Store};
//!
//! let mut earbuds = Product::new("Bose QuietComfort Earbuds", 250.0, 500).unwrap();
//! earbuds.set_promotion(Promotion::buy_two_get_one_free());
//!
//! let mut store = Store::default();
//! let id = store.add_product(earbuds);
//!
//! let total = store.order(&[OrderLine::new(id, 3)]).unwrap();
//! assert_eq!(total, 500.0);
//! ```

pub mod error;
pub mod product;
pub mod promotion;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use product::{Product, ProductId, ProductKind};
pub use promotion::Promotion;
pub use store::{OrderLine, Store};
