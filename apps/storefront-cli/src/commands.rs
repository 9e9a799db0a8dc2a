//! # Menu Commands
//!
//! The three entry points the menu calls into the core with.
//!
//! ```text
//! menu option 1 ──► list_products()   ──► Store::get_all_products + show
//! menu option 2 ──► total_products()  ──► Store::get_total_quantity
//! menu option 3 ──► place_order()     ──► Store::order
//! ```
//!
//! Each converts `CoreError` into [`ApiError`] so the menu only deals with
//! one error type.

use storefront_core::{OrderLine, Store};

use crate::error::ApiError;

/// Display lines for every active product, in catalog order.
pub fn list_products(store: &Store) -> Result<Vec<String>, ApiError> {
    let products = store.get_all_products()?;
    Ok(products.into_iter().map(|p| p.show()).collect())
}

/// Number of products the store holds.
pub fn total_products(store: &Store) -> usize {
    store.get_total_quantity()
}

/// Places an order and returns its total price.
pub fn place_order(store: &mut Store, lines: &[OrderLine]) -> Result<f64, ApiError> {
    Ok(store.order(lines)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorefrontConfig;
    use crate::error::ErrorCode;

    fn demo_store() -> Store {
        StorefrontConfig::default().build_store().unwrap()
    }

    #[test]
    fn test_list_products() {
        let lines = list_products(&demo_store()).unwrap();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "MacBook Air M2, Price: 1450, Quantity: 100, Promotion: Second Half price!"
        );
        assert_eq!(lines[3], "Windows License, Price: 125, Non-stocked product");
    }

    #[test]
    fn test_list_products_when_empty() {
        let err = list_products(&Store::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NoActiveProducts);
    }

    #[test]
    fn test_total_products() {
        assert_eq!(total_products(&demo_store()), 5);
    }

    #[test]
    fn test_place_order() {
        let mut store = demo_store();
        let earbuds = store.find_by_name("Bose QuietComfort Earbuds").unwrap().id();
        let shipping = store.find_by_name("Shipping").unwrap().id();

        let total = place_order(
            &mut store,
            &[OrderLine::new(earbuds, 3), OrderLine::new(shipping, 1)],
        )
        .unwrap();
        assert_eq!(total, 510.0);

        let err = place_order(&mut store, &[OrderLine::new(shipping, 2)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::LimitExceeded);
    }
}
