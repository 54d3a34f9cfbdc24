//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use domain_catalog::{Product, TaxCategory};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating IVA brackets
pub fn tax_category_strategy() -> impl Strategy<Value = TaxCategory> {
    prop_oneof![
        Just(TaxCategory::Exempt),
        Just(TaxCategory::Iva5),
        Just(TaxCategory::Iva10),
    ]
}

/// Strategy for unit prices with up to three decimal places, zero included
pub fn price_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000i64).prop_map(|n| Decimal::new(n, 3))
}

/// Strategy for valid quantities: two decimal places, at least one
pub fn quantity_strategy() -> impl Strategy<Value = Decimal> {
    (100i64..=99_999i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for product codes like "P0042"
pub fn product_code_strategy() -> impl Strategy<Value = String> {
    (0u32..10_000u32).prop_map(|n| format!("P{:04}", n))
}

/// Strategy for catalog products
pub fn product_strategy() -> impl Strategy<Value = Product> {
    (product_code_strategy(), price_strategy(), tax_category_strategy()).prop_map(
        |(code, price, category)| {
            Product::new(code, "Producto generado", "UNI", price, category)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_quantities_are_at_least_one(quantity in quantity_strategy()) {
            prop_assert!(quantity >= Decimal::ONE);
            prop_assert!(quantity.scale() <= 2);
        }

        #[test]
        fn test_prices_are_non_negative(price in price_strategy()) {
            prop_assert!(!price.is_sign_negative());
            prop_assert!(price.scale() <= 3);
        }
    }
}
