//! Invoice line items
//!
//! A line item snapshots the product it was created from and carries its own
//! quantity, unit price and IVA bracket. Fields are private so the stored
//! subtotal can only change through the mutators. Each mutator computes the
//! new subtotal first and leaves the item untouched when it would overflow.

use core_kernel::LineItemId;
use domain_catalog::{Product, TaxCategory};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::InvoicingError;

/// Smallest quantity a line item may hold
pub const MIN_QUANTITY: Decimal = Decimal::ONE;

/// One row of an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    id: LineItemId,
    product: Product,
    quantity: Decimal,
    unit_price: Decimal,
    tax_category: TaxCategory,
    subtotal: Decimal,
}

impl LineItem {
    /// Creates a row for one unit of the product at its catalog price and bracket
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: LineItemId::new_v7(),
            product: product.clone(),
            quantity: MIN_QUANTITY,
            unit_price: product.unit_price,
            tax_category: product.tax_category,
            // one unit at catalog price
            subtotal: product.unit_price,
        }
    }

    /// Returns the line item id
    pub fn id(&self) -> LineItemId {
        self.id
    }

    /// Returns the product snapshot
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the quantity
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Returns the unit price
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Returns the IVA bracket
    pub fn tax_category(&self) -> TaxCategory {
        self.tax_category
    }

    /// Returns `quantity × unit price`
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Sets the quantity. Values below one, or that would overflow the
    /// subtotal, are rejected and leave the item unchanged.
    pub fn set_quantity(&mut self, quantity: Decimal) -> Result<(), InvoicingError> {
        if quantity < MIN_QUANTITY {
            return Err(InvoicingError::InvalidQuantity(quantity));
        }
        let subtotal = quantity
            .checked_mul(self.unit_price)
            .ok_or(InvoicingError::InvalidQuantity(quantity))?;
        self.quantity = quantity;
        self.subtotal = subtotal;
        Ok(())
    }

    /// Adds one unit
    pub fn increment(&mut self) -> Result<(), InvoicingError> {
        let quantity = self
            .quantity
            .checked_add(Decimal::ONE)
            .ok_or(InvoicingError::InvalidQuantity(self.quantity))?;
        self.set_quantity(quantity)
    }

    /// Removes one unit, never going below the minimum quantity
    pub fn decrement(&mut self) {
        let quantity = (self.quantity - Decimal::ONE).max(MIN_QUANTITY);
        // a smaller quantity cannot overflow
        if let Some(subtotal) = quantity.checked_mul(self.unit_price) {
            self.quantity = quantity;
            self.subtotal = subtotal;
        }
    }

    /// Sets the unit price. Negative prices, and prices that would overflow
    /// the subtotal, are rejected.
    pub fn set_unit_price(&mut self, unit_price: Decimal) -> Result<(), InvoicingError> {
        if unit_price.is_sign_negative() && !unit_price.is_zero() {
            return Err(InvoicingError::InvalidPrice(unit_price.to_string()));
        }
        let subtotal = self
            .quantity
            .checked_mul(unit_price)
            .ok_or_else(|| InvoicingError::InvalidPrice(unit_price.to_string()))?;
        self.unit_price = unit_price;
        self.subtotal = subtotal;
        Ok(())
    }

    /// Moves the item to another IVA bracket
    pub fn set_tax_category(&mut self, tax_category: TaxCategory) {
        self.tax_category = tax_category;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product() -> Product {
        Product::new("PROD002", "Producto de Ejemplo 2", "KG", dec!(5000), TaxCategory::Iva5)
    }

    #[test]
    fn test_from_product_defaults() {
        let item = LineItem::from_product(&product());

        assert_eq!(item.quantity(), dec!(1));
        assert_eq!(item.unit_price(), dec!(5000));
        assert_eq!(item.tax_category(), TaxCategory::Iva5);
        assert_eq!(item.subtotal(), dec!(5000));
    }

    #[test]
    fn test_fractional_quantity_above_minimum() {
        let mut item = LineItem::from_product(&product());
        item.set_quantity(dec!(2.5)).unwrap();

        assert_eq!(item.subtotal(), dec!(12500));
    }

    #[test]
    fn test_quantity_below_one_rejected() {
        let mut item = LineItem::from_product(&product());
        item.set_quantity(dec!(3)).unwrap();

        let result = item.set_quantity(dec!(0.5));
        assert!(matches!(result, Err(InvoicingError::InvalidQuantity(_))));
        assert_eq!(item.quantity(), dec!(3));
        assert_eq!(item.subtotal(), dec!(15000));
    }

    #[test]
    fn test_decrement_clamps_at_one() {
        let mut item = LineItem::from_product(&product());
        item.increment().unwrap();
        item.decrement();
        item.decrement();

        assert_eq!(item.quantity(), dec!(1));
        assert_eq!(item.subtotal(), dec!(5000));
    }

    #[test]
    fn test_price_override_does_not_touch_product() {
        let mut item = LineItem::from_product(&product());
        item.set_unit_price(dec!(4500)).unwrap();

        assert_eq!(item.subtotal(), dec!(4500));
        assert_eq!(item.product().unit_price, dec!(5000));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut item = LineItem::from_product(&product());
        assert!(item.set_unit_price(dec!(-10)).is_err());
        assert_eq!(item.unit_price(), dec!(5000));
    }

    #[test]
    fn test_overflowing_quantity_rejected() {
        let mut item = LineItem::from_product(&product());
        item.set_unit_price(dec!(1000000000000000)).unwrap();

        let result = item.set_quantity(dec!(1000000000000000));

        assert!(matches!(result, Err(InvoicingError::InvalidQuantity(_))));
        assert_eq!(item.quantity(), dec!(1));
        assert_eq!(item.subtotal(), dec!(1000000000000000));
    }

    #[test]
    fn test_overflowing_price_rejected() {
        let mut item = LineItem::from_product(&product());
        item.set_quantity(dec!(1000000000000000)).unwrap();

        let result = item.set_unit_price(dec!(1000000000000000));

        assert!(matches!(result, Err(InvoicingError::InvalidPrice(_))));
        assert_eq!(item.unit_price(), dec!(5000));
        assert_eq!(item.subtotal(), dec!(5000000000000000000));
    }

    #[test]
    fn test_increment_at_maximum_rejected() {
        let mut item = LineItem::from_product(&product());
        item.set_unit_price(Decimal::ONE).unwrap();
        item.set_quantity(Decimal::MAX).unwrap();

        assert!(item.increment().is_err());
        assert_eq!(item.quantity(), Decimal::MAX);
    }
}
