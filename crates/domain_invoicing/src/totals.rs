//! Invoice-level aggregates
//!
//! [`InvoiceTotals`] is a pure function of a slice of line items. Callers
//! recompute it whenever they need it instead of caching a copy that could
//! drift from the items.

use core_kernel::{Currency, Money, MoneyError};
use domain_catalog::TaxCategory;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::InvoicingError;
use crate::line_item::LineItem;

/// Totals printed at the foot of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvoiceTotals {
    /// Sum of all quantities
    pub quantity_total: Decimal,
    /// Subtotal of exempt items
    pub subtotal_exempt: Money,
    /// Subtotal of items in the 5% bracket
    pub subtotal_iva5: Money,
    /// Subtotal of items in the 10% bracket
    pub subtotal_iva10: Money,
    /// Sum of the three bracket subtotals
    pub total_sale: Money,
    /// IVA charged on the 5% bracket
    pub tax_iva5: Money,
    /// IVA charged on the 10% bracket
    pub tax_iva10: Money,
    /// Total IVA
    pub total_tax: Money,
}

impl InvoiceTotals {
    /// Totals of an invoice with no items
    pub fn zero(currency: Currency) -> Self {
        let zero = Money::zero(currency);
        Self {
            quantity_total: Decimal::ZERO,
            subtotal_exempt: zero,
            subtotal_iva5: zero,
            subtotal_iva10: zero,
            total_sale: zero,
            tax_iva5: zero,
            tax_iva10: zero,
            total_tax: zero,
        }
    }

    /// Aggregates every item from scratch. Sums are exact; amounts too
    /// large to represent fail with [`InvoicingError::Amount`].
    pub fn from_items(items: &[LineItem], currency: Currency) -> Result<Self, InvoicingError> {
        let mut quantity_total = Decimal::ZERO;
        let mut exempt = Decimal::ZERO;
        let mut iva5 = Decimal::ZERO;
        let mut iva10 = Decimal::ZERO;

        for item in items {
            quantity_total = sum(quantity_total, item.quantity())?;
            let bracket = match item.tax_category() {
                TaxCategory::Exempt => &mut exempt,
                TaxCategory::Iva5 => &mut iva5,
                TaxCategory::Iva10 => &mut iva10,
            };
            *bracket = sum(*bracket, item.subtotal())?;
        }

        let subtotal_exempt = Money::new(exempt, currency);
        let subtotal_iva5 = Money::new(iva5, currency);
        let subtotal_iva10 = Money::new(iva10, currency);
        let tax_iva5 = TaxCategory::Iva5.rate().apply(&subtotal_iva5);
        let tax_iva10 = TaxCategory::Iva10.rate().apply(&subtotal_iva10);

        Ok(Self {
            quantity_total,
            subtotal_exempt,
            subtotal_iva5,
            subtotal_iva10,
            total_sale: subtotal_exempt
                .checked_add(&subtotal_iva5)?
                .checked_add(&subtotal_iva10)?,
            tax_iva5,
            tax_iva10,
            total_tax: tax_iva5.checked_add(&tax_iva10)?,
        })
    }

    /// Subtotal for one bracket
    pub fn subtotal_for(&self, category: TaxCategory) -> Money {
        match category {
            TaxCategory::Exempt => self.subtotal_exempt,
            TaxCategory::Iva5 => self.subtotal_iva5,
            TaxCategory::Iva10 => self.subtotal_iva10,
        }
    }
}

fn sum(total: Decimal, value: Decimal) -> Result<Decimal, MoneyError> {
    total.checked_add(value).ok_or(MoneyError::Overflow("invoice totals"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_catalog::Product;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_items_are_zero() {
        assert_eq!(InvoiceTotals::from_items(&[], Currency::PYG).unwrap(), InvoiceTotals::zero(Currency::PYG));
    }

    #[test]
    fn test_mixed_brackets() {
        let items = vec![
            LineItem::from_product(&Product::new("A", "A", "UNI", dec!(10000), TaxCategory::Iva10)),
            LineItem::from_product(&Product::new("B", "B", "KG", dec!(5000), TaxCategory::Iva5)),
            LineItem::from_product(&Product::new("C", "C", "UNI", dec!(50000), TaxCategory::Exempt)),
        ];

        let totals = InvoiceTotals::from_items(&items, Currency::PYG).unwrap();

        assert_eq!(totals.quantity_total, dec!(3));
        assert_eq!(totals.subtotal_for(TaxCategory::Exempt).amount(), dec!(50000));
        assert_eq!(totals.subtotal_iva5.amount(), dec!(5000));
        assert_eq!(totals.subtotal_iva10.amount(), dec!(10000));
        assert_eq!(totals.total_sale.amount(), dec!(65000));
        assert_eq!(totals.tax_iva5.amount(), dec!(250));
        assert_eq!(totals.tax_iva10.amount(), dec!(1000));
        assert_eq!(totals.total_tax.amount(), dec!(1250));
    }

    #[test]
    fn test_fractional_amounts_are_not_rounded() {
        let mut item = LineItem::from_product(&Product::new("A", "A", "UNI", dec!(0.333), TaxCategory::Iva10));
        item.set_quantity(dec!(1.25)).unwrap();

        let totals = InvoiceTotals::from_items(&[item], Currency::PYG).unwrap();

        assert_eq!(totals.total_sale.amount(), dec!(0.41625));
        assert_eq!(totals.tax_iva10.amount(), dec!(0.041625));
        assert_eq!(totals.total_tax.amount(), dec!(0.041625));
        assert_eq!(totals.total_sale.round_to_currency().amount(), dec!(0));
    }

    #[test]
    fn test_bracket_overflow_is_an_error() {
        let product = Product::new("A", "A", "UNI", Decimal::MAX, TaxCategory::Iva10);
        let items = vec![LineItem::from_product(&product), LineItem::from_product(&product)];

        let result = InvoiceTotals::from_items(&items, Currency::PYG);

        assert!(matches!(result, Err(InvoicingError::Amount(MoneyError::Overflow(_)))));
    }

    #[test]
    fn test_total_sale_overflow_is_an_error() {
        let items = vec![
            LineItem::from_product(&Product::new("A", "A", "UNI", Decimal::MAX, TaxCategory::Iva10)),
            LineItem::from_product(&Product::new("B", "B", "UNI", Decimal::MAX, TaxCategory::Exempt)),
        ];

        let result = InvoiceTotals::from_items(&items, Currency::PYG);

        assert!(matches!(result, Err(InvoicingError::Amount(MoneyError::Overflow("addition")))));
    }
}
