//! Invoice builder
//!
//! Holds the line items of the invoice being edited on the generation screen.
//! All edits are synchronous and owned by a single session (`&mut self`);
//! only submission reaches out to the issuance port.

use core_kernel::{Currency, LineItemId};
use domain_catalog::{Customer, Product, TaxCategory};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, error, info, warn};

use crate::error::InvoicingError;
use crate::invoice::Invoice;
use crate::line_item::LineItem;
use crate::ports::IssuancePort;
use crate::terms::PaymentTerms;
use crate::totals::InvoiceTotals;

/// Accumulates line items and derives the invoice totals
#[derive(Debug, Clone, Default)]
pub struct InvoiceBuilder {
    currency: Currency,
    items: Vec<LineItem>,
}

impl InvoiceBuilder {
    /// Creates an empty builder for the given currency
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            items: Vec::new(),
        }
    }

    /// Currency of every amount on the invoice
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Line items in insertion order
    pub fn line_items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up a line item
    pub fn line_item(&self, id: LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no rows were added
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends one unit of the product. The same product may appear on
    /// several rows.
    pub fn add_line_item(&mut self, product: &Product) -> LineItemId {
        let item = LineItem::from_product(product);
        let id = item.id();
        debug!(line_item_id = %id, code = %product.code, "Adding line item");
        self.items.push(item);
        id
    }

    /// Removes a row and returns it
    pub fn remove_line_item(&mut self, id: LineItemId) -> Result<LineItem, InvoicingError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| InvoicingError::LineItemNotFound(id.to_string()))?;

        debug!(line_item_id = %id, "Removing line item");
        Ok(self.items.remove(index))
    }

    /// Sets a row's quantity; values below one, or too large for the row
    /// subtotal, fail with `InvalidQuantity`
    pub fn set_quantity(&mut self, id: LineItemId, quantity: Decimal) -> Result<(), InvoicingError> {
        self.item_mut(id)?.set_quantity(quantity)
    }

    /// Adds one unit to a row
    pub fn increment_quantity(&mut self, id: LineItemId) -> Result<(), InvoicingError> {
        self.item_mut(id)?.increment()
    }

    /// Removes one unit from a row, stopping at one
    pub fn decrement_quantity(&mut self, id: LineItemId) -> Result<(), InvoicingError> {
        self.item_mut(id)?.decrement();
        Ok(())
    }

    /// Overrides a row's unit price
    pub fn set_unit_price(&mut self, id: LineItemId, price: Decimal) -> Result<(), InvoicingError> {
        self.item_mut(id)?.set_unit_price(price)
    }

    /// Overrides a row's unit price from free text as typed in a price field.
    ///
    /// Text that is not a number counts as a price of zero.
    pub fn set_unit_price_input(&mut self, id: LineItemId, input: &str) -> Result<(), InvoicingError> {
        let price = match Decimal::from_str(input.trim()) {
            Ok(price) => price,
            Err(_) => {
                warn!(line_item_id = %id, input, "Non-numeric price input, using 0");
                Decimal::ZERO
            }
        };
        self.set_unit_price(id, price)
    }

    /// Moves a row to another IVA bracket
    pub fn set_tax_category(&mut self, id: LineItemId, category: TaxCategory) -> Result<(), InvoicingError> {
        self.item_mut(id)?.set_tax_category(category);
        Ok(())
    }

    /// Re-aggregates every row into invoice totals
    pub fn compute_totals(&self) -> Result<InvoiceTotals, InvoicingError> {
        InvoiceTotals::from_items(&self.items, self.currency)
    }

    /// Drops every row
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Assembles the invoice and hands it to the issuance service.
    ///
    /// Validation failures and issuance failures leave the builder untouched.
    /// On success the builder is emptied and the issued invoice returned.
    pub async fn submit(
        &mut self,
        customer: Option<&Customer>,
        payment_terms: PaymentTerms,
        issuer: &dyn IssuancePort,
    ) -> Result<Invoice, InvoicingError> {
        let customer = customer.ok_or(InvoicingError::MissingCustomer)?;
        if self.items.is_empty() {
            return Err(InvoicingError::EmptyInvoice);
        }

        let mut invoice = Invoice::draft(
            customer.clone(),
            payment_terms,
            self.currency,
            self.items.clone(),
        );
        let totals = invoice.totals()?;

        debug!(
            invoice_id = %invoice.id,
            items = invoice.items().len(),
            total_sale = %totals.total_sale,
            "Submitting invoice for issuance"
        );

        let issued = issuer.issue(&invoice).await.map_err(|e| {
            error!(invoice_id = %invoice.id, error = %e, "Invoice issuance failed");
            InvoicingError::from(e)
        })?;

        invoice.mark_issued(issued.number)?;
        self.items.clear();

        info!(
            invoice_id = %invoice.id,
            number = ?invoice.number,
            customer = %invoice.customer.ruc,
            total_sale = %totals.total_sale,
            total_tax = %totals.total_tax,
            "Invoice issued"
        );
        Ok(invoice)
    }

    fn item_mut(&mut self, id: LineItemId) -> Result<&mut LineItem, InvoicingError> {
        self.items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| InvoicingError::LineItemNotFound(id.to_string()))
    }
}
