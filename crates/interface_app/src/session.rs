//! Invoice generation session
//!
//! Ties the session's catalog, the invoice builder, the selected customer and
//! payment terms to an issuance service. One session per generation screen.

use core_kernel::{Currency, CustomerId, LineItemId, ProductId};
use domain_catalog::{Catalog, Customer};
use domain_invoicing::services::cancel_invoice;
use domain_invoicing::{Invoice, InvoiceBuilder, InvoiceTotals, IssuancePort, PaymentTerms};
use std::sync::Arc;
use tracing::debug;

use crate::error::AppError;

/// State of one invoice generation screen
pub struct InvoiceSession {
    catalog: Catalog,
    builder: InvoiceBuilder,
    customer: Option<CustomerId>,
    payment_terms: PaymentTerms,
    issuer: Arc<dyn IssuancePort>,
}

impl InvoiceSession {
    pub fn new(catalog: Catalog, issuer: Arc<dyn IssuancePort>, currency: Currency) -> Self {
        Self {
            catalog,
            builder: InvoiceBuilder::new(currency),
            customer: None,
            payment_terms: PaymentTerms::default(),
            issuer,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable catalog, for registering customers and products
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn builder(&self) -> &InvoiceBuilder {
        &self.builder
    }

    /// Mutable builder, for editing rows in place
    pub fn builder_mut(&mut self) -> &mut InvoiceBuilder {
        &mut self.builder
    }

    /// Selects the customer to invoice; it must exist in the catalog
    pub fn select_customer(&mut self, id: CustomerId) -> Result<&Customer, AppError> {
        let customer = self.catalog.customer(id)?;
        debug!(customer_id = %id, ruc = %customer.ruc, "Customer selected");
        self.customer = Some(id);
        Ok(customer)
    }

    pub fn clear_customer(&mut self) {
        self.customer = None;
    }

    pub fn selected_customer(&self) -> Option<&Customer> {
        self.customer.and_then(|id| self.catalog.customer(id).ok())
    }

    pub fn set_payment_terms(&mut self, terms: PaymentTerms) {
        self.payment_terms = terms;
    }

    pub fn payment_terms(&self) -> PaymentTerms {
        self.payment_terms
    }

    /// Adds one unit of a catalog product as a new row
    pub fn add_product(&mut self, id: ProductId) -> Result<LineItemId, AppError> {
        let product = self.catalog.product(id)?;
        Ok(self.builder.add_line_item(product))
    }

    /// Adds one unit of the product with the given code, if any
    pub fn add_product_by_code(&mut self, code: &str) -> Option<LineItemId> {
        let product = self.catalog.product_by_code(code)?;
        Some(self.builder.add_line_item(product))
    }

    pub fn totals(&self) -> Result<InvoiceTotals, AppError> {
        Ok(self.builder.compute_totals()?)
    }

    /// Submits the invoice. On success the form is reset: rows cleared,
    /// customer deselected, terms back to cash.
    pub async fn submit(&mut self) -> Result<Invoice, AppError> {
        let customer = self.selected_customer().cloned();

        let invoice = self
            .builder
            .submit(customer.as_ref(), self.payment_terms, self.issuer.as_ref())
            .await?;

        self.customer = None;
        self.payment_terms = PaymentTerms::default();
        Ok(invoice)
    }

    /// Cancels an issued invoice through the same issuance service
    pub async fn cancel(&self, invoice: &mut Invoice) -> Result<(), AppError> {
        cancel_invoice(invoice, self.issuer.as_ref()).await?;
        Ok(())
    }
}
