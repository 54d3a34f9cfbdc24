//! Invoicing domain errors

use core_kernel::{MoneyError, PortError};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::invoice::InvoiceStatus;

/// Errors that can occur while building or issuing an invoice
#[derive(Debug, Error)]
pub enum InvoicingError {
    /// Quantity below one unit, or too large for the line subtotal
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(Decimal),

    /// Negative unit price, or too large for the line subtotal
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Line item not found on the invoice being built
    #[error("Line item not found: {0}")]
    LineItemNotFound(String),

    /// No customer selected at submission
    #[error("A customer must be selected before issuing")]
    MissingCustomer,

    /// No line items at submission
    #[error("The invoice must contain at least one line item")]
    EmptyInvoice,

    /// Invoice amounts too large to represent
    #[error("Amount error: {0}")]
    Amount(#[from] MoneyError),

    /// Status change not allowed from the current status
    #[error("Invalid status transition: {from:?} -> {to:?}")]
    InvalidStateTransition {
        from: InvoiceStatus,
        to: InvoiceStatus,
    },

    /// The backing capability does not exist yet
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// The issuance collaborator failed
    #[error("Issuance failed: {0}")]
    Issuance(#[source] PortError),
}

impl From<PortError> for InvoicingError {
    fn from(error: PortError) -> Self {
        match error {
            PortError::NotImplemented { operation } => InvoicingError::NotImplemented(operation),
            other => InvoicingError::Issuance(other),
        }
    }
}
