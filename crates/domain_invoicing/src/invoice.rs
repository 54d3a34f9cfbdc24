//! Invoice aggregate
//!
//! An invoice is assembled by the builder at submission time and then moves
//! through `borrador → emitida → anulada`.

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::{Currency, InvoiceId};
use domain_catalog::Customer;
use serde::{Deserialize, Serialize};

use crate::error::InvoicingError;
use crate::line_item::LineItem;
use crate::terms::PaymentTerms;
use crate::totals::InvoiceTotals;

/// Invoice status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// Being assembled, not yet accepted by the issuance service
    #[serde(rename = "borrador")]
    Draft,
    /// Accepted and numbered
    #[serde(rename = "emitida")]
    Issued,
    /// Voided after issuance
    #[serde(rename = "anulada")]
    Cancelled,
}

/// An electronic invoice (factura)
#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    /// Unique identifier
    pub id: InvoiceId,
    /// Document number assigned at issuance
    pub number: Option<String>,
    /// Issue date
    pub issue_date: NaiveDate,
    /// Customer billed
    pub customer: Customer,
    /// Payment terms
    pub payment_terms: PaymentTerms,
    /// Currency of every amount on the invoice
    pub currency: Currency,
    /// Status
    pub status: InvoiceStatus,
    /// Line items, in display order
    items: Vec<LineItem>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Assembles a draft invoice
    pub fn draft(
        customer: Customer,
        payment_terms: PaymentTerms,
        currency: Currency,
        items: Vec<LineItem>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: InvoiceId::new_v7(),
            number: None,
            issue_date: now.date_naive(),
            customer,
            payment_terms,
            currency,
            status: InvoiceStatus::Draft,
            items,
            created_at: now,
            updated_at: now,
        }
    }

    /// Line items in display order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Recomputes the invoice totals from the items
    pub fn totals(&self) -> Result<InvoiceTotals, InvoicingError> {
        InvoiceTotals::from_items(&self.items, self.currency)
    }

    /// Records the number assigned by the issuance service
    pub fn mark_issued(&mut self, number: impl Into<String>) -> Result<(), InvoicingError> {
        self.transition(InvoiceStatus::Draft, InvoiceStatus::Issued)?;
        self.number = Some(number.into());
        Ok(())
    }

    /// Voids an issued invoice
    pub fn mark_cancelled(&mut self) -> Result<(), InvoicingError> {
        self.transition(InvoiceStatus::Issued, InvoiceStatus::Cancelled)
    }

    fn transition(&mut self, expected: InvoiceStatus, to: InvoiceStatus) -> Result<(), InvoicingError> {
        if self.status != expected {
            return Err(InvoicingError::InvalidStateTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        self.updated_at = Utc::now();
        Ok(())
    }
}
