//! Issuance port
//!
//! Issuing and voiding invoices is the job of a remote service that is not
//! available yet. The builder depends only on [`IssuancePort`]; the
//! [`UnavailableIssuance`] stub stands in until a real adapter exists.

use async_trait::async_trait;
use core_kernel::{DomainPort, InvoiceId, PortError};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::invoice::Invoice;

/// What the issuance service returns for an accepted invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedDocument {
    /// Document number (establecimiento-punto-número)
    pub number: String,
    /// Control code of the signed document, when already known
    pub cdc: Option<String>,
}

/// Remote capability that issues and voids invoices
#[async_trait]
pub trait IssuancePort: DomainPort {
    /// Issues a draft invoice
    async fn issue(&self, invoice: &Invoice) -> Result<IssuedDocument, PortError>;

    /// Voids a previously issued invoice
    async fn cancel(&self, invoice_id: InvoiceId) -> Result<(), PortError>;
}

/// Issuance port used while no issuance endpoint exists; every call fails
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableIssuance;

impl DomainPort for UnavailableIssuance {}

#[async_trait]
impl IssuancePort for UnavailableIssuance {
    async fn issue(&self, invoice: &Invoice) -> Result<IssuedDocument, PortError> {
        warn!(invoice_id = %invoice.id, "Invoice issuance requested but no issuance service is configured");
        Err(PortError::not_implemented("issue_invoice"))
    }

    async fn cancel(&self, invoice_id: InvoiceId) -> Result<(), PortError> {
        warn!(%invoice_id, "Invoice cancellation requested but no issuance service is configured");
        Err(PortError::not_implemented("cancel_invoice"))
    }
}
