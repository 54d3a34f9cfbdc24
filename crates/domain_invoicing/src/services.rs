//! Invoice lifecycle operations that go through the issuance port

use tracing::{error, info};

use crate::error::InvoicingError;
use crate::invoice::{Invoice, InvoiceStatus};
use crate::ports::IssuancePort;

/// Voids an issued invoice through the issuance service.
///
/// The local status only changes once the service has accepted the request.
pub async fn cancel_invoice(
    invoice: &mut Invoice,
    issuer: &dyn IssuancePort,
) -> Result<(), InvoicingError> {
    if invoice.status != InvoiceStatus::Issued {
        return Err(InvoicingError::InvalidStateTransition {
            from: invoice.status,
            to: InvoiceStatus::Cancelled,
        });
    }

    issuer.cancel(invoice.id).await.map_err(|e| {
        error!(invoice_id = %invoice.id, error = %e, "Invoice cancellation failed");
        InvoicingError::from(e)
    })?;

    invoice.mark_cancelled()?;
    info!(invoice_id = %invoice.id, number = ?invoice.number, "Invoice cancelled");
    Ok(())
}
