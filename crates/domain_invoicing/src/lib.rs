//! Invoicing Domain - Line Items, IVA Aggregation and Issuance
//!
//! This crate builds invoices (facturas) line by line and derives the
//! amounts printed at the bottom of every Paraguayan electronic invoice.
//!
//! # Aggregation Rules
//!
//! - Each line item's subtotal is `quantity × unit price`, recomputed on every edit
//! - Line subtotals are grouped by IVA bracket (exentas, 5%, 10%)
//! - Total sale is the sum of the three bracket subtotals
//! - Total IVA is `subtotal 5% × 0.05 + subtotal 10% × 0.10`
//!
//! Totals are never stored: they are re-aggregated from the items on demand.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_invoicing::{InvoiceBuilder, PaymentTerms, UnavailableIssuance};
//!
//! let mut builder = InvoiceBuilder::default();
//! let item = builder.add_line_item(&product);
//! builder.set_quantity(item, dec!(3))?;
//!
//! let totals = builder.compute_totals()?;
//! let invoice = builder.submit(Some(&customer), PaymentTerms::Cash, &issuer).await?;
//! ```

pub mod line_item;
pub mod terms;
pub mod totals;
pub mod invoice;
pub mod builder;
pub mod ports;
pub mod services;
pub mod error;

pub use line_item::LineItem;
pub use terms::PaymentTerms;
pub use totals::InvoiceTotals;
pub use invoice::{Invoice, InvoiceStatus};
pub use builder::InvoiceBuilder;
pub use ports::{IssuancePort, IssuedDocument, UnavailableIssuance};
pub use error::InvoicingError;
