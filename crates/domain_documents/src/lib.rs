//! Documents Domain - Issued Documents and Remote Listing
//!
//! Documents are issued and signed by the remote invoicing service; this
//! crate only reads them. It turns a [`DocumentFilter`] into the listing
//! endpoint's query, decodes the returned page, and tags every document at
//! ingestion as either a remote record or a locally held one.
//!
//! # Query Contract
//!
//! Absent filter fields are never sent, not even as empty values: the
//! service treats an omitted parameter differently from an empty one.
//!
//! # Ordering
//!
//! Requests are neither cached, retried nor cancelled. Callers that fire
//! overlapping requests use a [`RequestSequencer`] to keep only the answer
//! to the latest one.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_documents::{DocumentFilter, DocumentStatus, RestDocumentLister, ListingClientConfig};
//!
//! let lister = RestDocumentLister::new(ListingClientConfig::new("https://api.example.com"))?;
//! let filter = DocumentFilter::new().with_status(DocumentStatus::Aprobado).with_page(2);
//! let page = lister.list(&filter).await?;
//! ```

pub mod record;
pub mod filter;
pub mod listing;
pub mod ports;
pub mod adapters;
pub mod sequencing;
pub mod error;

pub use record::{DocumentRecord, Lote, LocalDocument, DocumentEntry, StatusTone};
pub use filter::{DocumentFilter, DocumentStatus, SortField, SortOrder};
pub use listing::{ListingPage, Pagination};
pub use ports::DocumentListingPort;
pub use adapters::{RestDocumentLister, ListingClientConfig};
pub use sequencing::{RequestSequencer, Sequenced};
pub use error::DocumentError;
