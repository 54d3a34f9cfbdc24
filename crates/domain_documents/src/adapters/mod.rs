//! Listing adapters
//!
//! - **RestDocumentLister**: the invoicing service's `generar-documento/listar` endpoint

pub mod rest;

pub use rest::{RestDocumentLister, ListingClientConfig};
