//! Application error types

use domain_catalog::CatalogError;
use domain_documents::DocumentError;
use domain_invoicing::InvoicingError;
use thiserror::Error;

/// Errors surfaced by the application layer
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Telemetry error: {0}")]
    Telemetry(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Invoicing(#[from] InvoicingError),

    #[error(transparent)]
    Documents(#[from] DocumentError),
}
