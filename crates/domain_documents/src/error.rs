//! Documents domain errors

use core_kernel::PortError;
use thiserror::Error;

/// Generic message used when the service gives no reason for a failure
pub const LISTING_FAILED_MESSAGE: &str = "Error al listar documentos";

/// Errors that can occur while listing documents
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The listing request failed (transport error or non-success status)
    #[error("Listing failed: {0}")]
    ListingFailed(String),

    /// The listing client could not be set up
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DocumentError {
    /// Message to show in the list view
    pub fn message(&self) -> &str {
        match self {
            DocumentError::ListingFailed(message) | DocumentError::Configuration(message) => message,
        }
    }
}

impl From<PortError> for DocumentError {
    fn from(error: PortError) -> Self {
        match error {
            PortError::Remote { message, .. } => DocumentError::ListingFailed(message),
            other => DocumentError::ListingFailed(other.to_string()),
        }
    }
}
