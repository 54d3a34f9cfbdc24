//! Ports for external collaborators
//!
//! The invoicing client talks to two remote capabilities: the document
//! listing service and the (not yet available) issuance service. Each domain
//! crate declares its own port trait on top of [`DomainPort`] and reports
//! failures through [`PortError`], so a REST adapter, a stub and a test mock
//! are interchangeable behind `Arc<dyn ...>`.
//!
//! ```rust,ignore
//! #[async_trait]
//! pub trait IssuancePort: DomainPort {
//!     async fn issue(&self, invoice: &Invoice) -> Result<IssuedDocument, PortError>;
//! }
//! ```

use std::error::Error as StdError;
use thiserror::Error;

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    /// Connection to the remote system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// The remote system answered with a non-success status
    #[error("Remote error ({status}): {message}")]
    Remote {
        status: u16,
        message: String,
    },

    /// The backing capability does not exist yet
    #[error("Not implemented: {operation}")]
    NotImplemented {
        operation: String,
    },
}

impl PortError {
    /// Creates a Connection error from the transport failure
    pub fn connection(source: impl StdError + Send + Sync + 'static) -> Self {
        PortError::Connection {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a NotImplemented error for the named operation
    pub fn not_implemented(operation: impl Into<String>) -> Self {
        PortError::NotImplemented {
            operation: operation.into(),
        }
    }
}

/// Marker trait for all domain ports
///
/// All port traits extend this marker so implementations can be shared
/// across tasks behind `Arc<dyn Port>`.
pub trait DomainPort: Send + Sync + 'static {}
