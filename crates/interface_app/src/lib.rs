//! Application Layer
//!
//! Wires the domain crates into the two screens of the invoicing app: the
//! home feed of issued documents and the invoice generation session.
//!
//! # Environment Variables
//!
//! * `FACTURA_API_BASE_URL` - Invoicing service base URL (default: http://localhost:3000)
//! * `FACTURA_API_TOKEN` - Bearer token for the invoicing service (optional)
//! * `FACTURA_REQUEST_TIMEOUT_SECS` - HTTP request timeout (default: 30)
//! * `FACTURA_PAGE_SIZE` - Documents per home feed page (default: 10)
//! * `FACTURA_LOG_LEVEL` - trace, debug, info, warn, error (default: info)
//! * `FACTURA_LOG_FORMAT` - pretty or json (default: pretty)
//!
//! A `.env` file in the working directory is read by [`AppConfig::load`].
//!
//! # Example
//!
//! ```rust,ignore
//! let config = AppConfig::load()?;
//! init_tracing(&config.log_level, config.log_format)?;
//!
//! let app = AppContext::from_config(config)?;
//! let feed = app.home_feed();
//! feed.refresh().await;
//! ```

pub mod config;
pub mod telemetry;
pub mod feed;
pub mod session;
pub mod error;

pub use config::{AppConfig, LogFormat};
pub use telemetry::init_tracing;
pub use feed::{FeedSummary, HomeFeed, RefreshOutcome};
pub use session::InvoiceSession;
pub use error::AppError;

use core_kernel::Currency;
use domain_catalog::Catalog;
use domain_documents::{DocumentListingPort, RestDocumentLister};
use domain_invoicing::{IssuancePort, UnavailableIssuance};
use std::sync::Arc;
use tracing::info;

/// Shared services of a running app
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub lister: Arc<dyn DocumentListingPort>,
    pub issuer: Arc<dyn IssuancePort>,
}

impl AppContext {
    /// Builds the REST lister and the issuance stub from configuration
    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        let lister = RestDocumentLister::new(config.listing_config())?;

        info!(
            base_url = %config.api_base_url,
            authenticated = config.api_token.is_some(),
            page_size = config.page_size,
            "Application context ready"
        );

        Ok(Self {
            config,
            lister: Arc::new(lister),
            issuer: Arc::new(UnavailableIssuance),
        })
    }

    /// Replaces the issuance service
    pub fn with_issuer(mut self, issuer: Arc<dyn IssuancePort>) -> Self {
        self.issuer = issuer;
        self
    }

    /// A home feed over the configured lister
    pub fn home_feed(&self) -> HomeFeed {
        HomeFeed::new(Arc::clone(&self.lister), self.config.page_size)
    }

    /// A generation session over the sample catalog, in guaraníes
    pub fn invoice_session(&self) -> InvoiceSession {
        InvoiceSession::new(Catalog::with_samples(), Arc::clone(&self.issuer), Currency::PYG)
    }
}
