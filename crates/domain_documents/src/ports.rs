//! Document listing port

use async_trait::async_trait;
use core_kernel::DomainPort;

use crate::error::DocumentError;
use crate::filter::DocumentFilter;
use crate::listing::ListingPage;

/// Source of issued documents
///
/// Every call is a fresh request: implementations must not cache, retry or
/// de-duplicate.
#[async_trait]
pub trait DocumentListingPort: DomainPort {
    /// Fetches one page of documents matching the filter
    async fn list(&self, filter: &DocumentFilter) -> Result<ListingPage, DocumentError>;
}
