//! Listing responses

use serde::{Deserialize, Serialize};

use crate::record::DocumentRecord;

/// Pagination metadata, exactly as reported by the service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    #[serde(alias = "currentPage")]
    pub page: u32,
    pub limit: u32,
    #[serde(alias = "totalItems")]
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    #[serde(rename = "hasNext", alias = "hasNextPage")]
    pub has_next: bool,
    #[serde(rename = "hasPrev", alias = "hasPrevPage")]
    pub has_prev: bool,
}

/// One page of documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage {
    #[serde(rename = "documentos", default)]
    pub documents: Vec<DocumentRecord>,
    #[serde(rename = "paginacion", default)]
    pub pagination: Pagination,
}

impl ListingPage {
    /// A page with no documents and zeroed metadata
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
