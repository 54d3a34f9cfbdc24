//! REST listing adapter
//!
//! Lists documents through the invoicing service's HTTP API:
//!
//! ```text
//! GET {base_url}/generar-documento/listar?estado=&numeroDocumento=&cdc=&page=&limit=&sortBy=&sortOrder=
//! Content-Type: application/json
//! Authorization: Bearer <token>        (only when a token is configured)
//! ```
//!
//! # Error Handling
//!
//! - Transport errors -> `DocumentError::ListingFailed` with the transport message
//! - Non-2xx -> `DocumentError::ListingFailed` with the body's `message`, or a
//!   generic message when the body carries none
//! - 2xx with an undecodable body -> empty page, logged at warn
//!
//! Failures are logged at error and returned; nothing is retried.

use async_trait::async_trait;
use core_kernel::{DomainPort, PortError};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::error::{DocumentError, LISTING_FAILED_MESSAGE};
use crate::filter::DocumentFilter;
use crate::listing::ListingPage;
use crate::ports::DocumentListingPort;

/// Path of the listing endpoint, relative to the service base URL
pub const LISTING_PATH: &str = "/generar-documento/listar";

/// Configuration for the REST listing adapter
#[derive(Debug, Clone)]
pub struct ListingClientConfig {
    /// Base URL of the invoicing service (e.g. "https://api.example.com")
    pub base_url: String,

    /// Bearer token sent as `Authorization`, when present
    pub bearer_token: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ListingClientConfig {
    /// Configuration for the given base URL with default timeout and no token
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Sets the bearer token
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }
}

impl Default for ListingClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            bearer_token: None,
            timeout_secs: 30,
        }
    }
}

/// Body of a non-success response
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Document listing backed by the invoicing service REST API
#[derive(Debug, Clone)]
pub struct RestDocumentLister {
    client: reqwest::Client,
    config: ListingClientConfig,
}

impl RestDocumentLister {
    /// Creates the adapter and its HTTP client
    pub fn new(config: ListingClientConfig) -> Result<Self, DocumentError> {
        if config.base_url.trim().is_empty() {
            return Err(DocumentError::Configuration("base URL is empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DocumentError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Full URL of the listing endpoint, without query
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), LISTING_PATH)
    }

    async fn fetch(&self, filter: &DocumentFilter) -> Result<ListingPage, PortError> {
        let url = self.endpoint();
        let query = filter.query_pairs();
        debug!(%url, query = %filter.query_string(), "Listing documents");

        let mut request = self.client.get(&url).header(CONTENT_TYPE, "application/json");
        if !query.is_empty() {
            request = request.query(&query);
        }
        if let Some(token) = &self.config.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(PortError::connection)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PortError::Remote {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let body = response.bytes().await.map_err(PortError::connection)?;

        match serde_json::from_slice::<ListingPage>(&body) {
            Ok(page) => Ok(page),
            Err(e) => {
                warn!(error = %e, "Malformed listing response, showing an empty page");
                Ok(ListingPage::empty())
            }
        }
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| LISTING_FAILED_MESSAGE.to_string())
}

impl DomainPort for RestDocumentLister {}

#[async_trait]
impl DocumentListingPort for RestDocumentLister {
    async fn list(&self, filter: &DocumentFilter) -> Result<ListingPage, DocumentError> {
        self.fetch(filter).await.map_err(|e| {
            error!(error = %e, "Error al listar documentos");
            DocumentError::from(e)
        })
    }
}
