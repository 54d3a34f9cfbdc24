//! Listing filters
//!
//! [`DocumentFilter`] is the only input to a listing request. Every field is
//! optional and only present fields become query parameters, in a fixed order.

use core_kernel::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Statuses the listing service assigns to documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentStatus {
    Aprobado,
    Rechazado,
    Pendiente,
    Procesando,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 4] = [
        DocumentStatus::Aprobado,
        DocumentStatus::Rechazado,
        DocumentStatus::Pendiente,
        DocumentStatus::Procesando,
    ];

    /// Query value
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Aprobado => "APROBADO",
            DocumentStatus::Rechazado => "RECHAZADO",
            DocumentStatus::Pendiente => "PENDIENTE",
            DocumentStatus::Procesando => "PROCESANDO",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Aprobado => "Aprobado",
            DocumentStatus::Rechazado => "Rechazado",
            DocumentStatus::Pendiente => "Pendiente",
            DocumentStatus::Procesando => "Procesando",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DocumentStatus> for String {
    fn from(status: DocumentStatus) -> Self {
        status.as_str().to_string()
    }
}

impl FromStr for DocumentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::unknown_value("document status", s))
    }
}

/// Field the listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    FechaCreacion,
    NumeroDocumento,
    Estado,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::FechaCreacion => "fechaCreacion",
            SortField::NumeroDocumento => "numeroDocumento",
            SortField::Estado => "estado",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Filter, sort and pagination settings for one listing request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFilter {
    /// Status value; free text so statuses unknown to this client still work
    pub status: Option<String>,
    /// Document number substring
    pub document_number: Option<String>,
    /// CDC substring
    pub cdc: Option<String>,
    /// 1-based page
    pub page: Option<u32>,
    /// Page size
    pub limit: Option<u32>,
    pub sort_by: Option<SortField>,
    pub sort_order: Option<SortOrder>,
}

impl DocumentFilter {
    /// A filter with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_document_number(mut self, number: impl Into<String>) -> Self {
        self.document_number = Some(number.into());
        self
    }

    pub fn with_cdc(mut self, cdc: impl Into<String>) -> Self {
        self.cdc = Some(cdc.into());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sorted_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_by = Some(field);
        self.sort_order = Some(order);
        self
    }

    /// Query parameters for the present fields.
    ///
    /// Blank text and zero page/limit count as absent and are left out.
    /// Other text is sent as given, surrounding spaces included.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        push_text(&mut pairs, "estado", self.status.as_deref());
        push_text(&mut pairs, "numeroDocumento", self.document_number.as_deref());
        push_text(&mut pairs, "cdc", self.cdc.as_deref());
        push_number(&mut pairs, "page", self.page);
        push_number(&mut pairs, "limit", self.limit);
        if let Some(field) = self.sort_by {
            pairs.push(("sortBy", field.as_str().to_string()));
        }
        if let Some(order) = self.sort_order {
            pairs.push(("sortOrder", order.as_str().to_string()));
        }

        pairs
    }

    /// URL-encoded query string, empty when no field is present
    pub fn query_string(&self) -> String {
        // Encoding a list of string pairs cannot fail.
        serde_urlencoded::to_string(self.query_pairs()).unwrap_or_default()
    }

    /// Number of fields that would be sent
    pub fn active_count(&self) -> usize {
        self.query_pairs().len()
    }

    /// Returns true if no field would be sent
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Same filter pointed at another page
    pub fn for_page(&self, page: u32) -> Self {
        Self {
            page: Some(page),
            ..self.clone()
        }
    }
}

fn push_text(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value.filter(|value| !value.trim().is_empty()) {
        pairs.push((key, value.to_string()));
    }
}

fn push_number(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<u32>) {
    if let Some(value) = value.filter(|value| *value > 0) {
        pairs.push((key, value.to_string()));
    }
}
