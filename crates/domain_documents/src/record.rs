//! Document records
//!
//! Two shapes of document reach the home feed: records returned by the
//! listing service and documents held locally (samples, drafts not yet sent).
//! They are tagged as [`DocumentEntry`] variants when they enter the feed so
//! the display layer never has to guess which shape it holds.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Batch (lote) the document was sent to the tax authority in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lote {
    #[serde(deserialize_with = "optional_text")]
    pub id: Option<String>,
    #[serde(rename = "numeroLote", alias = "numero", deserialize_with = "optional_text")]
    pub number: Option<String>,
    #[serde(rename = "estado")]
    pub status: Option<String>,
    #[serde(rename = "fechaEnvio")]
    pub sent_at: Option<String>,
    #[serde(rename = "mensaje")]
    pub message: Option<String>,
}

/// A document as returned by the listing service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentRecord {
    #[serde(deserialize_with = "text_or_number")]
    pub id: String,
    /// Control code of the signed document
    pub cdc: Option<String>,
    #[serde(rename = "numeroDocumento", alias = "numero")]
    pub document_number: Option<String>,
    #[serde(rename = "tipoDocumento", alias = "tipo")]
    pub document_type: Option<String>,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "fechaCreacion", alias = "fecha")]
    pub created_at: Option<String>,
    #[serde(rename = "razonSocialReceptor", alias = "cliente")]
    pub customer_name: Option<String>,
    #[serde(rename = "rucReceptor")]
    pub customer_ruc: Option<String>,
    #[serde(alias = "montoTotal")]
    pub total: Option<Decimal>,
    pub lote: Option<Lote>,
    /// Signed XML, inline
    #[serde(rename = "xmlFirmado")]
    pub signed_xml: Option<String>,
    /// Where the signed XML can be downloaded
    #[serde(rename = "urlXml")]
    pub xml_url: Option<String>,
    /// Where the printable representation (KuDE) can be downloaded
    #[serde(rename = "urlKude")]
    pub kude_url: Option<String>,
}

/// A document held on the device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalDocument {
    pub id: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "cliente")]
    pub customer: String,
    pub total: Decimal,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "archivo")]
    pub file: Option<String>,
}

/// Broad classification of a status for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Success,
    Warning,
    Error,
    Neutral,
}

impl StatusTone {
    /// Classifies a local or remote status string (case-insensitive)
    pub fn of(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "emitida" | "aprobado" | "aprobado con observacion" => StatusTone::Success,
            "borrador" | "pendiente" | "procesando" => StatusTone::Warning,
            "anulada" | "rechazado" | "cancelado" => StatusTone::Error,
            _ => StatusTone::Neutral,
        }
    }
}

/// A document in the home feed, tagged by where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "document", rename_all = "snake_case")]
pub enum DocumentEntry {
    /// Returned by the listing service
    Issued(DocumentRecord),
    /// Held on the device
    Local(LocalDocument),
}

impl DocumentEntry {
    pub fn id(&self) -> &str {
        match self {
            DocumentEntry::Issued(record) => &record.id,
            DocumentEntry::Local(document) => &document.id,
        }
    }

    pub fn number(&self) -> Option<&str> {
        match self {
            DocumentEntry::Issued(record) => record.document_number.as_deref(),
            DocumentEntry::Local(document) => Some(&document.number),
        }
    }

    pub fn status(&self) -> &str {
        match self {
            DocumentEntry::Issued(record) => &record.status,
            DocumentEntry::Local(document) => &document.status,
        }
    }

    pub fn status_tone(&self) -> StatusTone {
        StatusTone::of(self.status())
    }

    pub fn customer(&self) -> Option<&str> {
        match self {
            DocumentEntry::Issued(record) => record.customer_name.as_deref(),
            DocumentEntry::Local(document) => Some(&document.customer),
        }
    }

    pub fn total(&self) -> Option<Decimal> {
        match self {
            DocumentEntry::Issued(record) => record.total,
            DocumentEntry::Local(document) => Some(document.total),
        }
    }

    /// Control code; only remote documents have one
    pub fn cdc(&self) -> Option<&str> {
        match self {
            DocumentEntry::Issued(record) => record.cdc.as_deref(),
            DocumentEntry::Local(_) => None,
        }
    }

    /// Status of the batch the document was sent in, if any
    pub fn lote_status(&self) -> Option<&str> {
        match self {
            DocumentEntry::Issued(record) => record.lote.as_ref().and_then(|lote| lote.status.as_deref()),
            DocumentEntry::Local(_) => None,
        }
    }
}

impl From<DocumentRecord> for DocumentEntry {
    fn from(record: DocumentRecord) -> Self {
        DocumentEntry::Issued(record)
    }
}

impl From<LocalDocument> for DocumentEntry {
    fn from(document: LocalDocument) -> Self {
        DocumentEntry::Local(document)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<TextOrNumber> for String {
    fn from(value: TextOrNumber) -> Self {
        match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Integer(n) => n.to_string(),
            TextOrNumber::Float(n) => n.to_string(),
        }
    }
}

/// Ids arrive as strings or as numbers depending on the backend version
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    TextOrNumber::deserialize(deserializer).map(String::from)
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<TextOrNumber>::deserialize(deserializer).map(|value| value.map(String::from))
}
