//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use domain_catalog::{Product, TaxCategory};
use domain_documents::{DocumentRecord, ListingPage, Lote, Pagination};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Builder for catalog products
pub struct TestProductBuilder {
    code: String,
    description: String,
    unit: String,
    unit_price: Decimal,
    tax_category: TaxCategory,
    category: Option<String>,
}

impl Default for TestProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProductBuilder {
    /// Creates a new builder with default values (10,000, IVA 10%)
    pub fn new() -> Self {
        Self {
            code: "TEST001".to_string(),
            description: "Producto de prueba".to_string(),
            unit: "UNI".to_string(),
            unit_price: dec!(10000),
            tax_category: TaxCategory::Iva10,
            category: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.unit_price = price;
        self
    }

    pub fn with_tax_category(mut self, category: TaxCategory) -> Self {
        self.tax_category = category;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builds the product with a fresh id
    pub fn build(self) -> Product {
        let product = Product::new(
            self.code,
            self.description,
            self.unit,
            self.unit_price,
            self.tax_category,
        );
        match self.category {
            Some(category) => product.with_category(category),
            None => product,
        }
    }
}

/// Builder for listing records
pub struct DocumentRecordBuilder {
    record: DocumentRecord,
}

impl Default for DocumentRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRecordBuilder {
    /// Creates an approved record numbered 001-001-0000001
    pub fn new() -> Self {
        Self {
            record: DocumentRecord {
                id: "1".to_string(),
                document_number: Some("001-001-0000001".to_string()),
                document_type: Some("Factura electrónica".to_string()),
                status: "APROBADO".to_string(),
                customer_name: Some("Cliente Ejemplo 1".to_string()),
                total: Some(dec!(100000)),
                ..Default::default()
            },
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.record.id = id.into();
        self
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.record.document_number = Some(number.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.record.status = status.into();
        self
    }

    pub fn with_cdc(mut self, cdc: impl Into<String>) -> Self {
        self.record.cdc = Some(cdc.into());
        self
    }

    pub fn with_total(mut self, total: Decimal) -> Self {
        self.record.total = Some(total);
        self
    }

    pub fn with_lote_status(mut self, status: impl Into<String>) -> Self {
        self.record.lote = Some(Lote {
            status: Some(status.into()),
            ..Default::default()
        });
        self
    }

    pub fn build(self) -> DocumentRecord {
        self.record
    }
}

/// Wraps records in a single page whose metadata matches its contents
pub fn single_page(documents: Vec<DocumentRecord>) -> ListingPage {
    let count = documents.len();
    ListingPage {
        documents,
        pagination: Pagination {
            page: 1,
            limit: count.max(1) as u32,
            total: count as u64,
            total_pages: 1,
            has_next: false,
            has_prev: false,
        },
    }
}
