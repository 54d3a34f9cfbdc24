//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for catalog entities and listing
//! responses. These fixtures are consistent and predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::{Currency, Money};
use domain_catalog::{Customer, Product, TaxCategory};
use domain_documents::LocalDocument;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Ten thousand guaraníes
    pub fn pyg_10000() -> Money {
        Money::pyg(dec!(10000))
    }

    /// Zero guaraníes
    pub fn pyg_zero() -> Money {
        Money::zero(Currency::PYG)
    }

    /// A USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }
}

/// Fixture for catalog test data
pub struct CatalogFixtures;

impl CatalogFixtures {
    /// A fully populated customer
    pub fn customer() -> Customer {
        Customer::new("Cliente Ejemplo 1", "12345678-9", "Av. Principal 123")
            .with_phone("+595 21 123-4567")
            .with_email("cliente1@ejemplo.com")
    }

    /// A second customer, for switching selections
    pub fn other_customer() -> Customer {
        Customer::new("Cliente Ejemplo 2", "87654321-0", "Calle Secundaria 456")
    }

    /// 10,000 per unit, IVA 10%
    pub fn product_iva10() -> Product {
        Product::new("PROD001", "Producto de Ejemplo 1", "UNI", dec!(10000), TaxCategory::Iva10)
    }

    /// 5,000 per kilo, IVA 5%
    pub fn product_iva5() -> Product {
        Product::new("PROD002", "Producto de Ejemplo 2", "KG", dec!(5000), TaxCategory::Iva5)
    }

    /// 50,000 per unit, exempt
    pub fn service_exempt() -> Product {
        Product::new("SERV001", "Servicio de Consultoría", "UNI", dec!(50000), TaxCategory::Exempt)
    }
}

/// Fixture for document listing test data
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// An approved record as the listing service returns it
    pub fn approved_record_json() -> Value {
        json!({
            "id": 101,
            "cdc": "01800123456001001000001022024011512345678901",
            "numeroDocumento": "001-001-0000001",
            "tipoDocumento": "Factura electrónica",
            "estado": "APROBADO",
            "fechaCreacion": "2024-01-15T10:30:00Z",
            "razonSocialReceptor": "Cliente Ejemplo 1",
            "rucReceptor": "12345678-9",
            "total": 150000,
            "lote": { "id": 7, "numeroLote": "123456", "estado": "CONCLUIDO" }
        })
    }

    /// A rejected record without batch information
    pub fn rejected_record_json() -> Value {
        json!({
            "id": "102",
            "numeroDocumento": "001-001-0000002",
            "estado": "RECHAZADO",
            "razonSocialReceptor": "Cliente Ejemplo 2",
            "total": 55000
        })
    }

    /// A two-document first page out of three
    pub fn listing_json() -> Value {
        json!({
            "documentos": [Self::approved_record_json(), Self::rejected_record_json()],
            "paginacion": {
                "page": 1,
                "limit": 2,
                "total": 5,
                "totalPages": 3,
                "hasNext": true,
                "hasPrev": false
            }
        })
    }

    /// A listing with no documents
    pub fn empty_listing_json() -> Value {
        json!({
            "documentos": [],
            "paginacion": {
                "page": 1,
                "limit": 10,
                "total": 0,
                "totalPages": 0,
                "hasNext": false,
                "hasPrev": false
            }
        })
    }

    /// A locally held draft
    pub fn local_draft() -> LocalDocument {
        LocalDocument {
            id: "local-1".to_string(),
            kind: "Factura".to_string(),
            number: "001-001-0000003".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
            customer: "Cliente Ejemplo 1".to_string(),
            total: dec!(150000),
            status: "borrador".to_string(),
            file: None,
        }
    }
}
